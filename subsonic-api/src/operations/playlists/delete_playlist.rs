//! deletePlaylist operation

use crate::error::PayloadError;
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// deletePlaylist operation
pub struct DeletePlaylistOperation;

/// Request for deletePlaylist operation
#[derive(Debug, Clone, Default)]
pub struct DeletePlaylistRequest {
    pub id: String,
}

/// Response for deletePlaylist operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlaylistResponse {
    pub envelope: Envelope,
}

impl SubsonicOperation for DeletePlaylistOperation {
    type Request = DeletePlaylistRequest;
    type Response = DeletePlaylistResponse;

    const ENDPOINT: &'static str = "deletePlaylist.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        Ok(DeletePlaylistResponse {
            envelope: parse_envelope(body),
        })
    }
}

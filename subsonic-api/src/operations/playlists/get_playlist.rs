//! getPlaylist operation

use super::parse_playlist;
use crate::error::PayloadError;
use crate::model::Playlist;
use crate::response::normalize::required_object;
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getPlaylist operation
pub struct GetPlaylistOperation;

/// Request for getPlaylist operation
#[derive(Debug, Clone, Default)]
pub struct GetPlaylistRequest {
    pub id: String,
}

/// Response for getPlaylist operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetPlaylistResponse {
    pub envelope: Envelope,
    pub playlist: Playlist,
}

impl SubsonicOperation for GetPlaylistOperation {
    type Request = GetPlaylistRequest;
    type Response = GetPlaylistResponse;

    const ENDPOINT: &'static str = "getPlaylist.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let playlist = parse_playlist(required_object(body, "playlist")?)?;

        Ok(GetPlaylistResponse {
            envelope: parse_envelope(body),
            playlist,
        })
    }
}

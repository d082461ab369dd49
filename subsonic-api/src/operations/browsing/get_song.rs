//! getSong operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{parse_record, required_object};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getSong operation
pub struct GetSongOperation;

/// Request for getSong operation
#[derive(Debug, Clone, Default)]
pub struct GetSongRequest {
    pub id: String,
}

/// Response for getSong operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetSongResponse {
    pub envelope: Envelope,
    pub song: Song,
}

impl SubsonicOperation for GetSongOperation {
    type Request = GetSongRequest;
    type Response = GetSongResponse;

    const ENDPOINT: &'static str = "getSong.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let song = parse_record(required_object(body, "song")?)?;

        Ok(GetSongResponse {
            envelope: parse_envelope(body),
            song,
        })
    }
}

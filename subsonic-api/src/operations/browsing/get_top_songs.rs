//! getTopSongs operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getTopSongs operation
pub struct GetTopSongsOperation;

/// Request for getTopSongs operation
#[derive(Debug, Clone, Default)]
pub struct GetTopSongsRequest {
    /// Artist name (not ID)
    pub artist: String,
    /// Maximum number of songs (server default 50)
    pub count: Option<u32>,
}

/// Response for getTopSongs operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetTopSongsResponse {
    pub envelope: Envelope,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetTopSongsOperation {
    type Request = GetTopSongsRequest;
    type Response = GetTopSongsResponse;

    const ENDPOINT: &'static str = "getTopSongs.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("artist", &request.artist)
            .with_opt("count", request.count)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let songs = match object_field(body, "topSongs") {
            Some(container) => parse_records(container, "song")?,
            None => Vec::new(),
        };

        Ok(GetTopSongsResponse {
            envelope: parse_envelope(body),
            songs,
        })
    }
}

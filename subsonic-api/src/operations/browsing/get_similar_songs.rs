//! getSimilarSongs2 operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getSimilarSongs2 operation
pub struct GetSimilarSongsOperation;

/// Request for getSimilarSongs2 operation
#[derive(Debug, Clone, Default)]
pub struct GetSimilarSongsRequest {
    /// Artist, album or song ID
    pub id: String,
    /// Maximum number of songs (server default 50)
    pub count: Option<u32>,
}

/// Response for getSimilarSongs2 operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetSimilarSongsResponse {
    pub envelope: Envelope,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetSimilarSongsOperation {
    type Request = GetSimilarSongsRequest;
    type Response = GetSimilarSongsResponse;

    const ENDPOINT: &'static str = "getSimilarSongs2.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("id", &request.id)
            .with_opt("count", request.count)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let songs = match object_field(body, "similarSongs2") {
            Some(container) => parse_records(container, "song")?,
            None => Vec::new(),
        };

        Ok(GetSimilarSongsResponse {
            envelope: parse_envelope(body),
            songs,
        })
    }
}

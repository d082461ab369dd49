//! getRandomSongs operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getRandomSongs operation
pub struct GetRandomSongsOperation;

/// Request for getRandomSongs operation
///
/// Every filter is optional; the server applies its own defaults (10 songs,
/// at most 500).
#[derive(Debug, Clone, Default)]
pub struct GetRandomSongsRequest {
    pub size: Option<u32>,
    pub genre: Option<String>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub music_folder_id: Option<String>,
}

/// Response for getRandomSongs operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetRandomSongsResponse {
    pub envelope: Envelope,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetRandomSongsOperation {
    type Request = GetRandomSongsRequest;
    type Response = GetRandomSongsResponse;

    const ENDPOINT: &'static str = "getRandomSongs.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with_opt("size", request.size)
            .with_opt("genre", request.genre.as_deref())
            .with_opt("fromYear", request.from_year)
            .with_opt("toYear", request.to_year)
            .with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let songs = match object_field(body, "randomSongs") {
            Some(container) => parse_records(container, "song")?,
            None => Vec::new(),
        };

        Ok(GetRandomSongsResponse {
            envelope: parse_envelope(body),
            songs,
        })
    }
}

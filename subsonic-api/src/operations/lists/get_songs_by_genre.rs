//! getSongsByGenre operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getSongsByGenre operation
pub struct GetSongsByGenreOperation;

/// Request for getSongsByGenre operation
#[derive(Debug, Clone, Default)]
pub struct GetSongsByGenreRequest {
    pub genre: String,
    /// Number of songs (server default 10, at most 500)
    pub count: Option<u32>,
    pub offset: Option<u32>,
    pub music_folder_id: Option<String>,
}

/// Response for getSongsByGenre operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetSongsByGenreResponse {
    pub envelope: Envelope,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetSongsByGenreOperation {
    type Request = GetSongsByGenreRequest;
    type Response = GetSongsByGenreResponse;

    const ENDPOINT: &'static str = "getSongsByGenre.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("genre", &request.genre)
            .with_opt("count", request.count)
            .with_opt("offset", request.offset)
            .with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let songs = match object_field(body, "songsByGenre") {
            Some(container) => parse_records(container, "song")?,
            None => Vec::new(),
        };

        Ok(GetSongsByGenreResponse {
            envelope: parse_envelope(body),
            songs,
        })
    }
}

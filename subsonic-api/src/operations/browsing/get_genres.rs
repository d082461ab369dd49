//! getGenres operation

use crate::error::PayloadError;
use crate::model::Genre;
use crate::response::normalize::{int_field, object_field, parse_list, string_field};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getGenres operation
pub struct GetGenresOperation;

/// Request for getGenres operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GetGenresRequest;

/// Response for getGenres operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetGenresResponse {
    pub envelope: Envelope,
    pub genres: Vec<Genre>,
}

impl SubsonicOperation for GetGenresOperation {
    type Request = GetGenresRequest;
    type Response = GetGenresResponse;

    const ENDPOINT: &'static str = "getGenres.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let genres = match object_field(body, "genres") {
            Some(container) => parse_list(container, "genre", |genre| Ok(Some(parse_genre(genre))))?,
            None => Vec::new(),
        };

        Ok(GetGenresResponse {
            envelope: parse_envelope(body),
            genres,
        })
    }
}

fn parse_genre(genre: &JsonObject) -> Genre {
    Genre {
        value: string_field(genre, "value")
            .or_else(|| string_field(genre, "name"))
            .unwrap_or_default(),
        song_count: int_field(genre, "songCount").unwrap_or(0),
        album_count: int_field(genre, "albumCount").unwrap_or(0),
    }
}

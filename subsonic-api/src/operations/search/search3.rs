//! search3 operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::{Album, Artist, Song};
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// search3 operation
pub struct SearchOperation;

/// Request for search3 operation
///
/// Counts default to 20 on the server; offsets page through each result kind
/// independently.
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub query: String,
    pub artist_count: Option<u32>,
    pub artist_offset: Option<u32>,
    pub album_count: Option<u32>,
    pub album_offset: Option<u32>,
    pub song_count: Option<u32>,
    pub song_offset: Option<u32>,
    pub music_folder_id: Option<String>,
}

impl SearchRequest {
    /// Search for `query` with server defaults for every count and offset
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }
}

/// Response for search3 operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResponse {
    pub envelope: Envelope,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for SearchOperation {
    type Request = SearchRequest;
    type Response = SearchResponse;

    const ENDPOINT: &'static str = "search3.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("query", &request.query)
            .with_opt("artistCount", request.artist_count)
            .with_opt("artistOffset", request.artist_offset)
            .with_opt("albumCount", request.album_count)
            .with_opt("albumOffset", request.album_offset)
            .with_opt("songCount", request.song_count)
            .with_opt("songOffset", request.song_offset)
            .with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let envelope = parse_envelope(body);
        let Some(container) = object_field(body, "searchResult3") else {
            return Ok(SearchResponse {
                envelope,
                ..Default::default()
            });
        };

        Ok(SearchResponse {
            envelope,
            artists: parse_records(container, "artist")?,
            albums: parse_records(container, "album")?,
            songs: parse_records(container, "song")?,
        })
    }
}

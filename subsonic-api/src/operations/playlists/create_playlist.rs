//! createPlaylist operation

use super::parse_playlist;
use crate::error::PayloadError;
use crate::model::Playlist;
use crate::response::normalize::object_field;
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// createPlaylist operation
///
/// Creates a playlist when `name` is given, or replaces the songs of an
/// existing playlist when `playlist_id` is given.
pub struct CreatePlaylistOperation;

/// Request for createPlaylist operation
#[derive(Debug, Clone, Default)]
pub struct CreatePlaylistRequest {
    pub playlist_id: Option<String>,
    pub name: Option<String>,
    /// Songs in playlist order, sent as repeated `songId` parameters
    pub song_ids: Vec<String>,
}

/// Response for createPlaylist operation
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlaylistResponse {
    pub envelope: Envelope,
    /// Servers implementing API versions before 1.14.0 return no playlist
    pub playlist: Option<Playlist>,
}

impl SubsonicOperation for CreatePlaylistOperation {
    type Request = CreatePlaylistRequest;
    type Response = CreatePlaylistResponse;

    const ENDPOINT: &'static str = "createPlaylist.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with_opt("playlistId", request.playlist_id.as_deref())
            .with_opt("name", request.name.as_deref())
            .with_all("songId", &request.song_ids)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let playlist = object_field(body, "playlist").map(parse_playlist).transpose()?;

        Ok(CreatePlaylistResponse {
            envelope: parse_envelope(body),
            playlist,
        })
    }
}

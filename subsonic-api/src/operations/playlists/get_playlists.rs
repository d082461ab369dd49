//! getPlaylists operation

use super::parse_playlist;
use crate::error::PayloadError;
use crate::model::Playlist;
use crate::response::normalize::{object_field, parse_list};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getPlaylists operation
pub struct GetPlaylistsOperation;

/// Request for getPlaylists operation
#[derive(Debug, Clone, Default)]
pub struct GetPlaylistsRequest {
    /// List another user's playlists (admin only)
    pub username: Option<String>,
}

/// Response for getPlaylists operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetPlaylistsResponse {
    pub envelope: Envelope,
    pub playlists: Vec<Playlist>,
}

impl SubsonicOperation for GetPlaylistsOperation {
    type Request = GetPlaylistsRequest;
    type Response = GetPlaylistsResponse;

    const ENDPOINT: &'static str = "getPlaylists.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with_opt("username", request.username.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let playlists = match object_field(body, "playlists") {
            Some(container) => parse_list(container, "playlist", |p| parse_playlist(p).map(Some))?,
            None => Vec::new(),
        };

        Ok(GetPlaylistsResponse {
            envelope: parse_envelope(body),
            playlists,
        })
    }
}

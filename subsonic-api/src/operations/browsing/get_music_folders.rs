//! getMusicFolders operation

use crate::error::PayloadError;
use crate::model::MusicFolder;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getMusicFolders operation
pub struct GetMusicFoldersOperation;

/// Request for getMusicFolders operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GetMusicFoldersRequest;

/// Response for getMusicFolders operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMusicFoldersResponse {
    pub envelope: Envelope,
    pub music_folders: Vec<MusicFolder>,
}

impl SubsonicOperation for GetMusicFoldersOperation {
    type Request = GetMusicFoldersRequest;
    type Response = GetMusicFoldersResponse;

    const ENDPOINT: &'static str = "getMusicFolders.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let music_folders = match object_field(body, "musicFolders") {
            Some(container) => parse_records(container, "musicFolder")?,
            None => Vec::new(),
        };

        Ok(GetMusicFoldersResponse {
            envelope: parse_envelope(body),
            music_folders,
        })
    }
}

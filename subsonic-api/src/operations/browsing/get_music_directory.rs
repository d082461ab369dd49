//! getMusicDirectory operation (file structure organisation)

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{int_field, parse_records, required_object, string_field};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getMusicDirectory operation
pub struct GetMusicDirectoryOperation;

/// Request for getMusicDirectory operation
#[derive(Debug, Clone, Default)]
pub struct GetMusicDirectoryRequest {
    pub id: String,
}

/// A directory and its immediate children
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Directory {
    pub id: String,
    pub parent: Option<String>,
    pub name: String,
    pub starred: Option<String>,
    pub play_count: Option<i64>,
    pub played: Option<String>,
    pub album_count: Option<i64>,
    /// Subdirectories and files (`child` on the wire)
    pub children: Vec<Song>,
}

/// Response for getMusicDirectory operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetMusicDirectoryResponse {
    pub envelope: Envelope,
    pub directory: Directory,
}

impl SubsonicOperation for GetMusicDirectoryOperation {
    type Request = GetMusicDirectoryRequest;
    type Response = GetMusicDirectoryResponse;

    const ENDPOINT: &'static str = "getMusicDirectory.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let directory = required_object(body, "directory")?;

        Ok(GetMusicDirectoryResponse {
            envelope: parse_envelope(body),
            directory: Directory {
                id: string_field(directory, "id").unwrap_or_default(),
                parent: string_field(directory, "parent"),
                name: string_field(directory, "name").unwrap_or_default(),
                starred: string_field(directory, "starred"),
                play_count: int_field(directory, "playCount"),
                played: string_field(directory, "played"),
                album_count: int_field(directory, "albumCount"),
                children: parse_records(directory, "child")?,
            },
        })
    }
}

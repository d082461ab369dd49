//! getIndexes operation (file structure organisation)

use serde::Deserialize;

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{
    int_field, lenient_opt_string, lenient_string, object_field, parse_list, parse_records, string_field,
};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getIndexes operation
pub struct GetIndexesOperation;

/// Request for getIndexes operation
#[derive(Debug, Clone, Default)]
pub struct GetIndexesRequest {
    pub music_folder_id: Option<String>,
    /// Only return a result if the index changed after this time (ms since epoch)
    pub if_modified_since: Option<i64>,
}

/// A top-level directory as listed by getIndexes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexArtist {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub cover_art: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub artist_image_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub starred: Option<String>,
}

/// Directories grouped under one index letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub artists: Vec<IndexArtist>,
}

/// A pinned directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Shortcut {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// Response for getIndexes operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetIndexesResponse {
    pub envelope: Envelope,
    /// Last change to the index, in ms since epoch (0 when absent)
    pub last_modified: i64,
    pub ignored_articles: String,
    pub shortcuts: Vec<Shortcut>,
    pub indexes: Vec<Index>,
    /// Files stored directly in the music folder root
    pub children: Vec<Song>,
}

impl SubsonicOperation for GetIndexesOperation {
    type Request = GetIndexesRequest;
    type Response = GetIndexesResponse;

    const ENDPOINT: &'static str = "getIndexes.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with_opt("musicFolderId", request.music_folder_id.as_deref())
            .with_opt("ifModifiedSince", request.if_modified_since)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let envelope = parse_envelope(body);
        let Some(container) = object_field(body, "indexes") else {
            return Ok(GetIndexesResponse {
                envelope,
                ..Default::default()
            });
        };

        Ok(GetIndexesResponse {
            envelope,
            last_modified: int_field(container, "lastModified").unwrap_or(0),
            ignored_articles: string_field(container, "ignoredArticles").unwrap_or_default(),
            shortcuts: parse_records(container, "shortcut")?,
            indexes: parse_list(container, "index", parse_index)?,
            children: parse_records(container, "child")?,
        })
    }
}

/// Indexes without a name are skipped
fn parse_index(index: &JsonObject) -> Result<Option<Index>, PayloadError> {
    let Some(name) = string_field(index, "name") else {
        return Ok(None);
    };

    Ok(Some(Index {
        name,
        artists: parse_records(index, "artist")?,
    }))
}

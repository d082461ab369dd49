//! getArtists operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::Artist;
use crate::response::normalize::{object_field, parse_list, parse_records, string_field};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getArtists operation
pub struct GetArtistsOperation;

/// Request for getArtists operation
#[derive(Debug, Clone, Default)]
pub struct GetArtistsRequest {
    pub music_folder_id: Option<String>,
}

/// Artists grouped under one index letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistIndex {
    pub name: String,
    pub artists: Vec<Artist>,
}

/// Response for getArtists operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetArtistsResponse {
    pub envelope: Envelope,
    /// Space-separated articles the server ignores when sorting ("The El La")
    pub ignored_articles: String,
    pub indexes: Vec<ArtistIndex>,
}

impl SubsonicOperation for GetArtistsOperation {
    type Request = GetArtistsRequest;
    type Response = GetArtistsResponse;

    const ENDPOINT: &'static str = "getArtists.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let envelope = parse_envelope(body);
        let Some(container) = object_field(body, "artists") else {
            return Ok(GetArtistsResponse {
                envelope,
                ..Default::default()
            });
        };

        Ok(GetArtistsResponse {
            envelope,
            ignored_articles: string_field(container, "ignoredArticles").unwrap_or_default(),
            indexes: parse_list(container, "index", parse_artist_index)?,
        })
    }
}

/// Indexes without a name are skipped
fn parse_artist_index(index: &JsonObject) -> Result<Option<ArtistIndex>, PayloadError> {
    let Some(name) = string_field(index, "name") else {
        return Ok(None);
    };

    Ok(Some(ArtistIndex {
        name,
        artists: parse_records(index, "artist")?,
    }))
}

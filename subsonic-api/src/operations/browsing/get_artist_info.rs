//! getArtistInfo2 operation (ID3 organisation)

use serde::Deserialize;

use crate::error::PayloadError;
use crate::model::Artist;
use crate::response::normalize::{lenient_opt_string, object_field, one_or_many, parse_record};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getArtistInfo2 operation
pub struct GetArtistInfoOperation;

/// Request for getArtistInfo2 operation
#[derive(Debug, Clone, Default)]
pub struct GetArtistInfoRequest {
    pub id: String,
}

/// Biography, external links and similar artists
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArtistInfo {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub biography: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub music_brainz_id: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub last_fm_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub small_image_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub medium_image_url: Option<String>,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub large_image_url: Option<String>,
    #[serde(rename = "similarArtist", deserialize_with = "one_or_many")]
    pub similar_artists: Vec<Artist>,
}

/// Response for getArtistInfo2 operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetArtistInfoResponse {
    pub envelope: Envelope,
    /// Empty when the server has no information for the artist
    pub artist_info: ArtistInfo,
}

impl SubsonicOperation for GetArtistInfoOperation {
    type Request = GetArtistInfoRequest;
    type Response = GetArtistInfoResponse;

    const ENDPOINT: &'static str = "getArtistInfo2.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let artist_info = match object_field(body, "artistInfo2") {
            Some(info) => parse_record(info)?,
            None => ArtistInfo::default(),
        };

        Ok(GetArtistInfoResponse {
            envelope: parse_envelope(body),
            artist_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_artist_info_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "artistInfo2": {
                "biography": "Bristol trip-hop collective.",
                "musicBrainzId": "10adbe5e-a2c0-4bf3-8249-2b4cbf6e6ca8",
                "lastFmUrl": "https://www.last.fm/music/Massive+Attack",
                "largeImageUrl": "https://img.example/large.jpg",
                "similarArtist": [
                    {"id": "ar-2", "name": "Portishead"},
                    {"id": "ar-3", "name": "Tricky"}
                ]
            }
        }));

        let info = GetArtistInfoOperation::parse_response(&body).unwrap().artist_info;
        assert_eq!(info.biography.as_deref(), Some("Bristol trip-hop collective."));
        assert_eq!(info.last_fm_url.as_deref(), Some("https://www.last.fm/music/Massive+Attack"));
        assert_eq!(info.small_image_url, None);
        assert_eq!(
            info.similar_artists.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            ["Portishead", "Tricky"]
        );
    }

    #[test]
    fn test_get_artist_info_single_similar_artist() {
        let body = test_body(json!({"artistInfo2": {"similarArtist": {"id": "ar-2", "name": "Portishead"}}}));
        let info = GetArtistInfoOperation::parse_response(&body).unwrap().artist_info;
        assert_eq!(info.similar_artists.len(), 1);
    }

    #[test]
    fn test_get_artist_info_missing_is_empty() {
        let body = test_body(json!({"status": "ok"}));
        let info = GetArtistInfoOperation::parse_response(&body).unwrap().artist_info;
        assert_eq!(info, ArtistInfo::default());
    }
}

//! getStarred2 operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::{Album, Artist, Song};
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getStarred2 operation
pub struct GetStarredOperation;

/// Request for getStarred2 operation
#[derive(Debug, Clone, Default)]
pub struct GetStarredRequest {
    pub music_folder_id: Option<String>,
}

/// Response for getStarred2 operation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetStarredResponse {
    pub envelope: Envelope,
    pub artists: Vec<Artist>,
    pub albums: Vec<Album>,
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetStarredOperation {
    type Request = GetStarredRequest;
    type Response = GetStarredResponse;

    const ENDPOINT: &'static str = "getStarred2.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let envelope = parse_envelope(body);
        let Some(container) = object_field(body, "starred2") else {
            return Ok(GetStarredResponse {
                envelope,
                ..Default::default()
            });
        };

        Ok(GetStarredResponse {
            envelope,
            artists: parse_records(container, "artist")?,
            albums: parse_records(container, "album")?,
            songs: parse_records(container, "song")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_starred_mixed_shapes() {
        let body = test_body(json!({
            "status": "ok",
            "starred2": {
                "artist": {"id": "ar-1", "name": "Portishead", "albumCount": 3},
                "album": [
                    {"id": "al-1", "name": "Dummy", "year": 1994},
                    {"id": "al-2", "name": "Third", "year": 2008}
                ],
                "song": [{"id": "s-1", "title": "Roads"}]
            }
        }));

        let response = GetStarredOperation::parse_response(&body).unwrap();
        assert_eq!(response.artists.len(), 1);
        assert_eq!(response.artists[0].name, "Portishead");
        assert_eq!(response.albums.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(), ["Dummy", "Third"]);
        assert_eq!(response.albums[1].year, Some(2008));
        assert_eq!(response.songs[0].title, "Roads");
    }

    #[test]
    fn test_get_starred_missing_container() {
        let body = test_body(json!({"status": "ok", "version": "1.16.1"}));

        let response = GetStarredOperation::parse_response(&body).unwrap();
        assert!(response.artists.is_empty());
        assert!(response.albums.is_empty());
        assert!(response.songs.is_empty());
        assert_eq!(response.envelope.api_version, "1.16.1");
    }

    #[test]
    fn test_get_starred_folder_param() {
        let request = GetStarredRequest {
            music_folder_id: Some("2".to_string()),
        };
        let params = GetStarredOperation::build_params(&request);
        assert_eq!(params.single(), [("musicFolderId".to_string(), "2".to_string())]);
        assert!(GetStarredOperation::build_params(&GetStarredRequest::default()).is_empty());
    }

    #[test]
    fn test_get_starred_rejects_scalar_list() {
        let body = test_body(json!({"starred2": {"song": "s-1"}}));
        assert!(matches!(
            GetStarredOperation::parse_response(&body),
            Err(PayloadError::InvalidType { .. })
        ));
    }
}

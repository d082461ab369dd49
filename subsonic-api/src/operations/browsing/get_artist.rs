//! getArtist operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::{Album, Artist};
use crate::response::normalize::{parse_record, parse_records, required_object};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getArtist operation
pub struct GetArtistOperation;

/// Request for getArtist operation
#[derive(Debug, Clone, Default)]
pub struct GetArtistRequest {
    pub id: String,
}

/// Response for getArtist operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetArtistResponse {
    pub envelope: Envelope,
    pub artist: Artist,
    /// The artist's albums (`album` on the wire)
    pub albums: Vec<Album>,
}

impl SubsonicOperation for GetArtistOperation {
    type Request = GetArtistRequest;
    type Response = GetArtistResponse;

    const ENDPOINT: &'static str = "getArtist.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let artist = required_object(body, "artist")?;

        Ok(GetArtistResponse {
            envelope: parse_envelope(body),
            artist: parse_record(artist)?,
            albums: parse_records(artist, "album")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_artist_params() {
        let request = GetArtistRequest {
            id: "ar-7".to_string(),
        };
        assert_eq!(
            GetArtistOperation::build_params(&request).single(),
            [("id".to_string(), "ar-7".to_string())]
        );
    }

    #[test]
    fn test_get_artist_with_albums() {
        let body = test_body(json!({
            "status": "ok",
            "artist": {
                "id": "ar-7",
                "name": "Massive Attack",
                "albumCount": 2,
                "roles": ["artist", "producer"],
                "album": [
                    {"id": "al-1", "name": "Blue Lines", "year": 1991, "songCount": 9},
                    {"id": "al-2", "name": "Mezzanine", "year": 1998, "songCount": 11}
                ]
            }
        }));

        let response = GetArtistOperation::parse_response(&body).unwrap();
        assert_eq!(response.artist.name, "Massive Attack");
        assert_eq!(response.artist.roles, ["artist", "producer"]);
        assert_eq!(response.albums.len(), 2);
        assert_eq!(response.albums[1].name, "Mezzanine");
        assert_eq!(response.albums[1].song_count, Some(11));
    }

    #[test]
    fn test_get_artist_single_album_object() {
        let body = test_body(json!({"artist": {"id": "ar-8", "name": "Burial", "album": {"id": "al-9", "name": "Untrue"}}}));
        let response = GetArtistOperation::parse_response(&body).unwrap();
        assert_eq!(response.albums.len(), 1);
        assert_eq!(response.albums[0].name, "Untrue");
    }

    #[test]
    fn test_get_artist_missing_artist() {
        let body = test_body(json!({"status": "ok"}));
        assert_eq!(
            GetArtistOperation::parse_response(&body),
            Err(PayloadError::MissingField("artist".to_string()))
        );
    }
}

//! updatePlaylist operation

use crate::error::PayloadError;
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// updatePlaylist operation
pub struct UpdatePlaylistOperation;

/// Request for updatePlaylist operation
#[derive(Debug, Clone, Default)]
pub struct UpdatePlaylistRequest {
    pub playlist_id: String,
    pub name: Option<String>,
    pub comment: Option<String>,
    pub public: Option<bool>,
    /// Appended in order, sent as repeated `songIdToAdd` parameters
    pub song_ids_to_add: Vec<String>,
    /// Zero-based positions, sent as repeated `songIndexToRemove` parameters
    pub song_indexes_to_remove: Vec<u32>,
}

/// Response for updatePlaylist operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePlaylistResponse {
    pub envelope: Envelope,
}

impl SubsonicOperation for UpdatePlaylistOperation {
    type Request = UpdatePlaylistRequest;
    type Response = UpdatePlaylistResponse;

    const ENDPOINT: &'static str = "updatePlaylist.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("playlistId", &request.playlist_id)
            .with_opt("name", request.name.as_deref())
            .with_opt("comment", request.comment.as_deref())
            .with_opt("public", request.public)
            .with_all("songIdToAdd", &request.song_ids_to_add)
            .with_all("songIndexToRemove", &request.song_indexes_to_remove)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        Ok(UpdatePlaylistResponse {
            envelope: parse_envelope(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_playlist_params() {
        let request = UpdatePlaylistRequest {
            playlist_id: "p-7".to_string(),
            public: Some(false),
            song_ids_to_add: vec!["s-10".to_string(), "s-11".to_string()],
            song_indexes_to_remove: vec![4, 0],
            ..Default::default()
        };

        let params = UpdatePlaylistOperation::build_params(&request);
        assert_eq!(
            params.single(),
            [
                ("playlistId".to_string(), "p-7".to_string()),
                ("public".to_string(), "false".to_string()),
            ]
        );
        assert_eq!(
            params.multi(),
            [
                ("songIdToAdd".to_string(), vec!["s-10".to_string(), "s-11".to_string()]),
                ("songIndexToRemove".to_string(), vec!["4".to_string(), "0".to_string()]),
            ]
        );
    }

    #[test]
    fn test_update_playlist_only_rename() {
        let request = UpdatePlaylistRequest {
            playlist_id: "p-7".to_string(),
            name: Some("Renamed".to_string()),
            ..Default::default()
        };

        let params = UpdatePlaylistOperation::build_params(&request);
        assert_eq!(params.single().len(), 2);
        assert!(params.multi().is_empty());
    }
}

//! getAlbumList2 operation (ID3 organisation)

use std::fmt;

use crate::error::PayloadError;
use crate::model::Album;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// Ordering of an album list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlbumListType {
    Random,
    #[default]
    Newest,
    Frequent,
    Recent,
    Starred,
    AlphabeticalByName,
    AlphabeticalByArtist,
    /// Requires `from_year` and `to_year`
    ByYear,
    /// Requires `genre`
    ByGenre,
}

impl AlbumListType {
    /// Wire value of the `type` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumListType::Random => "random",
            AlbumListType::Newest => "newest",
            AlbumListType::Frequent => "frequent",
            AlbumListType::Recent => "recent",
            AlbumListType::Starred => "starred",
            AlbumListType::AlphabeticalByName => "alphabeticalByName",
            AlbumListType::AlphabeticalByArtist => "alphabeticalByArtist",
            AlbumListType::ByYear => "byYear",
            AlbumListType::ByGenre => "byGenre",
        }
    }
}

impl fmt::Display for AlbumListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// getAlbumList2 operation
pub struct GetAlbumListOperation;

/// Request for getAlbumList2 operation
#[derive(Debug, Clone, Default)]
pub struct GetAlbumListRequest {
    pub list_type: AlbumListType,
    /// Number of albums (server default 10, at most 500)
    pub size: Option<u32>,
    pub offset: Option<u32>,
    pub from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub genre: Option<String>,
    pub music_folder_id: Option<String>,
}

/// Response for getAlbumList2 operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAlbumListResponse {
    pub envelope: Envelope,
    pub albums: Vec<Album>,
}

impl SubsonicOperation for GetAlbumListOperation {
    type Request = GetAlbumListRequest;
    type Response = GetAlbumListResponse;

    const ENDPOINT: &'static str = "getAlbumList2.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new()
            .with("type", request.list_type)
            .with_opt("size", request.size)
            .with_opt("offset", request.offset)
            .with_opt("fromYear", request.from_year)
            .with_opt("toYear", request.to_year)
            .with_opt("genre", request.genre.as_deref())
            .with_opt("musicFolderId", request.music_folder_id.as_deref())
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let albums = match object_field(body, "albumList2") {
            Some(container) => parse_records(container, "album")?,
            None => Vec::new(),
        };

        Ok(GetAlbumListResponse {
            envelope: parse_envelope(body),
            albums,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use rstest::rstest;
    use serde_json::json;

    fn pairs(params: &RequestParams) -> Vec<(&str, &str)> {
        params.single().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[rstest]
    #[case(AlbumListType::Random, "random")]
    #[case(AlbumListType::Newest, "newest")]
    #[case(AlbumListType::Frequent, "frequent")]
    #[case(AlbumListType::Recent, "recent")]
    #[case(AlbumListType::Starred, "starred")]
    #[case(AlbumListType::AlphabeticalByName, "alphabeticalByName")]
    #[case(AlbumListType::AlphabeticalByArtist, "alphabeticalByArtist")]
    #[case(AlbumListType::ByYear, "byYear")]
    #[case(AlbumListType::ByGenre, "byGenre")]
    fn test_album_list_type_wire_values(#[case] list_type: AlbumListType, #[case] expected: &str) {
        assert_eq!(list_type.as_str(), expected);
        assert_eq!(list_type.to_string(), expected);
    }

    #[test]
    fn test_get_album_list_params_order() {
        let request = GetAlbumListRequest {
            list_type: AlbumListType::ByYear,
            size: Some(50),
            offset: Some(100),
            from_year: Some(1990),
            to_year: Some(1999),
            ..Default::default()
        };

        assert_eq!(
            pairs(&GetAlbumListOperation::build_params(&request)),
            [
                ("type", "byYear"),
                ("size", "50"),
                ("offset", "100"),
                ("fromYear", "1990"),
                ("toYear", "1999"),
            ]
        );
    }

    #[test]
    fn test_get_album_list_default_type_only() {
        let params = GetAlbumListOperation::build_params(&GetAlbumListRequest::default());
        assert_eq!(pairs(&params), [("type", "newest")]);
    }

    #[test]
    fn test_get_album_list_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "albumList2": {
                "album": [
                    {"id": "al-1", "name": "Loveless", "year": 1991},
                    {"id": "al-2", "name": "Souvlaki", "year": 1993}
                ]
            }
        }));

        let response = GetAlbumListOperation::parse_response(&body).unwrap();
        assert_eq!(
            response.albums.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            ["Loveless", "Souvlaki"]
        );

        let empty = test_body(json!({"status": "ok"}));
        assert!(GetAlbumListOperation::parse_response(&empty).unwrap().albums.is_empty());
    }
}

//! getAlbumInfo2 operation (ID3 organisation)

use serde::Deserialize;

use crate::error::PayloadError;
use crate::response::normalize::{lenient_opt_string, object_field, parse_record};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getAlbumInfo2 operation
pub struct GetAlbumInfoOperation;

/// Request for getAlbumInfo2 operation
#[derive(Debug, Clone, Default)]
pub struct GetAlbumInfoRequest {
    pub id: String,
}

/// Album notes and external links
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumInfo {
    #[serde(deserialize_with = "lenient_opt_string")]
    pub notes: Option<String>,
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
}

/// Response for getAlbumInfo2 operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetAlbumInfoResponse {
    pub envelope: Envelope,
    /// Empty when the server has no information for the album
    pub album_info: AlbumInfo,
}

impl SubsonicOperation for GetAlbumInfoOperation {
    type Request = GetAlbumInfoRequest;
    type Response = GetAlbumInfoResponse;

    const ENDPOINT: &'static str = "getAlbumInfo2.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        // Servers answer getAlbumInfo2 with an `albumInfo` element.
        let album_info = match object_field(body, "albumInfo") {
            Some(info) => parse_record(info)?,
            None => AlbumInfo::default(),
        };

        Ok(GetAlbumInfoResponse {
            envelope: parse_envelope(body),
            album_info,
        })
    }
}

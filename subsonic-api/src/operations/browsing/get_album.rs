//! getAlbum operation (ID3 organisation)

use crate::error::PayloadError;
use crate::model::{Album, Song};
use crate::response::normalize::{parse_record, parse_records, required_object};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getAlbum operation
pub struct GetAlbumOperation;

/// Request for getAlbum operation
#[derive(Debug, Clone, Default)]
pub struct GetAlbumRequest {
    pub id: String,
}

/// Response for getAlbum operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetAlbumResponse {
    pub envelope: Envelope,
    pub album: Album,
    /// Tracks in album order (`song` on the wire)
    pub songs: Vec<Song>,
}

impl SubsonicOperation for GetAlbumOperation {
    type Request = GetAlbumRequest;
    type Response = GetAlbumResponse;

    const ENDPOINT: &'static str = "getAlbum.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let album = required_object(body, "album")?;

        Ok(GetAlbumResponse {
            envelope: parse_envelope(body),
            album: parse_record(album)?,
            songs: parse_records(album, "song")?,
        })
    }
}

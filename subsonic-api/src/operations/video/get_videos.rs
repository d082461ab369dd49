//! getVideos operation

use crate::error::PayloadError;
use crate::model::Song;
use crate::response::normalize::{object_field, parse_records};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getVideos operation
pub struct GetVideosOperation;

/// Request for getVideos operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GetVideosRequest;

/// Response for getVideos operation
#[derive(Debug, Clone, PartialEq)]
pub struct GetVideosResponse {
    pub envelope: Envelope,
    /// Video files, as media records with `is_video` set
    pub videos: Vec<Song>,
}

impl SubsonicOperation for GetVideosOperation {
    type Request = GetVideosRequest;
    type Response = GetVideosResponse;

    const ENDPOINT: &'static str = "getVideos.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let videos = match object_field(body, "videos") {
            Some(container) => parse_records(container, "video")?,
            None => Vec::new(),
        };

        Ok(GetVideosResponse {
            envelope: parse_envelope(body),
            videos,
        })
    }
}

//! getVideoInfo operation

use serde::Deserialize;

use crate::error::PayloadError;
use crate::response::normalize::{
    lenient_opt_int, lenient_opt_string, lenient_string, one_or_many, parse_record, required_object,
};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getVideoInfo operation
pub struct GetVideoInfoOperation;

/// Request for getVideoInfo operation
#[derive(Debug, Clone, Default)]
pub struct GetVideoInfoRequest {
    pub id: String,
}

/// A subtitle track
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Caption {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
}

/// An alternative audio track
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AudioTrack {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_opt_string")]
    pub language_code: Option<String>,
}

/// A pre-transcoded rendition
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Conversion {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    /// Bit rate in kbps
    #[serde(deserialize_with = "lenient_opt_int")]
    pub bit_rate: Option<i64>,
}

/// Captions, audio tracks and conversions available for a video
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VideoInfo {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "one_or_many")]
    pub captions: Vec<Caption>,
    #[serde(rename = "audioTrack", deserialize_with = "one_or_many")]
    pub audio_tracks: Vec<AudioTrack>,
    #[serde(rename = "conversion", deserialize_with = "one_or_many")]
    pub conversions: Vec<Conversion>,
}

/// Response for getVideoInfo operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetVideoInfoResponse {
    pub envelope: Envelope,
    pub video_info: VideoInfo,
}

impl SubsonicOperation for GetVideoInfoOperation {
    type Request = GetVideoInfoRequest;
    type Response = GetVideoInfoResponse;

    const ENDPOINT: &'static str = "getVideoInfo.view";

    fn build_params(request: &Self::Request) -> RequestParams {
        RequestParams::new().with("id", &request.id)
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let video_info = parse_record(required_object(body, "videoInfo")?)?;

        Ok(GetVideoInfoResponse {
            envelope: parse_envelope(body),
            video_info,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_video_info_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "videoInfo": {
                "id": "v-1",
                "captions": {"id": "c-1", "name": "English"},
                "audioTrack": [
                    {"id": "a-1", "name": "Stereo", "languageCode": "isl"},
                    {"id": "a-2", "name": "Commentary"}
                ],
                "conversion": [{"id": "cv-1", "bitRate": 1000}, {"id": "cv-2", "bitRate": "2500"}]
            }
        }));

        let info = GetVideoInfoOperation::parse_response(&body).unwrap().video_info;
        assert_eq!(info.id, "v-1");
        assert_eq!(info.captions.len(), 1);
        assert_eq!(info.captions[0].name, "English");
        assert_eq!(info.audio_tracks[0].language_code.as_deref(), Some("isl"));
        assert_eq!(info.audio_tracks[1].language_code, None);
        assert_eq!(
            info.conversions.iter().map(|c| c.bit_rate).collect::<Vec<_>>(),
            [Some(1000), Some(2500)]
        );
    }

    #[test]
    fn test_get_video_info_missing_info() {
        let body = test_body(json!({"status": "ok"}));
        assert_eq!(
            GetVideoInfoOperation::parse_response(&body),
            Err(PayloadError::MissingField("videoInfo".to_string()))
        );
    }
}

//! Response envelope decoding
//!
//! [`ResponseDecoder::decode`] turns a raw body into an [`Outcome`], applying
//! the same policy to every endpoint:
//!
//! 1. blank body: failure
//! 2. body must be JSON with a `subsonic-response` object
//! 3. `status == "failed"`: the server's `error` object becomes the failure and
//!    the payload extractor is not called
//! 4. otherwise the extractor runs on the envelope body
//!
//! Every error along the way is converted into an [`ApiError`].

mod envelope;
pub mod normalize;

pub use envelope::{parse_envelope, Envelope, ENVELOPE_ROOT, FAILED_STATUS};
pub use normalize::JsonObject;

use serde_json::Value;

use crate::config::DEFAULT_ERROR_CODE;
use crate::error::{ApiError, ClientError, Outcome, PayloadError, UNKNOWN_API_ERROR_MESSAGE};
use normalize::{integral_field, object_field, string_field};

/// Decodes `subsonic-response` bodies into typed outcomes
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseDecoder;

impl ResponseDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decode `raw_body`, using `extractor` for the endpoint-specific payload
    pub fn decode<T, F>(&self, raw_body: &str, extractor: F) -> Outcome<T>
    where
        F: FnOnce(&JsonObject) -> Result<T, PayloadError>,
    {
        self.try_decode(raw_body, extractor).map_err(ApiError::from)
    }

    fn try_decode<T, F>(&self, raw_body: &str, extractor: F) -> Result<T, ClientError>
    where
        F: FnOnce(&JsonObject) -> Result<T, PayloadError>,
    {
        if raw_body.trim().is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        let mut root: JsonObject = serde_json::from_str(raw_body)?;
        let body = match root.remove(ENVELOPE_ROOT) {
            Some(Value::Object(body)) => body,
            Some(_) => return Err(ClientError::InvalidEnvelope),
            None => return Err(ClientError::MissingEnvelope),
        };

        if parse_envelope(&body).is_failed() {
            return Err(extract_api_error(&body));
        }

        Ok(extractor(&body)?)
    }
}

fn extract_api_error(body: &JsonObject) -> ClientError {
    let error = object_field(body, "error");
    let code = error
        .and_then(|e| integral_field(e, "code"))
        .and_then(|c| i32::try_from(c).ok())
        .unwrap_or(DEFAULT_ERROR_CODE);
    let message = error
        .and_then(|e| string_field(e, "message"))
        .unwrap_or_else(|| UNKNOWN_API_ERROR_MESSAGE.to_string());

    ClientError::Api { code, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use rstest::rstest;
    use std::cell::Cell;

    fn mock_field(body: &JsonObject) -> Result<String, PayloadError> {
        normalize::string_field(body, "mock").ok_or_else(|| PayloadError::MissingField("mock".to_string()))
    }

    #[test]
    fn test_decode_success_returns_payload() {
        let raw = r#"{"subsonic-response":{"status":"ok","version":"1.0","mock":"value"}}"#;
        let result = ResponseDecoder::new().decode(raw, mock_field);
        assert_eq!(result, Ok("value".to_string()));
    }

    #[test]
    fn test_decode_failed_status_returns_server_error() {
        let raw = r#"
            {
                "subsonic-response": {
                    "status": "failed",
                    "error": {"code": 40, "message": "Wrong password"}
                }
            }
        "#;
        let called = Cell::new(false);
        let result = ResponseDecoder::new().decode(raw, |_| {
            called.set(true);
            Ok(())
        });

        let error = result.unwrap_err();
        assert_eq!(error.code, 40);
        assert_eq!(error.message, "Wrong password");
        assert_eq!(error.kind, ErrorKind::Api);
        assert!(!called.get(), "extractor must not run for failed envelopes");
    }

    #[rstest]
    #[case(r#"{"subsonic-response":{"status":"failed"}}"#, 0, "Unknown API error")]
    #[case(r#"{"subsonic-response":{"status":"FAILED","error":{"message":"Access denied"}}}"#, 0, "Access denied")]
    #[case(r#"{"subsonic-response":{"status":"Failed","error":{"code":50}}}"#, 50, "Unknown API error")]
    #[case(r#"{"subsonic-response":{"status":"failed","error":{"code":"41","message":"Token auth"}}}"#, 41, "Token auth")]
    #[case(r#"{"subsonic-response":{"status":"failed","error":{"code":40.9,"message":"Bad"}}}"#, 0, "Bad")]
    #[case(r#"{"subsonic-response":{"status":"failed","error":{"code":1e12,"message":"Bad"}}}"#, 0, "Bad")]
    fn test_decode_failed_status_defaults(
        #[case] raw: &str,
        #[case] expected_code: i32,
        #[case] expected_message: &str,
    ) {
        let error = ResponseDecoder::new().decode(raw, |_| Ok(())).unwrap_err();
        assert_eq!(error.code, expected_code);
        assert_eq!(error.message, expected_message);
        assert_eq!(error.kind, ErrorKind::Api);
    }

    #[test]
    fn test_malformed_bodies_yield_distinct_failures() {
        let decoder = ResponseDecoder::new();
        let blank = decoder.decode("   \n", |_| Ok(())).unwrap_err();
        let not_json = decoder.decode("{{", |_| Ok(())).unwrap_err();
        let no_root = decoder.decode(r#"{"data":"value"}"#, |_| Ok(())).unwrap_err();

        assert_eq!(blank.message, "Empty response received");
        assert!(not_json.message.starts_with("JSON Parsing error"));
        assert!(no_root.message.contains("subsonic-response"));

        for error in [&blank, &not_json, &no_root] {
            assert_eq!(error.code, DEFAULT_ERROR_CODE);
            assert_eq!(error.kind, ErrorKind::MalformedResponse);
        }
        assert_ne!(blank.message, not_json.message);
        assert_ne!(not_json.message, no_root.message);
        assert_ne!(blank.message, no_root.message);
    }

    #[rstest]
    #[case(r#"["subsonic-response"]"#)]
    #[case(r#"{"subsonic-response":"ok"}"#)]
    fn test_non_object_roots_are_malformed(#[case] raw: &str) {
        let error = ResponseDecoder::new().decode(raw, |_| Ok(())).unwrap_err();
        assert_eq!(error.kind, ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_extractor_error_becomes_failure() {
        let raw = r#"{"subsonic-response":{"status":"ok","version":"1.16.1"}}"#;
        let error = ResponseDecoder::new().decode(raw, mock_field).unwrap_err();

        assert_eq!(error.code, DEFAULT_ERROR_CODE);
        assert_eq!(error.kind, ErrorKind::Extractor);
        assert!(error.message.contains("missing field 'mock'"));
    }

    #[test]
    fn test_missing_status_is_treated_as_ok() {
        let raw = r#"{"subsonic-response":{"mock":"value"}}"#;
        assert_eq!(ResponseDecoder::new().decode(raw, mock_field), Ok("value".to_string()));
    }
}

//! ping operation

use crate::error::PayloadError;
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// ping operation, used to test connectivity and credentials
pub struct PingOperation;

/// Request for ping operation
#[derive(Debug, Clone, Copy, Default)]
pub struct PingRequest;

/// Response for ping operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingResponse {
    pub envelope: Envelope,
}

impl SubsonicOperation for PingOperation {
    type Request = PingRequest;
    type Response = PingResponse;

    const ENDPOINT: &'static str = "ping.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        Ok(PingResponse {
            envelope: parse_envelope(body),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_ping_has_no_params() {
        assert!(PingOperation::build_params(&PingRequest).is_empty());
    }

    #[test]
    fn test_ping_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "version": "1.16.1",
            "type": "navidrome",
            "serverVersion": "0.53.3",
            "openSubsonic": true
        }));

        let response = PingOperation::parse_response(&body).unwrap();
        assert_eq!(response.envelope.api_version, "1.16.1");
        assert_eq!(response.envelope.server_type.as_deref(), Some("navidrome"));
        assert!(response.envelope.is_open_subsonic);
    }
}

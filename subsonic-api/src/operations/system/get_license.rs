//! getLicense operation

use crate::error::PayloadError;
use crate::model::License;
use crate::response::normalize::{object_field, parse_record};
use crate::response::{parse_envelope, Envelope, JsonObject};
use crate::url::RequestParams;
use crate::SubsonicOperation;

/// getLicense operation
pub struct GetLicenseOperation;

/// Request for getLicense operation
#[derive(Debug, Clone, Copy, Default)]
pub struct GetLicenseRequest;

/// Response for getLicense operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLicenseResponse {
    pub envelope: Envelope,
    /// Invalid (all defaults) when the server omits the `license` object
    pub license: License,
}

impl SubsonicOperation for GetLicenseOperation {
    type Request = GetLicenseRequest;
    type Response = GetLicenseResponse;

    const ENDPOINT: &'static str = "getLicense.view";

    fn build_params(_request: &Self::Request) -> RequestParams {
        RequestParams::new()
    }

    fn parse_response(body: &JsonObject) -> Result<Self::Response, PayloadError> {
        let license = match object_field(body, "license") {
            Some(license) => parse_record(license)?,
            None => License::default(),
        };

        Ok(GetLicenseResponse {
            envelope: parse_envelope(body),
            license,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::test_body;
    use serde_json::json;

    #[test]
    fn test_get_license_response_parsing() {
        let body = test_body(json!({
            "status": "ok",
            "version": "1.16.1",
            "license": {
                "valid": true,
                "email": "admin@example.com",
                "licenseExpires": "2030-01-01T00:00:00.000Z"
            }
        }));

        let response = GetLicenseOperation::parse_response(&body).unwrap();
        assert!(response.license.valid);
        assert_eq!(response.license.email.as_deref(), Some("admin@example.com"));
        assert_eq!(
            response.license.license_expires.as_deref(),
            Some("2030-01-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_get_license_missing_object_defaults_to_invalid() {
        let body = test_body(json!({"status": "ok"}));

        let response = GetLicenseOperation::parse_response(&body).unwrap();
        assert!(!response.license.valid);
        assert_eq!(response.license.email, None);
    }
}

use rest_client::RestError;
use thiserror::Error;

use crate::config::DEFAULT_ERROR_CODE;

/// Message used when a failed envelope carries no error message
pub const UNKNOWN_API_ERROR_MESSAGE: &str = "Unknown API error";

/// The uniform result of every public Subsonic operation
///
/// `Ok` carries the decoded payload, `Err` carries an [`ApiError`]. Nothing
/// else crosses the executor or decoder boundary.
pub type Outcome<T> = std::result::Result<T, ApiError>;

/// Which stage of the request pipeline produced an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Credentials were never set on the client
    Configuration,
    /// DNS, connection, timeout or HTTP status failure
    Transport,
    /// Blank body, missing envelope root or JSON syntax error
    MalformedResponse,
    /// The server answered with `status: "failed"`
    Api,
    /// The endpoint-specific payload could not be extracted
    Extractor,
}

/// Error returned to callers of every Subsonic operation
///
/// For protocol-level failures `code` and `message` come from the server's
/// `error` object (for example 40, "Wrong password"). Every other failure uses
/// the sentinel code [`DEFAULT_ERROR_CODE`] and a descriptive message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (code {code})")]
pub struct ApiError {
    /// Subsonic error code, or `0` when none applies
    pub code: i32,
    /// Human-readable description
    pub message: String,
    /// Pipeline stage that failed
    pub kind: ErrorKind,
}

impl ApiError {
    /// Create an error reported by the server itself
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            kind: ErrorKind::Api,
        }
    }

    /// Whether the server rejected the supplied credentials (codes 40 and 41)
    pub fn is_authentication_failure(&self) -> bool {
        self.kind == ErrorKind::Api && matches!(self.code, 40 | 41)
    }
}

/// Errors raised while extracting an endpoint payload from the envelope body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// A field the payload cannot be built without is absent
    #[error("missing field '{0}'")]
    MissingField(String),

    /// A field is present but holds the wrong JSON type
    #[error("field '{field}' has an invalid type, expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// A record could not be deserialized into its model
    #[error("invalid record: {0}")]
    Record(String),
}

impl From<serde_json::Error> for PayloadError {
    fn from(error: serde_json::Error) -> Self {
        PayloadError::Record(error.to_string())
    }
}

/// Internal error taxonomy for the request pipeline
///
/// Every variant is converted into an [`ApiError`] before it reaches a caller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Credentials not set. Call set_credentials() first.")]
    CredentialsNotSet,

    #[error(transparent)]
    Transport(#[from] RestError),

    #[error("Empty response received")]
    EmptyResponse,

    #[error("Invalid JSON: Missing 'subsonic-response' root")]
    MissingEnvelope,

    #[error("Invalid JSON: 'subsonic-response' is not an object")]
    InvalidEnvelope,

    #[error("JSON Parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Api { code: i32, message: String },

    #[error("Payload extraction error: {0}")]
    Payload(#[from] PayloadError),
}

impl ClientError {
    /// The pipeline stage this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClientError::CredentialsNotSet => ErrorKind::Configuration,
            ClientError::Transport(_) => ErrorKind::Transport,
            ClientError::EmptyResponse
            | ClientError::MissingEnvelope
            | ClientError::InvalidEnvelope
            | ClientError::Json(_) => ErrorKind::MalformedResponse,
            ClientError::Api { .. } => ErrorKind::Api,
            ClientError::Payload(_) => ErrorKind::Extractor,
        }
    }
}

/// Convert from ClientError to ApiError
impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Api { code, message } => ApiError::api(code, message),
            other => ApiError {
                code: DEFAULT_ERROR_CODE,
                kind: other.kind(),
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_server_code() {
        let error: ApiError = ClientError::Api {
            code: 40,
            message: "Wrong username or password".to_string(),
        }
        .into();

        assert_eq!(error.code, 40);
        assert_eq!(error.message, "Wrong username or password");
        assert_eq!(error.kind, ErrorKind::Api);
        assert!(error.is_authentication_failure());
    }

    #[test]
    fn test_non_api_errors_use_sentinel_code() {
        let cases = [
            (ClientError::CredentialsNotSet, ErrorKind::Configuration),
            (
                ClientError::Transport(RestError::Network("connection refused".to_string())),
                ErrorKind::Transport,
            ),
            (ClientError::EmptyResponse, ErrorKind::MalformedResponse),
            (ClientError::MissingEnvelope, ErrorKind::MalformedResponse),
            (
                ClientError::Payload(PayloadError::MissingField("playlist".to_string())),
                ErrorKind::Extractor,
            ),
        ];

        for (client_error, expected_kind) in cases {
            let api_error: ApiError = client_error.into();
            assert_eq!(api_error.code, DEFAULT_ERROR_CODE);
            assert_eq!(api_error.kind, expected_kind);
            assert!(!api_error.is_authentication_failure());
        }
    }

    #[test]
    fn test_error_display() {
        let config_err: ApiError = ClientError::CredentialsNotSet.into();
        assert_eq!(
            config_err.message,
            "Credentials not set. Call set_credentials() first."
        );

        let transport_err: ApiError =
            ClientError::Transport(RestError::Network("timed out".to_string())).into();
        assert_eq!(transport_err.message, "Network/HTTP error: timed out");

        let api_err = ApiError::api(70, "Requested data was not found");
        assert_eq!(format!("{}", api_err), "Requested data was not found (code 70)");

        let payload_err = PayloadError::InvalidType {
            field: "song[1]".to_string(),
            expected: "object",
        };
        assert_eq!(
            format!("{}", payload_err),
            "field 'song[1]' has an invalid type, expected object"
        );
    }
}

//! Error types for the REST client

use thiserror::Error;

/// Errors that can occur while performing a REST request
#[derive(Debug, Error)]
pub enum RestError {
    /// Network or connection-level failure (DNS, refused connection, timeout, TLS)
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// The server answered with a non-success HTTP status
    #[error("HTTP error: status code {0}")]
    Status(u16),

    /// The response body could not be read as UTF-8 text or exceeded the size limit
    #[error("Failed to read response body: {0}")]
    Body(String),
}

impl From<ureq::Error> for RestError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(code, _) => RestError::Status(code),
            ureq::Error::Transport(transport) => RestError::Network(transport.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let network = RestError::Network("connection refused".to_string());
        assert_eq!(format!("{}", network), "Network/HTTP error: connection refused");

        let status = RestError::Status(503);
        assert_eq!(format!("{}", status), "HTTP error: status code 503");

        let body = RestError::Body("stream did not contain valid UTF-8".to_string());
        assert!(format!("{}", body).starts_with("Failed to read response body"));
    }
}

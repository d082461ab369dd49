//! Private REST client for Subsonic server communication
//!
//! This crate provides a minimal blocking HTTP client for issuing the signed
//! GET requests used by the Subsonic REST protocol. It knows nothing about
//! authentication or the response envelope; it moves bytes and reports
//! transport failures.

mod error;

pub use error::RestError;

use std::io::Read;
use std::time::Duration;

/// Default time allowed to establish a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default time allowed to read a response
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Largest response body accepted, in bytes
///
/// ureq's own `into_string` stops at 10 MB, which large `getStarred2` or
/// `getPlaylist` payloads can exceed. Bodies above this limit are reported as
/// [`RestError::Body`].
pub const MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

/// Raw response returned by a successful GET
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestResponse {
    /// HTTP status code (always 2xx; redirects are followed and other statuses are errors)
    pub status: u16,
    /// Response body decoded as UTF-8 text
    pub body: String,
}

/// A minimal blocking HTTP client for REST requests
#[derive(Debug, Clone)]
pub struct RestClient {
    agent: ureq::Agent,
}

impl RestClient {
    /// Create a new REST client with default timeouts
    pub fn new() -> Self {
        Self::with_timeouts(DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT)
    }

    /// Create a new REST client with explicit connect and read timeouts
    pub fn with_timeouts(connect_timeout: Duration, read_timeout: Duration) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(connect_timeout)
                .timeout_read(read_timeout)
                .build(),
        }
    }

    /// Send a GET request and return the response body
    ///
    /// The URL is used as-is; callers are responsible for encoding query
    /// parameters. Non-2xx statuses are reported as [`RestError::Status`].
    ///
    /// # Arguments
    /// * `url` - Fully qualified request URL
    pub fn get(&self, url: &str) -> Result<RestResponse, RestError> {
        let response = self
            .agent
            .get(url)
            .set("Accept", "application/json")
            .call()?;

        let status = response.status();
        let mut body = String::new();
        response
            .into_reader()
            .take(MAX_BODY_BYTES + 1)
            .read_to_string(&mut body)
            .map_err(|e| RestError::Body(e.to_string()))?;

        if body.len() as u64 > MAX_BODY_BYTES {
            return Err(RestError::Body(format!(
                "response larger than {MAX_BODY_BYTES} bytes"
            )));
        }

        // The URL carries credentials, so only the status and size are traced.
        tracing::trace!(status, bytes = body.len(), "GET completed");

        Ok(RestResponse { status, body })
    }
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new()
    }
}

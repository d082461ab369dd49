//! Client configuration and protocol defaults
//!
//! The configuration is programmatic only; nothing here is read from files or
//! the environment.

use std::time::Duration;

/// Client identifier sent as the `c` parameter
pub const DEFAULT_CLIENT_NAME: &str = "subsonic-sdk";

/// REST API version sent as the `v` parameter
pub const DEFAULT_API_VERSION: &str = "1.16.1";

/// Error code used when no more specific Subsonic code applies
pub const DEFAULT_ERROR_CODE: i32 = 0;

/// Envelope status assumed when the server omits one
pub const DEFAULT_RESPONSE_STATUS: &str = "ok";

/// Envelope version assumed when the server omits one
pub const DEFAULT_VERSION_FALLBACK: &str = "Unknown";

/// Configuration for a [`SubsonicClient`](crate::SubsonicClient)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root URL of the server, with or without a trailing slash
    pub base_url: String,

    /// Client identifier passed as `c`
    /// Default: "subsonic-sdk"
    pub client_name: String,

    /// Protocol version passed as `v`
    /// Default: "1.16.1"
    pub api_version: String,

    /// Connect timeout for the HTTP transport
    /// Default: 5 seconds
    pub connect_timeout: Duration,

    /// Read timeout for the HTTP transport
    /// Default: 10 seconds
    pub read_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for `base_url` with all other values defaulted
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client_name: DEFAULT_CLIENT_NAME.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            connect_timeout: rest_client::DEFAULT_CONNECT_TIMEOUT,
            read_timeout: rest_client::DEFAULT_READ_TIMEOUT,
        }
    }

    /// Set the client identifier
    pub fn with_client_name(mut self, client_name: impl Into<String>) -> Self {
        self.client_name = client_name.into();
        self
    }

    /// Set the protocol version announced to the server
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Set the transport connect and read timeouts
    pub fn with_timeouts(mut self, connect_timeout: Duration, read_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.read_timeout = read_timeout;
        self
    }
}

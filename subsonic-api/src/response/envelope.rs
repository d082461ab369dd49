//! Common metadata carried by every `subsonic-response` envelope

use crate::config::{DEFAULT_RESPONSE_STATUS, DEFAULT_VERSION_FALLBACK};
use crate::response::normalize::{bool_field, string_field, JsonObject};

/// Key of the object that wraps every response body
pub const ENVELOPE_ROOT: &str = "subsonic-response";

/// Status value signalling a protocol-level failure (compared case-insensitively)
pub const FAILED_STATUS: &str = "failed";

/// Envelope metadata, independent of the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// `status`, "ok" when absent
    pub status: String,
    /// `version`, "Unknown" when absent
    pub api_version: String,
    /// `type`, the server implementation (e.g. "navidrome")
    pub server_type: Option<String>,
    /// `serverVersion`
    pub server_version: Option<String>,
    /// `openSubsonic`
    pub is_open_subsonic: bool,
}

impl Envelope {
    pub fn is_failed(&self) -> bool {
        self.status.eq_ignore_ascii_case(FAILED_STATUS)
    }
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            status: DEFAULT_RESPONSE_STATUS.to_string(),
            api_version: DEFAULT_VERSION_FALLBACK.to_string(),
            server_type: None,
            server_version: None,
            is_open_subsonic: false,
        }
    }
}

/// Read the envelope metadata from a `subsonic-response` body
pub fn parse_envelope(body: &JsonObject) -> Envelope {
    Envelope {
        status: string_field(body, "status").unwrap_or_else(|| DEFAULT_RESPONSE_STATUS.to_string()),
        api_version: string_field(body, "version").unwrap_or_else(|| DEFAULT_VERSION_FALLBACK.to_string()),
        server_type: string_field(body, "type"),
        server_version: string_field(body, "serverVersion"),
        is_open_subsonic: bool_field(body, "openSubsonic").unwrap_or(false),
    }
}

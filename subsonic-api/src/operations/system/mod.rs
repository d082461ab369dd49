//! System operations
//!
//! Connectivity and license checks.

mod get_license;
mod ping;

pub use get_license::{GetLicenseOperation, GetLicenseRequest, GetLicenseResponse};
pub use ping::{PingOperation, PingRequest, PingResponse};

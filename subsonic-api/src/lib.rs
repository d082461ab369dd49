//! Type-safe client for Subsonic-compatible music servers
//!
//! This crate signs requests with a fresh salted token, builds endpoint URLs,
//! and decodes the `subsonic-response` envelope into typed payloads. It uses
//! the private `rest-client` crate for the underlying HTTP GET.
//!
//! Every operation returns an [`Outcome`]: either the payload or an
//! [`ApiError`] whose [`ErrorKind`] names the failing stage (missing
//! credentials, transport, malformed body, server-reported failure, or payload
//! extraction). No call panics on bad input from the server.
//!
//! ```rust,no_run
//! use subsonic_api::SubsonicClient;
//! use subsonic_api::operations::playlists::CreatePlaylistRequest;
//!
//! let client = SubsonicClient::new("https://music.example.com");
//! client.set_credentials("alice", "sesame");
//!
//! let created = client.create_playlist(&CreatePlaylistRequest {
//!     name: Some("Focus".to_string()),
//!     song_ids: vec!["s-1".to_string(), "s-2".to_string()],
//!     ..Default::default()
//! });
//!
//! if let Err(e) = created {
//!     eprintln!("createPlaylist failed ({:?}): {}", e.kind, e);
//! }
//! ```

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod logging;
pub mod model;
pub mod operation;
pub mod operations;
pub mod response;
pub mod transport;
pub mod url;

pub use auth::{AuthParams, Authenticator, Credentials};
pub use client::SubsonicClient;
pub use config::ClientConfig;
pub use error::{ApiError, ClientError, ErrorKind, Outcome, PayloadError};
pub use executor::RequestExecutor;
pub use operation::SubsonicOperation;
pub use response::{parse_envelope, Envelope, JsonObject, ResponseDecoder};
pub use transport::Transport;
pub use url::{RequestParams, UrlBuilder};

pub use rest_client::{RestClient, RestError, RestResponse};

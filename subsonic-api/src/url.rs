//! Signed request URL construction

use std::sync::Arc;

use parking_lot::RwLock;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::auth::{Authenticator, Credentials};
use crate::error::ClientError;

/// Everything except RFC 3986 unreserved characters is escaped.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered query parameters for a single request
///
/// Single-value pairs are emitted in insertion order, followed by the
/// multi-value lists, each exploded into one `key=value` pair per element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    single: Vec<(String, String)>,
    multi: Vec<(String, Vec<String>)>,
}

impl RequestParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single-value parameter
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.single.push((key.into(), value.to_string()));
        self
    }

    /// Add a single-value parameter only when a value is present
    pub fn with_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Add a repeated-key parameter; an empty list adds nothing
    pub fn with_all<I, V>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let values: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
        if !values.is_empty() {
            self.multi.push((key.into(), values));
        }
        self
    }

    pub fn single(&self) -> &[(String, String)] {
        &self.single
    }

    pub fn multi(&self) -> &[(String, Vec<String>)] {
        &self.multi
    }

    pub fn is_empty(&self) -> bool {
        self.single.is_empty() && self.multi.is_empty()
    }
}

/// Builds fully qualified, signed Subsonic REST URLs
///
/// The authenticator slot is owned by the builder and may be swapped at any
/// time with [`UrlBuilder::set_credentials`]. A request in flight during a
/// swap may be signed with either the old or the new credentials.
#[derive(Debug)]
pub struct UrlBuilder {
    base_url: String,
    client_name: String,
    api_version: String,
    authenticator: RwLock<Option<Arc<Authenticator>>>,
}

impl UrlBuilder {
    /// Create a builder for `base_url`
    ///
    /// The base URL is normalized so exactly one `/` precedes `rest/`.
    pub fn new(
        base_url: &str,
        client_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            base_url: format!("{}/", base_url.trim_end_matches('/')),
            client_name: client_name.into(),
            api_version: api_version.into(),
            authenticator: RwLock::new(None),
        }
    }

    /// Normalized base URL, always ending in a single `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the credentials used to sign subsequent requests
    pub fn set_credentials(&self, username: &str, password: &str) {
        let authenticator = Authenticator::new(
            Credentials::new(username, password),
            self.client_name.clone(),
            self.api_version.clone(),
        );
        *self.authenticator.write() = Some(Arc::new(authenticator));
        tracing::debug!("credentials updated");
    }

    pub fn has_credentials(&self) -> bool {
        self.authenticator.read().is_some()
    }

    /// Construct the signed URL for `endpoint`
    ///
    /// Layout: `<base>rest/<endpoint>?f=json`, then `params` in order, then the
    /// authentication parameters `u`, `s`, `t`, `v`, `c`.
    ///
    /// # Errors
    /// [`ClientError::CredentialsNotSet`] if credentials were never set.
    pub fn build_url(&self, endpoint: &str, params: &RequestParams) -> Result<String, ClientError> {
        // Snapshot the authenticator so the lock is not held while hashing.
        let authenticator = self
            .authenticator
            .read()
            .clone()
            .ok_or(ClientError::CredentialsNotSet)?;
        let auth_params = authenticator.generate_auth_params();

        let mut url = String::with_capacity(self.base_url.len() + endpoint.len() + 128);
        url.push_str(&self.base_url);
        url.push_str("rest/");
        url.push_str(endpoint);
        url.push_str("?f=json");

        for (key, value) in params.single() {
            append_pair(&mut url, key, value);
        }

        for (key, values) in params.multi() {
            for value in values {
                append_pair(&mut url, key, value);
            }
        }

        for (key, value) in auth_params.pairs() {
            append_pair(&mut url, key, value);
        }

        Ok(url)
    }
}

fn append_pair(url: &mut String, key: &str, value: &str) {
    url.push('&');
    url.extend(utf8_percent_encode(key, QUERY_ENCODE_SET));
    url.push('=');
    url.extend(utf8_percent_encode(value, QUERY_ENCODE_SET));
}

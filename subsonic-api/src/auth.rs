//! Token-and-salt authentication
//!
//! Every request carries `t = md5(password + s)` with a fresh random salt `s`,
//! so the clear-text password never leaves the process and a captured URL
//! cannot be replayed with a new salt.
//!
//! The salt is 4 random bytes (8 hex characters). That is the size the wire
//! protocol expects; it is not meant as a cryptographic strength guarantee.

use std::fmt;

use md5::{Digest, Md5};
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes in a salt
const SALT_BYTE_SIZE: usize = 4;

/// Username and clear-text password, held in memory only
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One-time authentication parameters for a single request
///
/// Never reuse an instance for a second request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    /// `u`
    pub username: String,
    /// `s`, 8 lowercase hex characters
    pub salt: String,
    /// `t`, 32 lowercase hex characters
    pub token: String,
    /// `v`
    pub api_version: String,
    /// `c`
    pub client_name: String,
}

impl AuthParams {
    /// Query pairs in wire order: `u`, `s`, `t`, `v`, `c`
    pub fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("u", self.username.as_str()),
            ("s", self.salt.as_str()),
            ("t", self.token.as_str()),
            ("v", self.api_version.as_str()),
            ("c", self.client_name.as_str()),
        ]
    }
}

/// Generates salted authentication parameters from stored credentials
#[derive(Debug, Clone)]
pub struct Authenticator {
    credentials: Credentials,
    client_name: String,
    api_version: String,
}

impl Authenticator {
    pub fn new(
        credentials: Credentials,
        client_name: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Self {
        Self {
            credentials,
            client_name: client_name.into(),
            api_version: api_version.into(),
        }
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }

    /// Generate a fresh set of authentication parameters
    ///
    /// Call once per request. Each call draws a new salt from the operating
    /// system's CSPRNG.
    pub fn generate_auth_params(&self) -> AuthParams {
        let salt = generate_salt();
        let token = compute_token(&self.credentials.password, &salt);

        AuthParams {
            username: self.credentials.username.clone(),
            salt,
            token,
            api_version: self.api_version.clone(),
            client_name: self.client_name.clone(),
        }
    }
}

fn generate_salt() -> String {
    let mut bytes = [0u8; SALT_BYTE_SIZE];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Lowercase hex MD5 of `password` followed by `salt`
pub fn compute_token(password: &str, salt: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn authenticator() -> Authenticator {
        Authenticator::new(Credentials::new("admin", "sesame"), "test-client", "1.16.1")
    }

    fn is_lower_hex(value: &str) -> bool {
        value.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f'))
    }

    // Reference vectors from the Subsonic API documentation and RFC 1321.
    #[rstest]
    #[case("sesame", "c19b2d", "26719a1196d2a940705a59634eb18eab")]
    #[case("", "", "d41d8cd98f00b204e9800998ecf8427e")]
    #[case("a", "bc", "900150983cd24fb0d6963f7d28e17f72")]
    fn test_compute_token_known_vectors(
        #[case] password: &str,
        #[case] salt: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(compute_token(password, salt), expected);
    }

    #[test]
    fn test_auth_params_shape() {
        let params = authenticator().generate_auth_params();

        assert_eq!(params.username, "admin");
        assert_eq!(params.client_name, "test-client");
        assert_eq!(params.api_version, "1.16.1");
        assert_eq!(params.salt.len(), 8);
        assert_eq!(params.token.len(), 32);
        assert!(is_lower_hex(&params.salt));
        assert!(is_lower_hex(&params.token));
        assert_eq!(params.token, compute_token("sesame", &params.salt));
    }

    #[test]
    fn test_consecutive_calls_use_fresh_salts() {
        let auth = authenticator();
        let first = auth.generate_auth_params();
        let second = auth.generate_auth_params();

        assert_ne!(first.salt, second.salt);
        assert_ne!(first.token, second.token);
    }

    #[test]
    fn test_pairs_are_in_wire_order() {
        let params = authenticator().generate_auth_params();
        let keys: Vec<&str> = params.pairs().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["u", "s", "t", "v", "c"]);
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", authenticator());
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("sesame"));
    }
}

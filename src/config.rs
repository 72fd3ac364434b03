//! Configuration loading for freshview.
//!
//! Values come from the process environment. Loading never fails: an unset
//! variable yields an empty field, and the caller decides whether the result
//! is usable with [`Config::ensure_complete`].

use std::env;
use std::fmt;

use crate::error::FreshviewError;

/// Environment variable holding the Freshdesk API key.
pub const API_KEY_VAR: &str = "FRESHCHAT_API_KEY";

/// Environment variable holding the Freshdesk account domain.
pub const DOMAIN_VAR: &str = "FRESHCHAT_DOMAIN";

/// Credential and account domain for one Freshdesk account.
///
/// The API key is never shown by the `Debug` implementation.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key, sent as the Basic auth username.
    pub api_key: String,

    /// Account host name (e.g., `acme.freshdesk.com`).
    pub domain: String,
}

impl Config {
    /// Builds a configuration from raw values, trimming both and stripping any
    /// scheme or trailing slash from the domain.
    pub fn new(api_key: impl Into<String>, domain: impl Into<String>) -> Self {
        let api_key = api_key.into().trim().to_string();
        let domain = Self::normalize_domain(&domain.into());
        Config { api_key, domain }
    }

    /// Reads `FRESHCHAT_API_KEY` and `FRESHCHAT_DOMAIN`.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Self {
        let api_key = env::var(API_KEY_VAR).unwrap_or_default();
        let domain = env::var(DOMAIN_VAR).unwrap_or_default();
        Self::new(api_key, domain)
    }

    /// Fails with `FreshviewError::MissingConfig` if either value is empty.
    pub fn ensure_complete(&self) -> Result<(), FreshviewError> {
        if self.api_key.is_empty() || self.domain.is_empty() {
            return Err(FreshviewError::MissingConfig);
        }
        Ok(())
    }

    fn normalize_domain(domain: &str) -> String {
        let domain = strip_scheme(domain.trim());
        domain.trim_end_matches('/').to_string()
    }
}

/// Removes a leading `https://` or `http://`, ignoring ASCII case.
fn strip_scheme(domain: &str) -> &str {
    for scheme in ["https://", "http://"] {
        let prefix = domain.as_bytes().get(..scheme.len());
        if prefix.is_some_and(|p| p.eq_ignore_ascii_case(scheme.as_bytes())) {
            return &domain[scheme.len()..];
        }
    }
    domain
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"[REDACTED]")
            .field("domain", &self.domain)
            .finish()
    }
}

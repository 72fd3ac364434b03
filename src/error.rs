//! Error types for freshview.
//!
//! This module defines `FreshviewError`, the single error type shared by the
//! configuration loader and the Freshdesk client.
//!
//! # Security
//!
//! Error messages may carry response bodies from the helpdesk. Use
//! `sanitized_display()` before printing an error so the API key never
//! reaches the console.

use std::time::Duration;
use thiserror::Error;

/// Unified error type for all freshview operations.
#[derive(Error, Debug)]
pub enum FreshviewError {
    /// The API key or the domain is missing from the environment.
    #[error("Missing API key or domain in environment variables")]
    MissingConfig,

    /// A configuration value is present but unusable.
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// Request timed out.
    #[error("request timed out after {duration:?} - the helpdesk may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
    },

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// Authentication failed - likely an invalid API key.
    #[error("authentication failed ({status}) - check FRESHCHAT_API_KEY")]
    Authentication {
        /// Either 401 or 403.
        status: reqwest::StatusCode,
    },

    /// The response body was not a JSON array of tickets.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FreshviewError {
    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshviewError::InvalidConfig(message.into())
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration) -> Self {
        FreshviewError::Timeout { duration }
    }

    /// Replaces every occurrence of the API key in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.is_empty() {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Display text of this error with the API key redacted.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_message() {
        let err = FreshviewError::MissingConfig;
        assert_eq!(
            err.to_string(),
            "Missing API key or domain in environment variables"
        );
    }

    #[test]
    fn test_invalid_config_error() {
        let err = FreshviewError::invalid_config("bad domain");
        assert_eq!(err.to_string(), "configuration error: bad domain");
    }

    #[test]
    fn test_timeout_error() {
        let err = FreshviewError::timeout(Duration::from_secs(30));
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
    }

    #[test]
    fn test_http_status_error() {
        let err = FreshviewError::HttpStatus {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "no such page".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404 Not Found: no such page");
    }

    #[test]
    fn test_authentication_error() {
        let err = FreshviewError::Authentication {
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert!(err.to_string().contains("FRESHCHAT_API_KEY"));
    }

    #[test]
    fn test_decode_error_from_serde() {
        let source = serde_json::from_str::<Vec<u32>>("{}").unwrap_err();
        let err: FreshviewError = source.into();
        assert!(err.to_string().starts_with("unexpected response body"));
    }

    #[test]
    fn test_sanitize_message_removes_api_key() {
        let api_key = "super_secret_key_12345";
        let message = format!("Error connecting with key {} to server", api_key);
        let sanitized = FreshviewError::sanitize_message(&message, api_key);
        assert!(!sanitized.contains(api_key));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_key() {
        let message = "Some error message";
        let sanitized = FreshviewError::sanitize_message(message, "");
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_sanitized_display() {
        let err = FreshviewError::HttpStatus {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: "invalid key abc123".to_string(),
        };
        let msg = err.sanitized_display("abc123");
        assert!(msg.contains("[REDACTED]"));
        assert!(!msg.contains("abc123"));
    }
}

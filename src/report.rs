//! The single pass from configuration to fetched tickets.
//!
//! The binary calls [`fetch_for_config`] and prints the result; keeping the
//! pass here lets it run against any client, including a mock server.

use crate::config::Config;
use crate::error::FreshviewError;
use crate::freshdesk_client::{fetch_recent_tickets, FetchOutcome, FreshdeskClient};

/// Checks `config`, builds a client with `connect`, and fetches up to `limit`
/// tickets.
///
/// An incomplete configuration fails with `FreshviewError::MissingConfig`
/// before `connect` is called, so no request is ever sent. Fetch failures are
/// not errors here; they come back as `FetchOutcome::NoData`.
pub async fn fetch_for_config<F>(
    config: &Config,
    limit: u32,
    connect: F,
) -> Result<FetchOutcome, FreshviewError>
where
    F: FnOnce(&Config) -> Result<FreshdeskClient, FreshviewError>,
{
    config.ensure_complete()?;

    tracing::debug!(domain = %config.domain, limit, "Configuration loaded");

    let client = connect(config)?;
    Ok(fetch_recent_tickets(&client, limit).await)
}

/// The console line printed when the run aborts with `error`.
pub fn error_line(error: &anyhow::Error) -> String {
    format!("Error: {:#}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_line_for_missing_config() {
        let error = anyhow::Error::from(FreshviewError::MissingConfig);
        assert_eq!(
            error_line(&error),
            "Error: Missing API key or domain in environment variables"
        );
    }

    #[test]
    fn test_error_line_includes_context() {
        let error = anyhow::Error::from(FreshviewError::invalid_config("bad host"))
            .context("Failed to create Freshdesk client");
        assert_eq!(
            error_line(&error),
            "Error: Failed to create Freshdesk client: configuration error: bad host"
        );
    }

    #[tokio::test]
    async fn test_incomplete_config_never_connects() {
        let config = Config::new("", "acme.freshdesk.com");
        let mut connected = false;

        let result = fetch_for_config(&config, 10, |config| {
            connected = true;
            FreshdeskClient::new(config)
        })
        .await;

        assert!(matches!(result, Err(FreshviewError::MissingConfig)));
        assert!(!connected);
    }

    #[tokio::test]
    async fn test_connect_error_is_returned() {
        let config = Config::new("key", "acme.freshdesk.com/admin");
        let result = fetch_for_config(&config, 10, FreshdeskClient::new).await;
        assert!(matches!(result, Err(FreshviewError::InvalidConfig(_))));
    }
}

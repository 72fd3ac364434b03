//! HTTP client for the Freshdesk v2 API.
//!
//! This module provides `FreshdeskClient` for authenticated requests against
//! `https://{domain}/api/v2`, and [`fetch_recent_tickets`], which turns any
//! failure into a [`FetchOutcome::NoData`] instead of an error.
//!
//! There is no retry logic: a failed request is reported once and the run
//! ends.
//!
//! # Security
//!
//! The API key is never logged. All error messages are sanitized before they
//! are logged or returned in a `FetchOutcome`.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use url::Url;

use crate::config::Config;
use crate::error::FreshviewError;
use crate::models::Ticket;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Freshdesk accepts any password when the API key is the username.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Maximum length for HTTP error response bodies kept in error messages.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Number of tickets requested when no limit is given.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size Freshdesk accepts for `per_page`.
pub const MAX_PER_PAGE: u32 = 100;

/// HTTP client for the Freshdesk API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env();
/// config.ensure_complete()?;
/// let client = FreshdeskClient::new(&config)?;
///
/// let tickets = client.list_tickets(&ListParams::new()).await?;
/// ```
#[derive(Clone)]
pub struct FreshdeskClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// API root, e.g. `https://acme.freshdesk.com/api/v2`.
    base_url: Url,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,

    /// Timeout applied to every request, kept for error reporting.
    timeout: Duration,
}

impl FreshdeskClient {
    /// Creates a client for `https://{config.domain}/api/v2`.
    ///
    /// # Errors
    ///
    /// Returns `FreshviewError::InvalidConfig` if the domain does not form a
    /// valid URL, or `FreshviewError::HttpClient` if the HTTP client fails to
    /// initialize.
    pub fn new(config: &Config) -> Result<Self, FreshviewError> {
        let base_url = Self::api_base_url(&config.domain)?;
        Self::build(config, base_url)
    }

    /// Creates a client against an arbitrary API root instead of the one
    /// derived from the configured domain.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self, FreshviewError> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| FreshviewError::invalid_config(format!("invalid base URL: {}", e)))?;
        Self::build(config, base_url)
    }

    fn build(config: &Config, base_url: Url) -> Result<Self, FreshviewError> {
        let timeout = Duration::from_secs(DEFAULT_TIMEOUT_SECS);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FreshviewError::HttpClient)?;

        Ok(Self {
            http,
            base_url,
            api_key: config.api_key.clone(),
            timeout,
        })
    }

    /// Builds the API root from a bare account domain.
    fn api_base_url(domain: &str) -> Result<Url, FreshviewError> {
        let url = Url::parse(&format!("https://{}/api/v2", domain)).map_err(|e| {
            FreshviewError::invalid_config(format!("FRESHCHAT_DOMAIN is not a valid host: {}", e))
        })?;

        if url.path() != "/api/v2" || url.query().is_some() || url.fragment().is_some() {
            return Err(FreshviewError::invalid_config(
                "FRESHCHAT_DOMAIN must be a host name such as acme.freshdesk.com",
            ));
        }

        Ok(url)
    }

    /// Returns the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub(crate) fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    /// Full URL of the ticket listing endpoint.
    pub fn tickets_url(&self) -> String {
        format!("{}/tickets", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Lists tickets, one page only.
    ///
    /// # Errors
    ///
    /// - `FreshviewError::Timeout` if no response arrives in time
    /// - `FreshviewError::Http` on any other transport failure
    /// - `FreshviewError::Authentication` on 401/403
    /// - `FreshviewError::HttpStatus` on any other non-2xx status
    /// - `FreshviewError::Decode` if the body is not a JSON array of tickets
    pub async fn list_tickets(&self, params: &ListParams) -> Result<Vec<Ticket>, FreshviewError> {
        let url = self.tickets_url();

        tracing::debug!(
            url = %url,
            per_page = params.limit(),
            "Making Freshdesk API request"
        );

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD))
            .header(CONTENT_TYPE, "application/json")
            .query(&params.to_query())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    return FreshviewError::timeout(self.timeout);
                }
                FreshviewError::Http(e)
            })?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(FreshviewError::Http)?;

        tracing::trace!(body = %body, "Freshdesk API response");

        let tickets: Vec<Ticket> = serde_json::from_str(&body)?;
        Ok(tickets)
    }

    /// Converts a non-success response into a `FreshviewError`.
    async fn handle_http_error(
        &self,
        status: StatusCode,
        response: reqwest::Response,
    ) -> FreshviewError {
        let body = response.text().await.unwrap_or_default();
        let body = FreshviewError::sanitize_message(&body, &self.api_key);
        let body = truncate_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                FreshviewError::Authentication { status }
            }
            _ => FreshviewError::HttpStatus { status, body },
        }
    }
}

/// Cuts an error body down to `MAX_ERROR_BODY_LEN` bytes on a char boundary.
fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

/// Query parameters for the ticket listing endpoint.
///
/// Sorting is fixed to most recently updated first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Page size sent as `per_page`.
    per_page: u32,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_LIMIT,
        }
    }
}

impl ListParams {
    /// Parameters for the default page of ten tickets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of tickets to return.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.per_page = limit;
        self
    }

    /// Page size that will be requested.
    pub fn limit(&self) -> u32 {
        self.per_page
    }

    fn to_query(self) -> [(&'static str, String); 3] {
        [
            ("per_page", self.per_page.to_string()),
            ("order_by", "updated_at".to_string()),
            ("order_type", "desc".to_string()),
        ]
    }
}

/// Result of [`fetch_recent_tickets`].
///
/// A failed fetch is a distinct variant, never an empty ticket list.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The request succeeded; tickets are in API order.
    Tickets(Vec<Ticket>),

    /// The request failed and no tickets are available.
    NoData {
        /// What went wrong.
        error: FreshviewError,
        /// Error text with the API key redacted.
        detail: String,
    },
}

impl FetchOutcome {
    /// Tickets from a successful fetch, `None` for `NoData`.
    pub fn tickets(&self) -> Option<&[Ticket]> {
        match self {
            FetchOutcome::Tickets(tickets) => Some(tickets.as_slice()),
            FetchOutcome::NoData { .. } => None,
        }
    }

    /// Returns true for a failed fetch.
    pub fn is_no_data(&self) -> bool {
        matches!(self, FetchOutcome::NoData { .. })
    }

    /// The one-line console report for this outcome.
    pub fn status_line(&self) -> String {
        match self {
            FetchOutcome::Tickets(tickets) => {
                format!("Successfully fetched {} tickets", tickets.len())
            }
            FetchOutcome::NoData { detail, .. } => format!("Error fetching tickets: {}", detail),
        }
    }
}

/// Fetches up to `limit` tickets, most recently updated first.
///
/// Never returns an error: failures are logged and reported as
/// `FetchOutcome::NoData` carrying a sanitized description.
pub async fn fetch_recent_tickets(client: &FreshdeskClient, limit: u32) -> FetchOutcome {
    let params = ListParams::new().with_limit(limit);

    match client.list_tickets(&params).await {
        Ok(tickets) => {
            tracing::info!(count = tickets.len(), "Fetched tickets");
            FetchOutcome::Tickets(tickets)
        }
        Err(error) => {
            let detail = error.sanitized_display(client.api_key_for_sanitization());
            tracing::error!(error = %detail, "Failed to fetch tickets");
            FetchOutcome::NoData { error, detail }
        }
    }
}

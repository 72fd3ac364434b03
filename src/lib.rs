//! # freshview
//!
//! freshview prints the most recently updated tickets of a Freshdesk account
//! to the console.
//!
//! ## Architecture
//!
//! The crate is organized into a few small modules:
//!
//! - [`config`] - Configuration loading from environment variables
//! - [`error`] - Error type with API-key redaction
//! - [`freshdesk_client`] - HTTP client for the Freshdesk v2 ticket API
//! - [`format`] - Plain-text rendering of ticket blocks
//! - [`models`] - Ticket record and status/priority/source code tables
//! - [`report`] - The configuration-to-tickets pass run by the binary
//!
//! ## Configuration
//!
//! Two environment variables are required (a `.env` file is also read):
//!
//! - `FRESHCHAT_API_KEY`: Freshdesk API key
//! - `FRESHCHAT_DOMAIN`: Account domain, e.g. `acme.freshdesk.com`
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `freshview=debug`)
//!
//! ## Example
//!
//! ```ignore
//! use freshview::config::Config;
//! use freshview::format::format_ticket_data;
//! use freshview::freshdesk_client::{fetch_recent_tickets, FreshdeskClient, DEFAULT_LIMIT};
//!
//! async fn example() -> Result<(), freshview::error::FreshviewError> {
//!     let config = Config::from_env();
//!     config.ensure_complete()?;
//!     let client = FreshdeskClient::new(&config)?;
//!
//!     let outcome = fetch_recent_tickets(&client, DEFAULT_LIMIT).await;
//!     println!("{}", outcome.status_line());
//!     print!("{}", format_ticket_data(&outcome));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod format;
pub mod freshdesk_client;
pub mod models;
pub mod report;

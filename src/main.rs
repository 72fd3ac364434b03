//! freshview - print recent Freshdesk tickets
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `FRESHCHAT_API_KEY`: Freshdesk API key
//! - `FRESHCHAT_DOMAIN`: Account domain, e.g. `acme.freshdesk.com`
//!
//! # Usage
//!
//! ```bash
//! FRESHCHAT_API_KEY=xxx FRESHCHAT_DOMAIN=acme.freshdesk.com ./freshview --limit 5
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use freshview::config::Config;
use freshview::format::format_ticket_data;
use freshview::freshdesk_client::{FreshdeskClient, DEFAULT_LIMIT, MAX_PER_PAGE};
use freshview::report::{error_line, fetch_for_config};

/// Print the most recently updated Freshdesk tickets.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Number of tickets to fetch.
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_LIMIT,
        value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_PER_PAGE))
    )]
    limit: u32,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the report
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("freshview=warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", error_line(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::from_env();
    let outcome = fetch_for_config(&config, cli.limit, FreshdeskClient::new).await?;
    if outcome.is_no_data() {
        eprintln!("{}", outcome.status_line());
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", outcome.status_line());
    print!("{}", format_ticket_data(&outcome));

    Ok(ExitCode::SUCCESS)
}

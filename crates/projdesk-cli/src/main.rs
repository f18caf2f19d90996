//! Projdesk CLI
//!
//! Lists, adds, edits, and deletes projects from the terminal.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use projdesk_cli::Cli;

const DEFAULT_FILTER: &str = "warn,projdesk=info";
const VERBOSE_FILTER: &str = "info,projdesk=debug";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs share stderr with notifications; stdout carries only the page.
    let default_filter = if cli.verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    projdesk_cli::commands::run(cli).await?;
    Ok(())
}

//! Functions Framework conformance action
//!
//! Entry point of the GitHub Action. Reads the action inputs, builds the
//! conformance client and runs it. Any failure is reported once, as an
//! `::error::` workflow command, and the process exits with status 1.
//!
//! Logs go to stderr; stdout carries the CI log and workflow commands.

mod args;
mod commands;
mod router;

use args::Cli;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins; -v only changes the default level
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    router::route(cli).await
}

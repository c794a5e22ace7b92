//! `strato-dns` entry point
//!
//! Parses flags/env, logs in, and runs one `list`, `add` or `remove` command against the
//! configured domain. Logs go to stderr, results to stdout.

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use strato_dns_provider::{ProviderError, StratoProvider};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v; `log` records from the provider are bridged in
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level())),
        )
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let expected = e
                .downcast_ref::<ProviderError>()
                .is_some_and(ProviderError::is_expected);
            if expected {
                tracing::warn!("{e:#}");
            } else {
                tracing::error!("{e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    tracing::info!("Connecting to {} for order {}", cli.api, cli.order);
    let provider = StratoProvider::connect(cli.credentials(), &cli.client_options())
        .await
        .context("Failed to create Strato client")?;
    tracing::debug!("Session established: {:?}", provider.session());

    commands::run(&provider, &cli.command).await
}

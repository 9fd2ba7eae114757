//! Grafana CLI - command-line access to the Grafana HTTP API.
//!
//! Responsibilities:
//! - Parse command-line arguments and build configuration from `.env`,
//!   environment variables and flags.
//! - Run one Grafana operation (or one incident fetch cycle) per invocation.
//! - Format results and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - REST calls or response shaping (see `crates/client`).
//! - Scheduling repeated fetch cycles; the host runs `fetch-incidents` periodically.
//!
//! Invariants:
//! - `load_dotenv()` runs before configuration is built so `.env` values apply.
//! - Flags override environment variables, which override `.env`.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod config_context;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use clap::Parser;
use config_context::ConfigCommandContext;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use grafana_client::MetricsExporter;
use grafana_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => Some(exporter),
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config_context = if cli.command.needs_connection() {
        match build_config(&cli) {
            Ok(config) => {
                if config.is_using_default_credentials() {
                    tracing::warn!(
                        "Using default Grafana credentials (admin/admin). \
                         These are for local development only."
                    );
                }
                ConfigCommandContext::Real(Box::new(config))
            }
            Err(e) => {
                eprintln!("{:#}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        ConfigCommandContext::Placeholder
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config_context, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Merge `.env`, environment variables and flags into a [`grafana_config::Config`].
fn build_config(cli: &Cli) -> anyhow::Result<grafana_config::Config> {
    use anyhow::Context;

    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load environment")?
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref username) = cli.username {
        loader = loader.with_username(username.clone());
    }
    if let Some(ref password) = cli.password {
        loader = loader.with_password(password.clone());
    }
    if let Some(ref token) = cli.api_token {
        loader = loader.with_api_token(token.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }
    if let args::Commands::FetchIncidents(ref fetch) = cli.command {
        if let Some(ref first_fetch) = fetch.first_fetch {
            loader = loader.with_lookback(first_fetch.clone());
        }
        if let Some(max_fetch) = fetch.max_fetch {
            loader = loader.with_max_fetch(max_fetch);
        }
        if let Some(ref path) = fetch.state_path {
            loader = loader.with_state_path(path.clone());
        }
    }

    loader.build().context("Failed to build configuration")
}

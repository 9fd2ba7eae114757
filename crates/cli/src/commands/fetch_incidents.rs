//! One incident fetch cycle.
//!
//! Responsibilities:
//! - Load the last-run record, run one poll against the alert list and print
//!   the new incidents.
//! - Persist the advanced watermark.
//!
//! Does NOT handle:
//! - Scheduling; the host invokes this command periodically.
//!
//! Invariants:
//! - The state file is written only after the alert list was fetched and the
//!   incidents were written out. A failed cycle leaves it untouched, so the
//!   next cycle starts from the same watermark.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use grafana_client::FetchParams;
use grafana_config::{Config, FetchStateStore, Lookback};
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Args)]
pub struct FetchIncidentsArgs {
    /// How far back the first cycle looks, e.g. "3 days" or "12 hours"
    #[arg(long, value_name = "LOOKBACK")]
    pub first_fetch: Option<Lookback>,

    /// Maximum incidents per cycle (1-50; 0 means 50)
    #[arg(long)]
    pub max_fetch: Option<usize>,

    /// File holding the last-run watermark
    #[arg(long, value_name = "FILE")]
    pub state_path: Option<PathBuf>,
}

/// Overrides were already merged into `config` by `main::build_config`.
pub async fn run(config: Config, output: &Output, cancel: &CancellationToken) -> Result<()> {
    let params = FetchParams::from_config(&config.fetch)?;
    let store = FetchStateStore::from_config(&config.fetch)
        .context("Failed to locate the fetch state file")?;
    let last_run = store
        .load()
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    let client = build_client(&config)?;
    let (next_run, incidents) = cancel
        .run(client.fetch_incidents(&last_run, &params, Utc::now()))
        .await
        .context("Failed to fetch incidents")?;

    let rendered = serde_json::to_value(&incidents)?;
    output.emit("Incidents", &rendered)?;

    store
        .save(&next_run)
        .with_context(|| format!("Failed to write {}", store.path().display()))?;
    info!(
        incidents = incidents.len(),
        last_fetch = ?next_run.last_fetch,
        "Fetch cycle persisted"
    );
    Ok(())
}

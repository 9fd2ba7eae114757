//! Alerts command implementation.
//!
//! Responsibilities:
//! - List alerts with dashboard, panel, state and folder filters.
//! - Pause, un-pause and fetch single alerts.
//!
//! Does NOT handle:
//! - Converting alerts into incidents (see `fetch_incidents`).
//!
//! Invariants:
//! - `--state` values are validated before any request is sent.

use anyhow::{Context, Result};
use clap::Subcommand;
use grafana_client::{Alert, AlertListParams, AlertState};
use grafana_config::Config;
use serde_json::Value;
use tracing::info;

use super::{Output, build_client};
use crate::cancellation::CancellationToken;

#[derive(Debug, Subcommand)]
pub enum AlertsCommand {
    /// List alerts matching the given filters
    List {
        /// Dashboard ids to filter by (comma-separated)
        #[arg(long, value_delimiter = ',')]
        dashboard_id: Vec<String>,
        /// Panel id to filter by
        #[arg(long)]
        panel_id: Option<String>,
        /// Limit response to alerts whose name contains this text
        #[arg(long)]
        query: Option<String>,
        /// States to filter by: all, no_data, paused, alerting, ok, pending (comma-separated)
        #[arg(long, value_delimiter = ',')]
        state: Vec<String>,
        /// Maximum number of alerts to return
        #[arg(long)]
        limit: Option<u32>,
        /// Folder ids to filter by (comma-separated)
        #[arg(long, value_delimiter = ',')]
        folder_id: Vec<String>,
        /// Limit response to alerts of dashboards whose title contains this text
        #[arg(long)]
        dashboard_query: Option<String>,
        /// Limit response to alerts of dashboards with these tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        dashboard_tag: Vec<String>,
    },
    /// Pause an alert
    Pause {
        /// Alert id
        alert_id: String,
    },
    /// Un-pause an alert
    Unpause {
        /// Alert id
        alert_id: String,
    },
    /// Show a single alert
    Get {
        /// Alert id
        alert_id: String,
    },
}

pub async fn run(
    config: Config,
    command: AlertsCommand,
    output: &Output,
    cancel: &CancellationToken,
) -> Result<()> {
    match command {
        AlertsCommand::List {
            dashboard_id,
            panel_id,
            query,
            state,
            limit,
            folder_id,
            dashboard_query,
            dashboard_tag,
        } => {
            let params = AlertListParams {
                dashboard_ids: dashboard_id,
                panel_id,
                query,
                states: AlertState::parse_all(&state)?,
                limit,
                folder_ids: folder_id,
                dashboard_query,
                dashboard_tags: dashboard_tag,
            };
            info!("Listing alerts");
            let client = build_client(&config)?;
            let alerts = cancel
                .run(client.list_alerts(&params))
                .await
                .context("Failed to list alerts")?;
            let alerts: Vec<Value> = alerts.into_iter().map(Alert::into_value).collect();
            output.emit("Alerts", &Value::Array(alerts))
        }
        AlertsCommand::Pause { alert_id } => {
            info!("Pausing alert {}", alert_id);
            let client = build_client(&config)?;
            let paused = cancel
                .run(client.pause_alert(&alert_id))
                .await
                .with_context(|| format!("Failed to pause alert {alert_id}"))?;
            output.emit("Paused Alert", &paused)
        }
        AlertsCommand::Unpause { alert_id } => {
            info!("Un-pausing alert {}", alert_id);
            let client = build_client(&config)?;
            let unpaused = cancel
                .run(client.unpause_alert(&alert_id))
                .await
                .with_context(|| format!("Failed to un-pause alert {alert_id}"))?;
            output.emit("Un-paused Alerts", &unpaused)
        }
        AlertsCommand::Get { alert_id } => {
            let client = build_client(&config)?;
            let alert = cancel
                .run(client.get_alert(&alert_id))
                .await
                .with_context(|| format!("Failed to get alert {alert_id}"))?;
            output.emit("Alert", &alert)
        }
    }
}

//! CLI command implementations.
//!
//! Each submodule owns one resource: its clap subcommand enum and a `run`
//! function that calls the client, then hands the result to the formatters.

pub mod alerts;
pub mod annotations;
pub mod completions;
pub mod dashboards;
pub mod fetch_incidents;
pub mod orgs;
pub mod teams;
pub mod test_connection;
pub mod users;

use std::path::PathBuf;

use anyhow::{Context, Result};
use grafana_client::{GrafanaClient, HttpTransport, MetricsCollector};
use grafana_config::Config;
use serde_json::{Value, json};

use crate::formatters::{OutputFormat, get_formatter, output_result};

/// Build a client for the configured server with metrics recording enabled.
pub fn build_client(config: &Config) -> Result<GrafanaClient<HttpTransport>> {
    GrafanaClient::from_config(config, Some(MetricsCollector::new()))
        .context("Failed to build Grafana client")
}

/// Where and in which format a command writes its result.
#[derive(Debug, Clone)]
pub struct Output {
    pub format: OutputFormat,
    pub file: Option<PathBuf>,
}

impl Output {
    pub fn new(format: OutputFormat, file: Option<PathBuf>) -> Self {
        Self { format, file }
    }

    /// Render `value` under `title` and write it out.
    pub fn emit(&self, title: &str, value: &Value) -> Result<()> {
        let rendered = get_formatter(self.format).format(title, value)?;
        output_result(&rendered, self.format, self.file.as_ref())
    }

    /// Emit a confirmation message as a one-row result.
    pub fn emit_message(&self, title: &str, message: &str) -> Result<()> {
        self.emit(title, &json!({ "message": message }))
    }
}

//! Shared test utilities for grafana-cli integration tests.
//!
//! Invariants:
//! - Every command built here is hermetic: no `.env` loading and no
//!   `GRAFANA_*` variables leak in from the host.
//! - `GRAFANA_API_TOKEN` is "test-token" unless a test overrides it.

use assert_cmd::Command;

const HOST_VARS: &[&str] = &[
    "GRAFANA_URL",
    "GRAFANA_USERNAME",
    "GRAFANA_PASSWORD",
    "GRAFANA_SKIP_VERIFY",
    "GRAFANA_TIMEOUT",
    "GRAFANA_MAX_RETRIES",
    "GRAFANA_FIRST_FETCH",
    "GRAFANA_MAX_FETCH",
    "GRAFANA_FETCH_DASHBOARD_ID",
    "GRAFANA_FETCH_PANEL_ID",
    "GRAFANA_FETCH_ALERT_NAME",
    "GRAFANA_FETCH_STATE",
    "GRAFANA_STATE_PATH",
];

/// Returns a hermetic `grafana-cli` command.
pub fn grafana_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("grafana-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("GRAFANA_API_TOKEN", "test-token");
    for var in HOST_VARS {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `grafana-cli` command pointed at `base_url`, with retries off.
#[allow(dead_code)]
pub fn grafana_cmd_with_url(base_url: &str) -> Command {
    let mut cmd = grafana_cmd();
    cmd.env("GRAFANA_URL", base_url);
    cmd.env("GRAFANA_MAX_RETRIES", "0");
    cmd
}

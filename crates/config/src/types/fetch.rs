//! Incident fetch settings.
//!
//! Responsibilities:
//! - Hold the lookback window, batch size and alert filters used by `fetch-incidents`.
//! - Split comma-separated filter lists.
//!
//! Does NOT handle:
//! - Enforcing the batch ceiling (the client clamps `max_fetch`).
//! - Validating alert state names (the client owns the state vocabulary).

use std::path::PathBuf;

use crate::types::lookback::Lookback;

/// Settings for one incident fetch cycle.
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// How far back the first cycle looks when no watermark is persisted.
    pub lookback: Lookback,
    /// Requested batch size; `None` means the ceiling.
    pub max_fetch: Option<usize>,
    /// Restrict to alerts on these dashboards.
    pub dashboard_ids: Vec<String>,
    /// Restrict to alerts on this panel.
    pub panel_id: Option<String>,
    /// Free-text alert name filter.
    pub alert_name: Option<String>,
    /// Restrict to alerts in these states.
    pub states: Vec<String>,
    /// Where the fetch watermark is persisted; `None` uses the platform data dir.
    pub state_path: Option<PathBuf>,
}

/// Split a comma-separated list, trimming entries and dropping blanks.
///
/// `"1, 2,,3 "` becomes `["1", "2", "3"]`.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

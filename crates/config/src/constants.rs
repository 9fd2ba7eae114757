//! Centralized constants for the Grafana connector workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Grafana HTTP port.
pub const DEFAULT_GRAFANA_PORT: u16 = 3000;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `max_retries`.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Incident Fetch Defaults
// =============================================================================

/// Default lookback window for the first fetch cycle.
pub const DEFAULT_FIRST_FETCH: &str = "3 days";

/// Hard ceiling on incidents emitted per fetch cycle.
pub const MAX_INCIDENTS_TO_FETCH: usize = 50;

/// File name of the persisted fetch state inside the data directory.
pub const FETCH_STATE_FILE_NAME: &str = "last_run.json";

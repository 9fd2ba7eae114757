//! Incident fetching: watermark handling and alert-to-incident polling.
//!
//! The host persists a [`LastRun`] between cycles. Each cycle reads it once,
//! computes a start [`Watermark`], polls the alert list, and hands back the
//! next `LastRun` together with the new incidents. Nothing here keeps state
//! between calls.

mod poller;
mod watermark;

use std::time::Duration;

use grafana_config::constants::MAX_INCIDENTS_TO_FETCH;
use grafana_config::{FetchConfig, LastRun};

use crate::error::Result;
use crate::models::{AlertListParams, AlertState};

pub use poller::{PollOutcome, poll};
pub use watermark::{TimestampError, Watermark, initial_watermark};

/// Batch size actually used: missing, zero or above the ceiling means the ceiling.
pub fn effective_max_fetch(requested: Option<usize>) -> usize {
    match requested {
        Some(n) if (1..=MAX_INCIDENTS_TO_FETCH).contains(&n) => n,
        _ => MAX_INCIDENTS_TO_FETCH,
    }
}

/// Read the persisted watermark.
///
/// A value that cannot be parsed is logged and treated as absent, so the
/// lookback floor applies.
pub fn persisted_watermark(last_run: &LastRun) -> Option<Watermark> {
    let raw = last_run.last_fetch.as_deref()?;
    match raw.parse::<Watermark>() {
        Ok(wm) => Some(wm),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable persisted watermark");
            None
        }
    }
}

/// The record to persist after a successful cycle.
pub fn last_run_for(watermark: Watermark) -> LastRun {
    LastRun {
        last_fetch: Some(watermark.to_epoch_millis().to_string()),
    }
}

/// Parameters of one fetch cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchParams {
    /// Window used when nothing newer is persisted.
    pub lookback: Duration,
    /// Already clamped to `1..=50`.
    pub max_fetch: usize,
    pub dashboard_ids: Vec<String>,
    pub panel_id: Option<String>,
    /// Sent as the alert list's free-text `query`.
    pub alert_name: Option<String>,
    pub states: Vec<AlertState>,
}

impl Default for FetchParams {
    fn default() -> Self {
        Self {
            lookback: FetchConfig::default().lookback.duration(),
            max_fetch: MAX_INCIDENTS_TO_FETCH,
            dashboard_ids: Vec::new(),
            panel_id: None,
            alert_name: None,
            states: Vec::new(),
        }
    }
}

impl FetchParams {
    /// Validate and clamp the configured fetch settings.
    ///
    /// # Errors
    ///
    /// `ClientError::ValidationError` for an unknown alert state.
    pub fn from_config(fetch: &FetchConfig) -> Result<Self> {
        Ok(Self {
            lookback: fetch.lookback.duration(),
            max_fetch: effective_max_fetch(fetch.max_fetch),
            dashboard_ids: fetch.dashboard_ids.clone(),
            panel_id: fetch.panel_id.clone(),
            alert_name: fetch.alert_name.clone(),
            states: AlertState::parse_all(&fetch.states)?,
        })
    }

    pub(crate) fn alert_filters(&self) -> AlertListParams {
        AlertListParams {
            dashboard_ids: self.dashboard_ids.clone(),
            panel_id: self.panel_id.clone(),
            query: self.alert_name.clone(),
            states: self.states.clone(),
            ..AlertListParams::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_max_fetch_clamps() {
        assert_eq!(effective_max_fetch(None), 50);
        assert_eq!(effective_max_fetch(Some(0)), 50);
        assert_eq!(effective_max_fetch(Some(1)), 1);
        assert_eq!(effective_max_fetch(Some(50)), 50);
        assert_eq!(effective_max_fetch(Some(51)), 50);
        assert_eq!(effective_max_fetch(Some(10_000)), 50);
    }

    #[test]
    fn test_persisted_watermark_round_trip() {
        let wm: Watermark = "2024-01-01T00:00:05Z".parse().unwrap();
        let run = last_run_for(wm);
        assert_eq!(run.last_fetch.as_deref(), Some("1704067205000"));
        assert_eq!(persisted_watermark(&run), Some(wm));
    }

    #[test]
    fn test_unreadable_persisted_watermark_is_absent() {
        let run = LastRun {
            last_fetch: Some("last tuesday".to_string()),
        };
        assert_eq!(persisted_watermark(&run), None);
        assert_eq!(persisted_watermark(&LastRun::default()), None);
    }

    #[test]
    fn test_from_config_validates_states() {
        let mut fetch = FetchConfig {
            max_fetch: Some(500),
            alert_name: Some("cpu".to_string()),
            states: vec!["alerting".to_string(), "pending".to_string()],
            ..FetchConfig::default()
        };
        let params = FetchParams::from_config(&fetch).unwrap();
        assert_eq!(params.max_fetch, 50);
        assert_eq!(params.states, vec![AlertState::Alerting, AlertState::Pending]);
        assert_eq!(params.alert_filters().query.as_deref(), Some("cpu"));

        fetch.states.push("firing".to_string());
        assert!(FetchParams::from_config(&fetch).is_err());
    }
}

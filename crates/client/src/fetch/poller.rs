//! Watermark-based deduplication of polled alerts.
//!
//! Responsibilities:
//! - Order alerts by `newStateDate` and keep those newer than the watermark.
//! - Cap the batch and advance the watermark over what was emitted.
//!
//! Does NOT handle:
//! - Fetching alerts or persisting the watermark (see `client::incidents`).
//!
//! Invariants:
//! - The returned watermark is never earlier than the input watermark.
//! - No emitted incident is at or before the input watermark.
//! - Alerts beyond the cap are left for the next cycle, never consumed.
//! - An alert with a missing or unparsable `newStateDate` is skipped with a warning.

use crate::models::{Alert, Incident};

use super::watermark::Watermark;

/// Result of one [`poll`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    /// Watermark to persist for the next cycle.
    pub watermark: Option<Watermark>,
    /// New incidents, oldest first.
    pub incidents: Vec<Incident>,
    /// Alerts dropped for an unreadable timestamp.
    pub skipped: usize,
}

/// Select the alerts newer than `watermark`, oldest first, at most `max_batch`.
///
/// Alerts sharing a second keep their input order.
pub fn poll(alerts: &[Alert], max_batch: usize, watermark: Option<Watermark>) -> PollOutcome {
    let mut skipped = 0;
    let mut dated: Vec<(Watermark, &str, &Alert)> = Vec::with_capacity(alerts.len());

    for alert in alerts {
        let Some(raw) = alert.new_state_date() else {
            tracing::warn!(name = ?alert.name(), "Skipping alert without newStateDate");
            skipped += 1;
            continue;
        };
        match Watermark::from_rfc3339(raw) {
            Ok(at) => dated.push((at, raw, alert)),
            Err(e) => {
                tracing::warn!(name = ?alert.name(), error = %e, "Skipping alert with malformed newStateDate");
                skipped += 1;
            }
        }
    }

    // Stable: same-second alerts stay in input order.
    dated.sort_by_key(|(at, _, _)| *at);

    let mut next = watermark;
    let mut incidents = Vec::new();

    for (at, raw, alert) in dated {
        if incidents.len() >= max_batch {
            break;
        }
        if watermark.is_some_and(|wm| at <= wm) {
            continue;
        }
        match Incident::from_alert(alert, raw) {
            Ok(incident) => {
                incidents.push(incident);
                next = next.max(Some(at));
            }
            Err(e) => {
                tracing::warn!(name = ?alert.name(), error = %e, "Skipping alert that cannot be serialized");
                skipped += 1;
            }
        }
    }

    PollOutcome {
        watermark: next,
        incidents,
        skipped,
    }
}

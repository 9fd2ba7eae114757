//! Incident fetch cycle for [`GrafanaClient`].

use chrono::{DateTime, Utc};
use grafana_config::LastRun;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::fetch::{FetchParams, initial_watermark, last_run_for, persisted_watermark, poll};
use crate::models::Incident;
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    /// Run one fetch cycle.
    ///
    /// Reads the watermark from `last_run`, lists alerts with the configured
    /// filters and returns the record to persist plus the new incidents.
    /// A transport error is returned as-is; `last_run` is never modified.
    pub async fn fetch_incidents(
        &self,
        last_run: &LastRun,
        params: &FetchParams,
        now: DateTime<Utc>,
    ) -> Result<(LastRun, Vec<Incident>)> {
        let start = initial_watermark(persisted_watermark(last_run), params.lookback, now);
        tracing::debug!(
            last_fetch = ?last_run.last_fetch,
            start = %start,
            "Fetching incidents"
        );

        let alerts = endpoints::list_alerts(&self.transport, &params.alert_filters()).await?;
        let outcome = poll(&alerts, params.max_fetch, Some(start));
        let next = outcome.watermark.unwrap_or(start);
        if let Some(metrics) = &self.metrics {
            metrics.record_fetch_cycle(outcome.incidents.len(), outcome.skipped);
        }

        tracing::debug!(
            next = %next,
            incidents = outcome.incidents.len(),
            skipped = outcome.skipped,
            "Fetch cycle complete"
        );

        Ok((last_run_for(next), outcome.incidents))
    }
}

//! Grafana HTTP API client.
//!
//! This crate provides a typed client for the Grafana HTTP API: alerts,
//! users, teams, organizations, dashboards and annotations. It also
//! implements the incident poller that turns new alerts into incidents
//! behind a persisted watermark. Basic and API token authentication are
//! both supported.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
pub mod transport;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use client::{AUTHORIZATION_ERROR_MESSAGE, ConnectionCheck, GrafanaClient};
pub use error::{ClientError, Result};
pub use fetch::{
    FetchParams, PollOutcome, TimestampError, Watermark, effective_max_fetch, initial_watermark,
    last_run_for, persisted_watermark, poll,
};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    Acknowledgement, Alert, AlertListParams, AlertState, DashboardSearchParams, INCIDENT_TYPE,
    Incident, NewAnnotation, NewTeam, Paging, TeamSearchParams, UserUpdate,
};
pub use transport::{HttpTransport, HttpTransportBuilder, QueryParams, Transport};

//! Request and response models for the Grafana HTTP API.
//!
//! Most responses are passed through as `serde_json::Value` after shaping;
//! the types here cover alerts (the poller's input), incidents (its output)
//! and the typed request parameters.

pub mod alerts;
pub mod annotations;
pub mod common;
pub mod dashboards;
pub mod incident;
pub mod teams;
pub mod users;

pub use alerts::{Alert, AlertListParams, AlertState};
pub use annotations::NewAnnotation;
pub use common::{Acknowledgement, Paging};
pub use dashboards::DashboardSearchParams;
pub use incident::{INCIDENT_TYPE, Incident};
pub use teams::{NewTeam, TeamSearchParams};
pub use users::UserUpdate;

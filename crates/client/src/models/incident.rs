//! The incident record handed to the host's ingestion API.

use serde::{Deserialize, Serialize};

use super::alerts::Alert;
use crate::error::{ClientError, Result};

/// Incident type attached to every alert-derived incident.
pub const INCIDENT_TYPE: &str = "Grafana Alert";

/// One incident, created one-to-one from an alert newer than the watermark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Incident {
    pub name: String,
    /// The alert's `newStateDate`, verbatim.
    pub occurred: String,
    /// The alert serialized as JSON, with `"type": "Grafana Alert"` added.
    #[serde(rename = "rawJSON")]
    pub raw_json: String,
    #[serde(rename = "type")]
    pub incident_type: String,
}

impl Incident {
    /// Build an incident from an alert.
    ///
    /// An alert without a `name` yields an empty incident name.
    pub fn from_alert(alert: &Alert, occurred: &str) -> Result<Self> {
        let mut raw = alert.clone();
        raw.insert("type", INCIDENT_TYPE.into());
        let raw_json = serde_json::to_string(&raw)
            .map_err(|e| ClientError::InvalidResponse(format!("alert is not serializable: {e}")))?;

        Ok(Self {
            name: alert.name().unwrap_or_default().to_string(),
            occurred: occurred.to_string(),
            raw_json,
            incident_type: INCIDENT_TYPE.to_string(),
        })
    }
}

//! Legacy dashboard alert models.
//!
//! Responsibilities:
//! - Represent an alert as an opaque JSON object with typed accessors.
//! - Define the alert state vocabulary and list filters.
//!
//! Invariants:
//! - Unknown alert fields survive deserialization and re-serialization.
//! - Only the states in [`AlertState::ALL`] are ever sent to Grafana.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ClientError;

/// One alert as returned by `GET /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Alert(Map<String, Value>);

impl Alert {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn name(&self) -> Option<&str> {
        self.str_field("name")
    }

    pub fn state(&self) -> Option<&str> {
        self.str_field("state")
    }

    /// Raw `newStateDate` text, e.g. `2024-01-01T00:00:05Z`.
    pub fn new_state_date(&self) -> Option<&str> {
        self.str_field("newStateDate")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for Alert {
    type Error = ClientError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(ClientError::InvalidResponse(format!(
                "expected an alert object, got {other}"
            ))),
        }
    }
}

/// Alert state filter values Grafana accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertState {
    All,
    NoData,
    Paused,
    Alerting,
    Ok,
    Pending,
}

impl AlertState {
    pub const ALL: [AlertState; 6] = [
        AlertState::All,
        AlertState::NoData,
        AlertState::Paused,
        AlertState::Alerting,
        AlertState::Ok,
        AlertState::Pending,
    ];

    /// Wire value. Grafana documents `ALL` but only honours lower case.
    pub const fn as_str(&self) -> &'static str {
        match self {
            AlertState::All => "all",
            AlertState::NoData => "no_data",
            AlertState::Paused => "paused",
            AlertState::Alerting => "alerting",
            AlertState::Ok => "ok",
            AlertState::Pending => "pending",
        }
    }

    /// Parse every entry, failing on the first unknown state.
    pub fn parse_all<S: AsRef<str>>(raw: &[S]) -> Result<Vec<AlertState>, ClientError> {
        raw.iter().map(|s| s.as_ref().parse()).collect()
    }
}

impl fmt::Display for AlertState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlertState {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        AlertState::ALL
            .into_iter()
            .find(|state| state.as_str() == trimmed)
            .ok_or_else(|| {
                ClientError::ValidationError(format!(
                    "unknown alert state '{trimmed}'. State must be of: all, no_data, paused, alerting, ok, pending"
                ))
            })
    }
}

/// Filters for `GET /api/alerts`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertListParams {
    pub dashboard_ids: Vec<String>,
    pub panel_id: Option<String>,
    /// Free-text match on the alert name.
    pub query: Option<String>,
    pub states: Vec<AlertState>,
    pub limit: Option<u32>,
    pub folder_ids: Vec<String>,
    pub dashboard_query: Option<String>,
    pub dashboard_tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alert_preserves_unknown_fields() {
        let raw = json!({
            "id": 1,
            "name": "CPU high",
            "state": "alerting",
            "newStateDate": "2024-01-01T00:00:05Z",
            "evalData": {"evalMatches": []}
        });

        let alert: Alert = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(alert.name(), Some("CPU high"));
        assert_eq!(alert.state(), Some("alerting"));
        assert_eq!(alert.new_state_date(), Some("2024-01-01T00:00:05Z"));
        assert_eq!(serde_json::to_value(&alert).unwrap(), raw);
    }

    #[test]
    fn test_alert_try_from_rejects_non_objects() {
        assert!(Alert::try_from(json!([1, 2])).is_err());
        assert!(Alert::try_from(json!({"name": "x"})).is_ok());
    }

    #[test]
    fn test_alert_state_parsing() {
        assert_eq!("no_data".parse::<AlertState>().unwrap(), AlertState::NoData);
        assert_eq!(" ok ".parse::<AlertState>().unwrap(), AlertState::Ok);

        let err = "ALL".parse::<AlertState>().unwrap_err();
        assert!(matches!(err, ClientError::ValidationError(_)));
        assert!(err.to_string().contains("all, no_data, paused"));
    }

    #[test]
    fn test_parse_all_checks_each_entry() {
        let states = AlertState::parse_all(&["alerting", "pending"]).unwrap();
        assert_eq!(states, vec![AlertState::Alerting, AlertState::Pending]);

        assert!(AlertState::parse_all(&["alerting", "firing"]).is_err());
        assert!(AlertState::parse_all::<&str>(&[]).unwrap().is_empty());
    }
}

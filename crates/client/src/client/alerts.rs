//! Alert API methods for [`GrafanaClient`].

use serde_json::Value;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Alert, AlertListParams};
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    pub async fn list_alerts(&self, params: &AlertListParams) -> Result<Vec<Alert>> {
        endpoints::list_alerts(&self.transport, params).await
    }

    pub async fn pause_alert(&self, alert_id: &str) -> Result<Value> {
        endpoints::set_alert_paused(&self.transport, alert_id, true).await
    }

    pub async fn unpause_alert(&self, alert_id: &str) -> Result<Value> {
        endpoints::set_alert_paused(&self.transport, alert_id, false).await
    }

    pub async fn get_alert(&self, alert_id: &str) -> Result<Value> {
        endpoints::get_alert(&self.transport, alert_id).await
    }
}

//! Organization API methods for [`GrafanaClient`].

use serde_json::Value;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::Paging;
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    pub async fn create_org(&self, name: &str) -> Result<Value> {
        endpoints::create_org(&self.transport, name).await
    }

    pub async fn list_orgs(&self, paging: Paging) -> Result<Value> {
        endpoints::list_orgs(&self.transport, paging).await
    }

    pub async fn get_org_by_name(&self, name: &str) -> Result<Value> {
        endpoints::get_org_by_name(&self.transport, name).await
    }

    pub async fn get_org_by_id(&self, org_id: &str) -> Result<Value> {
        endpoints::get_org_by_id(&self.transport, org_id).await
    }
}

//! User API methods for [`GrafanaClient`].

use serde_json::Value;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Paging, UserUpdate};
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    pub async fn search_users(&self, paging: Paging, query: Option<&str>) -> Result<Value> {
        endpoints::search_users(&self.transport, paging, query).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<Value> {
        endpoints::get_user(&self.transport, user_id).await
    }

    /// `{"id", "teams"}` for the user.
    pub async fn get_user_teams(&self, user_id: &str) -> Result<Value> {
        endpoints::get_user_teams(&self.transport, user_id).await
    }

    /// `{"id", "orgs"}` for the user.
    pub async fn get_user_orgs(&self, user_id: &str) -> Result<Value> {
        endpoints::get_user_orgs(&self.transport, user_id).await
    }

    /// Update a user and return Grafana's acknowledgement message.
    pub async fn update_user(&self, user_id: &str, update: &UserUpdate) -> Result<String> {
        endpoints::update_user(&self.transport, user_id, update).await
    }
}

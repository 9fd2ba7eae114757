//! Team API methods for [`GrafanaClient`].

use serde_json::Value;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{NewTeam, TeamSearchParams};
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    /// Matching teams (the `teams` array of the paged response).
    pub async fn search_teams(&self, params: &TeamSearchParams) -> Result<Value> {
        endpoints::search_teams(&self.transport, params).await
    }

    pub async fn get_team(&self, team_id: &str) -> Result<Value> {
        endpoints::get_team(&self.transport, team_id).await
    }

    /// `{"id", "members"}` for the team.
    pub async fn get_team_members(&self, team_id: &str) -> Result<Value> {
        endpoints::get_team_members(&self.transport, team_id).await
    }

    pub async fn add_user_to_team(&self, team_id: &str, user_id: &str) -> Result<String> {
        endpoints::add_user_to_team(&self.transport, team_id, user_id).await
    }

    pub async fn remove_user_from_team(&self, team_id: &str, user_id: &str) -> Result<String> {
        endpoints::remove_user_from_team(&self.transport, team_id, user_id).await
    }

    pub async fn add_team(&self, team: &NewTeam) -> Result<Value> {
        endpoints::add_team(&self.transport, team).await
    }

    pub async fn delete_team(&self, team_id: &str) -> Result<String> {
        endpoints::delete_team(&self.transport, team_id).await
    }
}

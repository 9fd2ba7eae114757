//! Team endpoints.

use serde_json::{Value, json};

use super::shaping::{message, rename_key, wrap_with_id};
use super::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{NewTeam, TeamSearchParams};
use crate::transport::{QueryParams, Transport};

/// Search teams. Returns the `teams` array of the paged response.
pub async fn search_teams<T: Transport>(transport: &T, params: &TeamSearchParams) -> Result<Value> {
    let query = QueryParams::new()
        .opt("perpage", params.paging.perpage)
        .opt("page", params.paging.page)
        .opt("query", params.query.as_deref())
        .opt("name", params.name.as_deref());

    let mut response = transport.get("api/teams/search", &query).await?;
    response
        .get_mut("teams")
        .map(Value::take)
        .ok_or_else(|| ClientError::InvalidResponse("missing teams in search response".to_string()))
}

pub async fn get_team<T: Transport>(transport: &T, team_id: &str) -> Result<Value> {
    let path = format!("api/teams/{}", encode_path_segment(team_id));
    transport.get(&path, &QueryParams::new()).await
}

/// Members of a team, as `{"id": team_id, "members": [...]}`.
pub async fn get_team_members<T: Transport>(transport: &T, team_id: &str) -> Result<Value> {
    let path = format!("api/teams/{}/members", encode_path_segment(team_id));
    let members = transport.get(&path, &QueryParams::new()).await?;
    Ok(wrap_with_id(team_id, "members", members))
}

/// Add a user to a team.
///
/// Grafana answers 400 when the user is already a member; that counts as
/// success and its message is returned.
pub async fn add_user_to_team<T: Transport>(
    transport: &T,
    team_id: &str,
    user_id: &str,
) -> Result<String> {
    let user_id: i64 = user_id.trim().parse().map_err(|_| {
        ClientError::ValidationError(format!("user id must be an integer, got '{user_id}'"))
    })?;
    let path = format!("api/teams/{}/members", encode_path_segment(team_id));

    match transport.post(&path, &json!({ "userId": user_id })).await {
        Ok(response) => message(&response),
        Err(ClientError::ApiError {
            status: 400,
            message,
            ..
        }) => {
            tracing::debug!(team_id, user_id, %message, "User already in team");
            Ok(message)
        }
        Err(e) => Err(e),
    }
}

pub async fn remove_user_from_team<T: Transport>(
    transport: &T,
    team_id: &str,
    user_id: &str,
) -> Result<String> {
    let path = format!(
        "api/teams/{}/members/{}",
        encode_path_segment(team_id),
        encode_path_segment(user_id)
    );
    let response = transport.delete(&path).await?;
    message(&response)
}

/// Create a team. `teamId` in the response is renamed to `id`.
pub async fn add_team<T: Transport>(transport: &T, team: &NewTeam) -> Result<Value> {
    let body = serde_json::to_value(team)
        .map_err(|e| ClientError::ValidationError(format!("invalid team: {e}")))?;
    let response = transport.post("api/teams", &body).await?;
    Ok(rename_key(response, "teamId", "id"))
}

pub async fn delete_team<T: Transport>(transport: &T, team_id: &str) -> Result<String> {
    let path = format!("api/teams/{}", encode_path_segment(team_id));
    let response = transport.delete(&path).await?;
    message(&response)
}

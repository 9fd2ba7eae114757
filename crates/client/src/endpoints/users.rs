//! User endpoints.

use serde_json::Value;

use super::shaping::{message, wrap_with_id};
use super::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{Paging, UserUpdate};
use crate::transport::{QueryParams, Transport};

/// Search users.
pub async fn search_users<T: Transport>(
    transport: &T,
    paging: Paging,
    query: Option<&str>,
) -> Result<Value> {
    let params = QueryParams::new()
        .opt("perpage", paging.perpage)
        .opt("page", paging.page)
        .opt("query", query);
    transport.get("api/users", &params).await
}

pub async fn get_user<T: Transport>(transport: &T, user_id: &str) -> Result<Value> {
    let path = format!("api/users/{}", encode_path_segment(user_id));
    transport.get(&path, &QueryParams::new()).await
}

/// Teams of a user, as `{"id": user_id, "teams": [...]}`.
pub async fn get_user_teams<T: Transport>(transport: &T, user_id: &str) -> Result<Value> {
    let path = format!("api/users/{}/teams", encode_path_segment(user_id));
    let teams = transport.get(&path, &QueryParams::new()).await?;
    Ok(wrap_with_id(user_id, "teams", teams))
}

/// Organizations of a user, as `{"id": user_id, "orgs": [...]}`.
pub async fn get_user_orgs<T: Transport>(transport: &T, user_id: &str) -> Result<Value> {
    let path = format!("api/users/{}/orgs", encode_path_segment(user_id));
    let orgs = transport.get(&path, &QueryParams::new()).await?;
    Ok(wrap_with_id(user_id, "orgs", orgs))
}

/// Update a user. Fails before sending when neither login nor email is set.
pub async fn update_user<T: Transport>(
    transport: &T,
    user_id: &str,
    update: &UserUpdate,
) -> Result<String> {
    update.validate()?;
    let body = serde_json::to_value(update)
        .map_err(|e| ClientError::ValidationError(format!("invalid user update: {e}")))?;
    let path = format!("api/users/{}", encode_path_segment(user_id));
    let response = transport.put(&path, &body).await?;
    message(&response)
}

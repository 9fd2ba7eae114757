//! Organization endpoints.

use serde_json::{Value, json};

use super::shaping::rename_key;
use super::url_encoding::encode_path_segment;
use crate::error::Result;
use crate::models::Paging;
use crate::transport::{QueryParams, Transport};

/// Create an organization. `orgId` in the response is renamed to `id`.
pub async fn create_org<T: Transport>(transport: &T, name: &str) -> Result<Value> {
    let response = transport.post("api/orgs", &json!({ "name": name })).await?;
    Ok(rename_key(response, "orgId", "id"))
}

pub async fn list_orgs<T: Transport>(transport: &T, paging: Paging) -> Result<Value> {
    let query = QueryParams::new()
        .opt("perpage", paging.perpage)
        .opt("page", paging.page);
    transport.get("api/orgs", &query).await
}

pub async fn get_org_by_name<T: Transport>(transport: &T, name: &str) -> Result<Value> {
    let path = format!("api/orgs/name/{}", encode_path_segment(name));
    transport.get(&path, &QueryParams::new()).await
}

pub async fn get_org_by_id<T: Transport>(transport: &T, org_id: &str) -> Result<Value> {
    let path = format!("api/orgs/{}", encode_path_segment(org_id));
    transport.get(&path, &QueryParams::new()).await
}

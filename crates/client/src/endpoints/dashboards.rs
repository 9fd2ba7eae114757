//! Dashboard search endpoint.

use serde_json::Value;

use super::shaping::absolutize_urls;
use crate::error::Result;
use crate::models::DashboardSearchParams;
use crate::transport::{QueryParams, Transport};

/// Search dashboards and folders. Relative `url` fields are made absolute.
pub async fn search_dashboards<T: Transport>(
    transport: &T,
    params: &DashboardSearchParams,
) -> Result<Value> {
    let query = QueryParams::new()
        .opt("query", params.query.as_deref())
        .list("tag", &params.tags)
        .opt("type", params.search_type.as_deref())
        .list("dashboardIds", &params.dashboard_ids)
        .list("folderIds", &params.folder_ids)
        .opt("starred", params.starred)
        .opt("limit", params.limit)
        .opt("page", params.page);

    let response = transport.get("api/search", &query).await?;
    Ok(absolutize_urls(transport.base_url(), response))
}

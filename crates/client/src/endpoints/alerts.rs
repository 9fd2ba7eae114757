//! Legacy dashboard alert endpoints.

use serde_json::{Value, json};

use super::shaping::{absolutize_urls, lower_first_letters, remove_key, rename_key};
use super::url_encoding::encode_path_segment;
use crate::error::{ClientError, Result};
use crate::models::{Alert, AlertListParams, AlertState};
use crate::transport::{QueryParams, Transport};

/// List alerts matching the filters. Relative `url` fields are made absolute.
pub async fn list_alerts<T: Transport>(
    transport: &T,
    params: &AlertListParams,
) -> Result<Vec<Alert>> {
    let states: Vec<String> = params
        .states
        .iter()
        .map(|s| AlertState::as_str(s).to_string())
        .collect();

    let query = QueryParams::new()
        .list("dashboardId", &params.dashboard_ids)
        .opt("panelId", params.panel_id.as_deref())
        .opt("query", params.query.as_deref())
        .list("state", &states)
        .opt("limit", params.limit)
        .list("folderId", &params.folder_ids)
        .opt("dashboardQuery", params.dashboard_query.as_deref())
        .list("dashboardTag", &params.dashboard_tags);

    let response = transport.get("api/alerts", &query).await?;
    let shaped = absolutize_urls(transport.base_url(), response);

    match shaped {
        Value::Array(items) => items.into_iter().map(Alert::try_from).collect(),
        Value::Null => Ok(Vec::new()),
        other => Err(ClientError::InvalidResponse(format!(
            "expected an alert list, got {other}"
        ))),
    }
}

/// Pause or unpause an alert.
///
/// Returns `{"id", "state"}`: `alertId` is renamed to `id` and the
/// acknowledgement message is dropped.
pub async fn set_alert_paused<T: Transport>(
    transport: &T,
    alert_id: &str,
    paused: bool,
) -> Result<Value> {
    let path = format!("api/alerts/{}/pause", encode_path_segment(alert_id));
    let response = transport.post(&path, &json!({ "paused": paused })).await?;
    Ok(remove_key(rename_key(response, "alertId", "id"), "message"))
}

/// Get one alert. Grafana capitalizes this endpoint's keys; they are lowered back.
pub async fn get_alert<T: Transport>(transport: &T, alert_id: &str) -> Result<Value> {
    let path = format!("api/alerts/{}", encode_path_segment(alert_id));
    let response = transport
        .get(&path, &QueryParams::new())
        .await?;
    Ok(lower_first_letters(response))
}

//! Team request models.

use serde::Serialize;

use super::common::Paging;

/// Filters for `GET /api/teams/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSearchParams {
    pub paging: Paging,
    pub query: Option<String>,
    /// Exact team name.
    pub name: Option<String>,
}

/// Body of `POST /api/teams`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
}

//! Dashboard search models.

/// Filters for `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardSearchParams {
    pub query: Option<String>,
    pub tags: Vec<String>,
    /// `dash-db` or `dash-folder`.
    pub search_type: Option<String>,
    pub dashboard_ids: Vec<String>,
    pub folder_ids: Vec<String>,
    pub starred: Option<bool>,
    pub limit: Option<u32>,
    pub page: Option<u32>,
}

//! Types shared by several Grafana resources.

use serde::{Deserialize, Serialize};

/// `perpage`/`page` paging accepted by the search and list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    pub perpage: Option<u32>,
    pub page: Option<u32>,
}

impl Paging {
    pub fn new(perpage: Option<u32>, page: Option<u32>) -> Self {
        Self { perpage, page }
    }
}

/// The `{"message": "..."}` acknowledgement Grafana returns for mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

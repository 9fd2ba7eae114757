//! The HTTP capability the Grafana operations are written against.
//!
//! Responsibilities:
//! - Define the [`Transport`] trait (`get`/`post`/`put`/`delete` over JSON values).
//! - Build query strings where list-valued filters repeat their key.
//! - Provide the reqwest-backed [`HttpTransport`].
//!
//! Does NOT handle:
//! - Response shaping (see `endpoints`).
//!
//! Invariants:
//! - Paths are relative to the Grafana base URL (`api/alerts`, not `/api/alerts`
//!   or an absolute URL); a leading slash is tolerated.
//! - An empty success body is returned as `Value::Null`.

mod http;
mod retry;

use std::future::Future;

use serde_json::Value;

use crate::error::Result;

pub use http::{HttpTransport, HttpTransportBuilder};
pub use retry::send_request_with_retry;

/// Authenticated JSON request capability.
///
/// The Grafana operations compose a `Transport` rather than owning an HTTP
/// client, so tests can substitute an in-memory implementation.
pub trait Transport: Send + Sync {
    /// Base URL used to absolutize relative `url` fields.
    fn base_url(&self) -> &str;

    fn get(&self, path: &str, query: &QueryParams) -> impl Future<Output = Result<Value>> + Send;

    fn post(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    fn put(&self, path: &str, body: &Value) -> impl Future<Output = Result<Value>> + Send;

    fn delete(&self, path: &str) -> impl Future<Output = Result<Value>> + Send;
}

/// Ordered query parameters. Unset values are left out entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key=value` when `value` is present.
    pub fn opt(mut self, key: &str, value: Option<impl ToString>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key.to_string(), value.to_string()));
        }
        self
    }

    /// Add `key=v` once per element.
    pub fn list(mut self, key: &str, values: &[String]) -> Self {
        self.pairs.extend(
            values
                .iter()
                .map(|value| (key.to_string(), value.clone())),
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// All values recorded for `key`, in insertion order.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

/// Join a relative API path onto the base URL.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

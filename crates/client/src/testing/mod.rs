//! Testing utilities for Grafana client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use grafana_client::testing::{MockTransport, load_fixture};
//!
//! let transport = MockTransport::new("http://grafana.test")
//!     .respond(load_fixture("alerts/list_alerts.json"));
//! ```

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::transport::{QueryParams, Transport};

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> Value {
    let full_path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

/// In-memory [`Transport`] answering from a queue and recording every request.
#[derive(Debug)]
pub struct MockTransport {
    base_url: String,
    responses: Mutex<VecDeque<Result<Value>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response.
    pub fn respond(self, value: Value) -> Self {
        self.push(Ok(value));
        self
    }

    /// Queue a failure.
    pub fn fail(self, error: ClientError) -> Self {
        self.push(Err(error));
        self
    }

    /// Every request made so far, in order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("mock requests lock").clone()
    }

    fn push(&self, response: Result<Value>) {
        self.responses
            .lock()
            .expect("mock responses lock")
            .push_back(response);
    }

    fn answer(
        &self,
        method: &'static str,
        path: &str,
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<Value> {
        self.requests
            .lock()
            .expect("mock requests lock")
            .push(RecordedRequest {
                method,
                path: path.to_string(),
                query,
                body,
            });
        self.responses
            .lock()
            .expect("mock responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Err(ClientError::InvalidResponse(format!(
                    "no response queued for {method} {path}"
                )))
            })
    }
}

impl Transport for MockTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.answer("GET", path, query.clone(), None)
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.answer("POST", path, QueryParams::new(), Some(body.clone()))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.answer("PUT", path, QueryParams::new(), Some(body.clone()))
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.answer("DELETE", path, QueryParams::new(), None)
    }
}

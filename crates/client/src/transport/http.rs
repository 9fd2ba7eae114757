//! reqwest-backed [`Transport`] and its builder.
//!
//! Responsibilities:
//! - Configure the underlying HTTP client (timeout, redirects, TLS verification).
//! - Attach JSON headers and Basic or Bearer credentials to every request.
//! - Decode response bodies into `serde_json::Value`.
//!
//! Does NOT handle:
//! - Retry policy (see `retry.rs`).
//! - Grafana-specific response shaping (see `endpoints`).
//!
//! Invariants:
//! - `base_url` never ends with a slash.
//! - `skip_verify` only affects HTTPS URLs; for HTTP a warning is logged.

use std::time::Duration;

use reqwest::Method;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde_json::Value;

use grafana_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use grafana_config::{AuthStrategy, Config};

use super::retry::send_request_with_retry;
use super::{QueryParams, Transport, join_url};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// HTTP transport for a single Grafana server.
#[derive(Debug)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    auth: AuthStrategy,
    timeout: Duration,
    max_retries: usize,
    metrics: Option<MetricsCollector>,
}

impl HttpTransport {
    pub fn builder() -> HttpTransportBuilder {
        HttpTransportBuilder::new()
    }

    pub fn is_api_token_auth(&self) -> bool {
        matches!(self.auth, AuthStrategy::ApiToken { .. })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Option<&QueryParams>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = join_url(&self.base_url, path);
        tracing::debug!(method = %method, %url, "Sending Grafana request");

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");

        if let Some(query) = query.filter(|q| !q.is_empty()) {
            builder = builder.query(query.pairs());
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }
        builder = match &self.auth {
            AuthStrategy::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            AuthStrategy::ApiToken { token } => builder.bearer_auth(token.expose_secret()),
        };

        let response = send_request_with_retry(
            builder,
            self.max_retries,
            path,
            method.as_str(),
            self.metrics.as_ref(),
        )
        .await
        .map_err(|e| match e {
            ClientError::HttpError(inner) if inner.is_timeout() => {
                ClientError::Timeout(self.timeout)
            }
            other => other,
        })?;

        let text = response.text().await?;
        decode_body(&text)
    }
}

/// Decode a success body; an empty body is `null`.
fn decode_body(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text)
        .map_err(|e| ClientError::InvalidResponse(format!("response is not JSON: {e}")))
}

impl Transport for HttpTransport {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get(&self, path: &str, query: &QueryParams) -> Result<Value> {
        self.request(Method::GET, path, Some(query), None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::POST, path, None, Some(body)).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value> {
        self.request(Method::PUT, path, None, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value> {
        self.request(Method::DELETE, path, None, None).await
    }
}

/// Builder for [`HttpTransport`].
///
/// `base_url` and `auth` are required; everything else has a default.
pub struct HttpTransportBuilder {
    base_url: Option<String>,
    auth: Option<AuthStrategy>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
    metrics: Option<MetricsCollector>,
}

impl Default for HttpTransportBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
            metrics: None,
        }
    }
}

impl HttpTransportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Server root, e.g. `https://grafana.example.com`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Accept invalid TLS certificates.
    ///
    /// # Security Warning
    /// Only for development servers with self-signed certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries for 429/502/503/504 responses. Zero disables retrying.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Copy connection and auth settings from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth = Some(config.auth.strategy.clone());
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// Build the transport.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidUrl`] if no base URL was given.
    /// - [`ClientError::AuthFailed`] if no credentials were given.
    /// - `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<HttpTransport> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();

        let auth = self
            .auth
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        Ok(HttpTransport {
            http: http_builder.build()?,
            base_url,
            auth,
            timeout: self.timeout,
            max_retries: self.max_retries,
            metrics: self.metrics,
        })
    }
}

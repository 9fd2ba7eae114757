//! Grafana API client.
//!
//! [`GrafanaClient`] composes a [`Transport`] and exposes every supported
//! operation as a method. The reqwest-backed client is built from a loaded
//! configuration with [`GrafanaClient::from_config`].
//!
//! # Submodules
//! - `alerts`: alert listing, pausing, lookup
//! - `users`: user search, lookup, memberships, updates
//! - `teams`: team search, membership, creation, deletion
//! - `orgs`: organization creation and lookup
//! - `dashboards`: dashboard search and annotations
//! - `incidents`: one incident fetch cycle
//!
//! # What this module does NOT handle:
//! - HTTP details, auth headers or retries (see [`crate::transport`])
//! - Response shaping (see [`crate::endpoints`])

mod alerts;
mod dashboards;
mod incidents;
mod orgs;
mod teams;
mod users;

use std::fmt;

use grafana_config::Config;

use crate::endpoints;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::Paging;
use crate::transport::{HttpTransport, Transport};

/// Message shown when the connectivity check is refused.
pub const AUTHORIZATION_ERROR_MESSAGE: &str =
    "Authorization Error: make sure username and password are correctly set";

/// Outcome of [`GrafanaClient::test_connection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionCheck {
    Ok,
    AuthorizationError,
}

impl fmt::Display for ConnectionCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionCheck::Ok => f.write_str("ok"),
            ConnectionCheck::AuthorizationError => f.write_str(AUTHORIZATION_ERROR_MESSAGE),
        }
    }
}

/// Grafana API client over any [`Transport`].
#[derive(Debug)]
pub struct GrafanaClient<T> {
    transport: T,
    metrics: Option<MetricsCollector>,
}

impl<T: Transport> GrafanaClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            metrics: None,
        }
    }

    /// Record fetch-cycle counters through `metrics`.
    pub fn with_metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// Check connectivity and credentials with a user search.
    ///
    /// 401/403 become [`ConnectionCheck::AuthorizationError`]; any other
    /// failure is returned as an error.
    pub async fn test_connection(&self) -> Result<ConnectionCheck> {
        match endpoints::search_users(&self.transport, Paging::default(), None).await {
            Ok(_) => Ok(ConnectionCheck::Ok),
            Err(e) if e.is_auth_error() => {
                tracing::debug!(error = %e, "Connectivity check refused");
                Ok(ConnectionCheck::AuthorizationError)
            }
            Err(e) => Err(e),
        }
    }
}

impl GrafanaClient<HttpTransport> {
    /// Build a reqwest-backed client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn from_config(config: &Config, metrics: Option<MetricsCollector>) -> Result<Self> {
        let mut builder = HttpTransport::builder().from_config(config);
        if let Some(metrics) = &metrics {
            builder = builder.metrics(metrics.clone());
        }
        let client = Self::new(builder.build()?);
        Ok(match metrics {
            Some(metrics) => client.with_metrics(metrics),
            None => client,
        })
    }
}

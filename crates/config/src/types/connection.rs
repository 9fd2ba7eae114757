//! Connection configuration types for the Grafana connector.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the main `Config` structure combining connection, auth and fetch settings.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Default values are provided via `Default` impl, not magic numbers.
//! - `Config::default()` targets a local development server (localhost:3000).

use std::time::Duration;

use secrecy::SecretString;

use crate::constants::{DEFAULT_GRAFANA_PORT, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use crate::types::auth::{AuthConfig, AuthStrategy};
use crate::types::fetch::FetchConfig;

/// Connection configuration for a Grafana server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Grafana server (e.g., https://grafana.example.com)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or unavailable responses
    pub max_retries: usize,
}

impl ConnectionConfig {
    fn with_base_url(base_url: String) -> Self {
        Self {
            base_url,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
    /// Incident fetch settings
    pub fetch: FetchConfig,
}

impl Default for Config {
    /// Creates a default configuration with Grafana's stock development credentials.
    ///
    /// # Security Warning
    ///
    /// `admin`/`admin` against `http://localhost:3000` is only appropriate for a
    /// local development server.
    fn default() -> Self {
        Self::with_basic_auth(
            format!("http://localhost:{}", DEFAULT_GRAFANA_PORT),
            "admin".to_string(),
            SecretString::new("admin".to_string().into()),
        )
    }
}

impl Config {
    /// Returns `true` when the stock `admin`/`admin` credentials are configured.
    pub fn is_using_default_credentials(&self) -> bool {
        use secrecy::ExposeSecret;

        matches!(
            &self.auth.strategy,
            AuthStrategy::Basic { username, password }
                if username == "admin" && password.expose_secret() == "admin"
        )
    }

    /// Create a new config with the specified base URL and API token.
    pub fn with_api_token(base_url: String, token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::ApiToken { token },
            },
            fetch: FetchConfig::default(),
        }
    }

    /// Create a new config with the specified base URL and username/password.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::with_base_url(base_url),
            auth: AuthConfig {
                strategy: AuthStrategy::Basic { username, password },
            },
            fetch: FetchConfig::default(),
        }
    }
}

//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from environment variables and direct builder methods.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Persisting the fetch watermark (see persistence).
//!
//! Invariants / Assumptions:
//! - Builder methods called after `from_env()` take precedence over environment variables.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - An API token takes precedence over username/password.

use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::types::{AuthConfig, AuthStrategy, Config, ConnectionConfig, FetchConfig, Lookback};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    api_token: Option<SecretString>,
    skip_verify: Option<bool>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    lookback: Option<Lookback>,
    max_fetch: Option<usize>,
    dashboard_ids: Vec<String>,
    panel_id: Option<String>,
    alert_name: Option<String>,
    states: Vec<String>,
    state_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read configuration from environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username.
    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    /// Set the password.
    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Set the API token.
    pub fn with_api_token(mut self, token: String) -> Self {
        self.api_token = Some(SecretString::new(token.into()));
        self
    }

    /// Set whether to skip TLS verification.
    pub fn with_skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = Some(skip);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the first-fetch lookback window.
    pub fn with_lookback(mut self, lookback: Lookback) -> Self {
        self.lookback = Some(lookback);
        self
    }

    /// Set the requested incident batch size.
    pub fn with_max_fetch(mut self, max_fetch: usize) -> Self {
        self.max_fetch = Some(max_fetch);
        self
    }

    /// Override the fetch state file location.
    pub fn with_state_path(mut self, path: PathBuf) -> Self {
        self.state_path = Some(path);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .as_deref()
            .map(validate_and_normalize_base_url)
            .transpose()?
            .ok_or(ConfigError::MissingBaseUrl)?;

        let strategy = if let Some(token) = self.api_token {
            AuthStrategy::ApiToken { token }
        } else if let (Some(username), Some(password)) = (self.username, self.password) {
            AuthStrategy::Basic { username, password }
        } else {
            return Err(ConfigError::MissingAuth);
        };

        let connection = ConnectionConfig {
            base_url,
            skip_verify: self.skip_verify.unwrap_or(false),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };

        Self::validate_timeout(&connection)?;
        Self::validate_max_retries(&connection)?;

        let fetch = FetchConfig {
            lookback: self.lookback.unwrap_or_default(),
            max_fetch: self.max_fetch,
            dashboard_ids: self.dashboard_ids,
            panel_id: self.panel_id,
            alert_name: self.alert_name,
            states: self.states,
            state_path: self.state_path,
        };

        Ok(Config {
            connection,
            auth: AuthConfig { strategy },
            fetch,
        })
    }

    fn validate_timeout(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();

        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout {
                message: "timeout must be greater than 0 seconds".to_string(),
            });
        }

        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "timeout exceeds maximum allowed value of {} seconds",
                    MAX_TIMEOUT_SECS
                ),
            });
        }

        Ok(())
    }

    fn validate_max_retries(connection: &ConnectionConfig) -> Result<(), ConfigError> {
        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!(
                    "must be between 0 and {} (got {})",
                    MAX_MAX_RETRIES, connection.max_retries
                ),
            });
        }
        Ok(())
    }

    pub(crate) fn state_path(&self) -> Option<&PathBuf> {
        self.state_path.as_ref()
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_api_token(&mut self, token: Option<SecretString>) {
        self.api_token = token;
    }

    pub(crate) fn set_skip_verify(&mut self, skip: Option<bool>) {
        self.skip_verify = skip;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_lookback(&mut self, lookback: Option<Lookback>) {
        self.lookback = lookback;
    }

    pub(crate) fn set_max_fetch(&mut self, max_fetch: Option<usize>) {
        self.max_fetch = max_fetch;
    }

    pub(crate) fn set_dashboard_ids(&mut self, ids: Vec<String>) {
        self.dashboard_ids = ids;
    }

    pub(crate) fn set_panel_id(&mut self, panel_id: Option<String>) {
        self.panel_id = panel_id;
    }

    pub(crate) fn set_alert_name(&mut self, alert_name: Option<String>) {
        self.alert_name = alert_name;
    }

    pub(crate) fn set_states(&mut self, states: Vec<String>) {
        self.states = states;
    }

    pub(crate) fn set_state_path(&mut self, path: Option<PathBuf>) {
        self.state_path = path;
    }
}

/// Validates and normalizes a base URL string.
///
/// Validation rules:
/// - Blank input counts as missing
/// - Must parse as an absolute http or https URL with a host
/// - Trailing slashes are stripped
fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidValue {
        var: "base_url".into(),
        message: format!(
            "must be an absolute http(s) URL with a host (e.g. https://grafana.example.com): {e}"
        ),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "base_url".into(),
            message: "host is required (e.g. https://grafana.example.com)".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn test_build_with_basic_auth() {
        let config = ConfigLoader::new()
            .with_base_url("https://grafana.example.com/".to_string())
            .with_username("admin".to_string())
            .with_password("secret".to_string())
            .build()
            .unwrap();

        assert_eq!(config.connection.base_url, "https://grafana.example.com");
        match config.auth.strategy {
            AuthStrategy::Basic { username, password } => {
                assert_eq!(username, "admin");
                assert_eq!(password.expose_secret(), "secret");
            }
            AuthStrategy::ApiToken { .. } => panic!("expected basic auth"),
        }
    }

    #[test]
    fn test_api_token_takes_precedence() {
        let config = ConfigLoader::new()
            .with_base_url("https://grafana.example.com".to_string())
            .with_username("admin".to_string())
            .with_password("secret".to_string())
            .with_api_token("glsa_token".to_string())
            .build()
            .unwrap();

        assert!(matches!(
            config.auth.strategy,
            AuthStrategy::ApiToken { .. }
        ));
    }

    #[test]
    fn test_missing_base_url() {
        let err = ConfigLoader::new()
            .with_api_token("t".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl));

        let err = ConfigLoader::new()
            .with_base_url("   ".to_string())
            .with_api_token("t".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl));
    }

    #[test]
    fn test_missing_auth_when_password_absent() {
        let err = ConfigLoader::new()
            .with_base_url("https://grafana.example.com".to_string())
            .with_username("admin".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingAuth));
    }

    #[test]
    fn test_max_retries_limit_applies_to_builder() {
        let loader = || {
            ConfigLoader::new()
                .with_base_url("https://grafana.example.com".to_string())
                .with_username("admin".to_string())
                .with_password("secret".to_string())
        };

        let err = loader().with_max_retries(11).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMaxRetries { .. }), "{err:?}");

        let err = loader().with_max_retries(1000).build().unwrap_err();
        assert!(err.to_string().contains("got 1000"), "{err}");

        let config = loader().with_max_retries(10).build().unwrap();
        assert_eq!(config.connection.max_retries, 10);
        let config = loader().with_max_retries(0).build().unwrap();
        assert_eq!(config.connection.max_retries, 0);
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = ConfigLoader::new()
            .with_base_url("ftp://grafana.example.com".to_string())
            .with_api_token("t".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_rejects_zero_and_huge_timeouts() {
        let base = || {
            ConfigLoader::new()
                .with_base_url("https://grafana.example.com".to_string())
                .with_api_token("t".to_string())
        };

        let err = base()
            .with_timeout(Duration::from_secs(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));

        let err = base()
            .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout { .. }));
    }

    #[test]
    fn test_fetch_defaults_and_overrides() {
        let config = ConfigLoader::new()
            .with_base_url("https://grafana.example.com".to_string())
            .with_api_token("t".to_string())
            .build()
            .unwrap();
        assert_eq!(config.fetch.lookback.as_str(), "3 days");
        assert_eq!(config.fetch.max_fetch, None);

        let config = ConfigLoader::new()
            .with_base_url("https://grafana.example.com".to_string())
            .with_api_token("t".to_string())
            .with_lookback("12 hours".parse().unwrap())
            .with_max_fetch(10)
            .with_state_path(PathBuf::from("/tmp/grafana-state.json"))
            .build()
            .unwrap();
        assert_eq!(
            config.fetch.lookback.duration(),
            Duration::from_secs(12 * 3600)
        );
        assert_eq!(config.fetch.max_fetch, Some(10));
        assert_eq!(
            config.fetch.state_path,
            Some(PathBuf::from("/tmp/grafana-state.json"))
        );
    }
}

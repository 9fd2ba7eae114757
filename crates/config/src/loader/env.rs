//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `GRAFANA_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;
use crate::types::{Lookback, parse_list};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_var<T: FromStr>(var: &str, value: &str, message: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        var: var.to_string(),
        message: message.to_string(),
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("GRAFANA_URL") {
        loader.set_base_url(Some(url));
    }
    if let Some(username) = env_var_or_none("GRAFANA_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("GRAFANA_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(token) = env_var_or_none("GRAFANA_API_TOKEN") {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if let Some(skip) = env_var_or_none("GRAFANA_SKIP_VERIFY") {
        loader.set_skip_verify(Some(parse_var(
            "GRAFANA_SKIP_VERIFY",
            &skip,
            "must be true or false",
        )?));
    }
    if let Some(timeout) = env_var_or_none("GRAFANA_TIMEOUT") {
        let secs: u64 = parse_var("GRAFANA_TIMEOUT", &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("GRAFANA_MAX_RETRIES") {
        let value: usize = parse_var(
            "GRAFANA_MAX_RETRIES",
            &retries,
            "must be a non-negative integer",
        )?;
        if value > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(Some(value));
    }

    // Incident fetch settings
    if let Some(first_fetch) = env_var_or_none("GRAFANA_FIRST_FETCH") {
        let lookback =
            Lookback::from_str(&first_fetch).map_err(|source| ConfigError::InvalidLookback {
                var: "GRAFANA_FIRST_FETCH".to_string(),
                source,
            })?;
        loader.set_lookback(Some(lookback));
    }
    if let Some(max_fetch) = env_var_or_none("GRAFANA_MAX_FETCH") {
        loader.set_max_fetch(Some(parse_var(
            "GRAFANA_MAX_FETCH",
            &max_fetch,
            "must be a positive number",
        )?));
    }
    if let Some(ids) = env_var_or_none("GRAFANA_FETCH_DASHBOARD_ID") {
        loader.set_dashboard_ids(parse_list(&ids));
    }
    if let Some(panel) = env_var_or_none("GRAFANA_FETCH_PANEL_ID") {
        loader.set_panel_id(Some(panel));
    }
    if let Some(name) = env_var_or_none("GRAFANA_FETCH_ALERT_NAME") {
        loader.set_alert_name(Some(name));
    }
    if let Some(states) = env_var_or_none("GRAFANA_FETCH_STATE") {
        loader.set_states(parse_list(&states));
    }
    if loader.state_path().is_none()
        && let Some(path) = env_var_or_none("GRAFANA_STATE_PATH")
    {
        loader.set_state_path(Some(PathBuf::from(path)));
    }

    Ok(())
}

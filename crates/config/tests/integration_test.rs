//! Integration tests for configuration loading.
//!
//! Covers precedence between environment variables and explicit overrides,
//! plus parsing of the incident fetch settings.

use std::path::PathBuf;
use std::time::Duration;

use grafana_config::{AuthStrategy, ConfigError, ConfigLoader};
use secrecy::ExposeSecret;
use serial_test::serial;

/// Every `GRAFANA_*` variable the loader reads, cleared so the host env cannot leak in.
const GRAFANA_VARS: &[&str] = &[
    "GRAFANA_URL",
    "GRAFANA_USERNAME",
    "GRAFANA_PASSWORD",
    "GRAFANA_API_TOKEN",
    "GRAFANA_SKIP_VERIFY",
    "GRAFANA_TIMEOUT",
    "GRAFANA_MAX_RETRIES",
    "GRAFANA_FIRST_FETCH",
    "GRAFANA_MAX_FETCH",
    "GRAFANA_FETCH_DASHBOARD_ID",
    "GRAFANA_FETCH_PANEL_ID",
    "GRAFANA_FETCH_ALERT_NAME",
    "GRAFANA_FETCH_STATE",
    "GRAFANA_STATE_PATH",
];

fn with_env<F: FnOnce()>(vars: &[(&str, &str)], f: F) {
    let mut all: Vec<(&str, Option<&str>)> = GRAFANA_VARS.iter().map(|k| (*k, None)).collect();
    all.push(("DOTENV_DISABLED", Some("1")));
    for (key, value) in vars {
        all.retain(|(k, _)| k != key);
        all.push((key, Some(value)));
    }
    temp_env::with_vars(all, f);
}

#[test]
#[serial]
fn test_env_basic_auth() {
    with_env(
        &[
            ("GRAFANA_URL", "https://grafana.example.com/"),
            ("GRAFANA_USERNAME", "viewer"),
            ("GRAFANA_PASSWORD", "hunter2"),
        ],
        || {
            let config = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://grafana.example.com");
            assert!(!config.connection.skip_verify);
            match config.auth.strategy {
                AuthStrategy::Basic { username, password } => {
                    assert_eq!(username, "viewer");
                    assert_eq!(password.expose_secret(), "hunter2");
                }
                AuthStrategy::ApiToken { .. } => panic!("expected basic auth"),
            }
        },
    );
}

#[test]
#[serial]
fn test_explicit_overrides_win_over_env() {
    with_env(
        &[
            ("GRAFANA_URL", "https://env.example.com"),
            ("GRAFANA_API_TOKEN", "env-token"),
            ("GRAFANA_TIMEOUT", "10"),
        ],
        || {
            let config = ConfigLoader::new()
                .from_env()
                .unwrap()
                .with_base_url("https://cli.example.com".to_string())
                .with_timeout(Duration::from_secs(45))
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.example.com");
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            match config.auth.strategy {
                AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "env-token"),
                AuthStrategy::Basic { .. } => panic!("expected token auth"),
            }
        },
    );
}

#[test]
#[serial]
fn test_fetch_settings_from_env() {
    with_env(
        &[
            ("GRAFANA_URL", "http://localhost:3000"),
            ("GRAFANA_API_TOKEN", "t"),
            ("GRAFANA_FIRST_FETCH", "12 hours"),
            ("GRAFANA_MAX_FETCH", "20"),
            ("GRAFANA_FETCH_DASHBOARD_ID", "1, 2"),
            ("GRAFANA_FETCH_PANEL_ID", "4"),
            ("GRAFANA_FETCH_ALERT_NAME", "cpu"),
            ("GRAFANA_FETCH_STATE", "alerting,pending"),
            ("GRAFANA_STATE_PATH", "/tmp/grafana-last-run.json"),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            let fetch = config.fetch;

            assert_eq!(fetch.lookback.duration(), Duration::from_secs(12 * 3600));
            assert_eq!(fetch.max_fetch, Some(20));
            assert_eq!(fetch.dashboard_ids, vec!["1", "2"]);
            assert_eq!(fetch.panel_id.as_deref(), Some("4"));
            assert_eq!(fetch.alert_name.as_deref(), Some("cpu"));
            assert_eq!(fetch.states, vec!["alerting", "pending"]);
            assert_eq!(
                fetch.state_path,
                Some(PathBuf::from("/tmp/grafana-last-run.json"))
            );
        },
    );
}

#[test]
#[serial]
fn test_explicit_state_path_not_replaced_by_env() {
    with_env(&[("GRAFANA_STATE_PATH", "/tmp/from-env.json")], || {
        let config = ConfigLoader::new()
            .with_state_path(PathBuf::from("/tmp/from-flag.json"))
            .from_env()
            .unwrap()
            .with_base_url("http://localhost:3000".to_string())
            .with_api_token("t".to_string())
            .build()
            .unwrap();
        assert_eq!(
            config.fetch.state_path,
            Some(PathBuf::from("/tmp/from-flag.json"))
        );
    });
}

#[test]
#[serial]
fn test_invalid_env_values_are_rejected() {
    with_env(&[("GRAFANA_MAX_RETRIES", "11")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(matches!(err, ConfigError::InvalidMaxRetries { .. }));
    });

    with_env(&[("GRAFANA_TIMEOUT", "soon")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "GRAFANA_TIMEOUT"));
    });

    with_env(&[("GRAFANA_FIRST_FETCH", "3 fortnights")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(matches!(err, ConfigError::InvalidLookback { ref var, .. } if var == "GRAFANA_FIRST_FETCH"));
    });

    with_env(&[("GRAFANA_SKIP_VERIFY", "maybe")], || {
        let err = ConfigLoader::new().from_env().err().unwrap();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    });
}

#[test]
#[serial]
fn test_blank_env_values_are_ignored() {
    with_env(&[("GRAFANA_URL", "   "), ("GRAFANA_API_TOKEN", "")], || {
        let err = ConfigLoader::new()
            .from_env()
            .unwrap()
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingBaseUrl));
    });
}

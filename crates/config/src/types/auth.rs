//! Authentication types for Grafana connector configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (basic credentials, API token).
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate transport).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.

use secrecy::SecretString;

/// Strategy for authenticating with Grafana.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// HTTP Basic authentication. Some Grafana admin endpoints only accept this.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Service account or API key sent as a bearer token.
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_debug_redacts_password() {
        let auth = AuthConfig {
            strategy: AuthStrategy::Basic {
                username: "admin".to_string(),
                password: SecretString::new("hunter2".to_string().into()),
            },
        };

        let debug_output = format!("{:?}", auth);
        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("hunter2"));
    }

    #[test]
    fn test_api_token_debug_redacts_token() {
        let auth = AuthConfig {
            strategy: AuthStrategy::ApiToken {
                token: SecretString::new("glsa_secret".to_string().into()),
            },
        };

        assert!(!format!("{:?}", auth).contains("glsa_secret"));
    }
}

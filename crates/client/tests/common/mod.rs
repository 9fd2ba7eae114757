//! Common test utilities for integration tests.
//!
//! Re-exports the fixture loader and wiremock types, and builds clients
//! pointed at a mock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON

use std::time::Duration;

use grafana_client::{GrafanaClient, HttpTransport};
use grafana_config::AuthStrategy;
use secrecy::SecretString;

#[allow(unused_imports)]
pub use grafana_client::testing::load_fixture;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// `Authorization` header value for `admin:admin`.
#[allow(dead_code)]
pub const ADMIN_BASIC_AUTH: &str = "Basic YWRtaW46YWRtaW4=";

/// Client for `server` with `admin:admin` basic auth.
#[allow(dead_code)]
pub fn basic_client(server: &MockServer, max_retries: usize) -> GrafanaClient<HttpTransport> {
    client_with_auth(
        server,
        AuthStrategy::Basic {
            username: "admin".to_string(),
            password: SecretString::new("admin".to_string().into()),
        },
        max_retries,
    )
}

/// Client for `server` with a bearer API token.
#[allow(dead_code)]
pub fn token_client(server: &MockServer, token: &str) -> GrafanaClient<HttpTransport> {
    client_with_auth(
        server,
        AuthStrategy::ApiToken {
            token: SecretString::new(token.to_string().into()),
        },
        0,
    )
}

fn client_with_auth(
    server: &MockServer,
    auth: AuthStrategy,
    max_retries: usize,
) -> GrafanaClient<HttpTransport> {
    let transport = HttpTransport::builder()
        .base_url(server.uri())
        .auth(auth)
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries)
        .build()
        .expect("transport should build");
    GrafanaClient::new(transport)
}

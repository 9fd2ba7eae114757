//! Error handling tests.
//!
//! # Invariants
//! - Grafana's `{"message"}` body becomes the error message
//! - An empty error body falls back to the status reason
//! - 401 and 403 are auth errors; the connectivity check reports them
//! - Non-JSON success bodies are invalid responses

mod common;

use common::*;
use grafana_client::{
    AUTHORIZATION_ERROR_MESSAGE, ClientError, ConnectionCheck, GrafanaClient, HttpTransport,
};
use grafana_config::AuthStrategy;
use secrecy::SecretString;
use std::time::Duration;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_error_message_from_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users/404"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "User not found"})))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let err = client.get_user("404").await.unwrap_err();
    match err {
        ClientError::ApiError {
            status,
            url,
            message,
        } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/api/users/404"), "{url}");
            assert_eq!(message, "User not found");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_uses_reason() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams/3"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let err = client.get_team("3").await.unwrap_err();
    assert!(
        matches!(&err, ClientError::ApiError { message, .. } if message == "Not Found"),
        "{err:?}"
    );
}

#[tokio::test]
async fn test_connection_check_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid username or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let check = client.test_connection().await.unwrap();
    assert_eq!(check, ConnectionCheck::AuthorizationError);
    assert_eq!(check.to_string(), AUTHORIZATION_ERROR_MESSAGE);
}

#[tokio::test]
async fn test_connection_check_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/users"))
        .and(wiremock::matchers::header("authorization", ADMIN_BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/search_users.json")))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    assert_eq!(client.test_connection().await.unwrap(), ConnectionCheck::Ok);
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/orgs/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let err = client.get_org_by_id("1").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
}

/// Port 1 is reserved; nothing listens there.
#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let transport = HttpTransport::builder()
        .base_url("http://localhost:1".to_string())
        .auth(AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        })
        .timeout(Duration::from_secs(5))
        .max_retries(0)
        .build()
        .unwrap();
    let client = GrafanaClient::new(transport);

    let err = client.test_connection().await.unwrap_err();
    match &err {
        ClientError::HttpError(inner) => assert!(inner.is_connect(), "{err:?}"),
        ClientError::Timeout(_) => {}
        other => panic!("expected a transport failure, got {other:?}"),
    }
}

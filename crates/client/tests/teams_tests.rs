//! Team endpoint tests.
//!
//! # Invariants
//! - Adding a user who is already a member is not an error
//! - Team search returns only the `teams` array

mod common;

use common::*;
use grafana_client::{ClientError, NewTeam, Paging, TeamSearchParams};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_search_teams() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/teams/search"))
        .and(query_param("query", "op"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("teams/search_teams.json")),
        )
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let params = TeamSearchParams {
        paging: Paging::default(),
        query: Some("op".to_string()),
        name: None,
    };
    let teams = client.search_teams(&params).await.unwrap();
    assert_eq!(teams.as_array().map(Vec::len), Some(1));
    assert_eq!(teams[0]["name"], "ops");
}

#[tokio::test]
async fn test_add_user_to_team_already_member() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams/7/members"))
        .and(body_json(json!({"userId": 2})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "User is already added to this team"
        })))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let message = client.add_user_to_team("7", "2").await.unwrap();
    assert_eq!(message, "User is already added to this team");
}

#[tokio::test]
async fn test_add_user_to_missing_team_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams/99/members"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Team not found"})),
        )
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);
    let err = client.add_user_to_team("99", "2").await.unwrap_err();
    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Team not found");
        }
        other => panic!("Expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_team_lifecycle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/teams"))
        .and(body_json(json!({"name": "sre", "email": "sre@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Team created",
            "teamId": 8
        })))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/teams/8/members"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("teams/get_team_members.json")),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/teams/8/members/2"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Team Member removed"})),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/teams/8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Team deleted"})))
        .mount(&mock_server)
        .await;

    let client = basic_client(&mock_server, 0);

    let team = NewTeam {
        name: "sre".to_string(),
        email: Some("sre@example.com".to_string()),
        org_id: None,
    };
    let created = client.add_team(&team).await.unwrap();
    assert_eq!(created["id"], 8);

    let members = client.get_team_members("8").await.unwrap();
    assert_eq!(members["id"], "8");
    assert_eq!(members["members"][0]["login"], "jane");

    assert_eq!(
        client.remove_user_from_team("8", "2").await.unwrap(),
        "Team Member removed"
    );
    assert_eq!(client.delete_team("8").await.unwrap(), "Team deleted");
}

//! Integration tests for `grafana-cli fetch-incidents`.

mod common;

use chrono::{Duration, SecondsFormat, Utc};
use common::grafana_cmd_with_url;
use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn rfc3339(ts: chrono::DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

async fn server_with_alerts(alerts: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(alerts))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_fetch_incidents_emits_oldest_first_and_persists_watermark() {
    let newer = Utc::now() - Duration::minutes(5);
    let older = Utc::now() - Duration::hours(1);
    let server = server_with_alerts(json!([
        {"id": 2, "name": "Newer", "newStateDate": rfc3339(newer)},
        {"id": 1, "name": "Older", "newStateDate": rfc3339(older)},
        {"id": 3, "name": "Broken", "newStateDate": "not a date"},
    ]))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("state/last_run.json");

    let output = grafana_cmd_with_url(&server.uri())
        .args(["-o", "json", "fetch-incidents", "--state-path"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let incidents: Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = incidents
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Older", "Newer"]);
    assert_eq!(incidents[0]["type"], "Grafana Alert");
    let raw: Value = serde_json::from_str(incidents[0]["rawJSON"].as_str().unwrap()).unwrap();
    assert_eq!(raw["type"], "Grafana Alert");

    let persisted: Value = serde_json::from_str(&std::fs::read_to_string(&state).unwrap()).unwrap();
    let expected_ms = newer.timestamp() * 1000;
    assert_eq!(persisted["last_fetch"], expected_ms.to_string());
}

#[tokio::test]
async fn test_fetch_incidents_second_cycle_emits_nothing() {
    let occurred = Utc::now() - Duration::minutes(10);
    let server = server_with_alerts(json!([
        {"id": 1, "name": "Once", "newStateDate": rfc3339(occurred)},
    ]))
    .await;

    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("last_run.json");

    for expected in [1, 0] {
        let output = grafana_cmd_with_url(&server.uri())
            .args(["-o", "json", "fetch-incidents", "--state-path"])
            .arg(&state)
            .output()
            .unwrap();
        assert!(output.status.success());
        let incidents: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(incidents.as_array().unwrap().len(), expected);
    }
}

#[tokio::test]
async fn test_fetch_incidents_respects_max_fetch_and_filters() {
    let base = Utc::now() - Duration::hours(2);
    let alerts: Vec<Value> = (0..5)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("alert-{i}"),
                "newStateDate": rfc3339(base + Duration::minutes(i)),
            })
        })
        .collect();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .and(query_param("state", "alerting"))
        .and(query_param("dashboardId", "4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(Value::Array(alerts)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("last_run.json");

    let output = grafana_cmd_with_url(&server.uri())
        .env("GRAFANA_FETCH_STATE", "alerting")
        .env("GRAFANA_FETCH_DASHBOARD_ID", "4")
        .args(["-o", "json", "fetch-incidents", "--max-fetch", "2", "--state-path"])
        .arg(&state)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let incidents: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(incidents[0]["name"], "alert-0");
    assert_eq!(incidents[1]["name"], "alert-1");
    assert_eq!(incidents.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_fetch_incidents_failure_leaves_state_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let state = dir.path().join("last_run.json");
    std::fs::write(&state, r#"{"last_fetch":"1704106800000"}"#).unwrap();

    grafana_cmd_with_url(&server.uri())
        .args(["fetch-incidents", "--state-path"])
        .arg(&state)
        .assert()
        .code(1)
        .stderr(predicates::str::contains("boom"));

    assert_eq!(
        std::fs::read_to_string(&state).unwrap(),
        r#"{"last_fetch":"1704106800000"}"#
    );
}

#[test]
fn test_fetch_incidents_rejects_bad_lookback() {
    grafana_cmd_with_url("http://127.0.0.1:1")
        .args(["fetch-incidents", "--first-fetch", "soon"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("--first-fetch"));
}

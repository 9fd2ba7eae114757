//! Dashboard and annotation API methods for [`GrafanaClient`].

use serde_json::Value;

use crate::client::GrafanaClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DashboardSearchParams, NewAnnotation};
use crate::transport::Transport;

impl<T: Transport> GrafanaClient<T> {
    pub async fn search_dashboards(&self, params: &DashboardSearchParams) -> Result<Value> {
        endpoints::search_dashboards(&self.transport, params).await
    }

    pub async fn create_annotation(&self, annotation: &NewAnnotation) -> Result<Value> {
        endpoints::create_annotation(&self.transport, annotation).await
    }
}

#[cfg(test)]
mod tests {
    use crate::client::GrafanaClient;
    use crate::models::{DashboardSearchParams, NewAnnotation};
    use crate::testing::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_search_dashboards() {
        let transport = MockTransport::new("https://grafana.test/sub").respond(json!([
            {"id": 1, "title": "CPU", "url": "/sub/d/abc/cpu", "type": "dash-db"}
        ]));
        let client = GrafanaClient::new(transport);

        let params = DashboardSearchParams {
            query: Some("cpu".to_string()),
            tags: vec!["prod".to_string(), "infra".to_string()],
            starred: Some(true),
            ..Default::default()
        };
        let results = client.search_dashboards(&params).await.unwrap();
        assert_eq!(results[0]["url"], "https://grafana.test/sub/d/abc/cpu");

        let request = &client.transport().requests()[0];
        assert_eq!(request.path, "api/search");
        assert_eq!(request.query.get_all("tag"), vec!["prod", "infra"]);
        assert_eq!(request.query.get_all("starred"), vec!["true"]);
    }

    #[tokio::test]
    async fn test_create_annotation_drops_message() {
        let transport = MockTransport::new("http://grafana.test")
            .respond(json!({"message": "Annotation added", "id": 9}));
        let client = GrafanaClient::new(transport);

        let annotation = NewAnnotation {
            text: "Deploy".to_string(),
            ..Default::default()
        };
        let created = client.create_annotation(&annotation).await.unwrap();
        assert_eq!(created, json!({"id": 9}));
        assert_eq!(client.transport().requests()[0].path, "api/annotations");
    }
}

//! Notion database query client.

use reqwest::Client;

use tugas_common::config::AppConfig;
use tugas_common::error::AppError;
use tugas_common::types::QueryResponse;

/// Pinned Notion API version header value.
const NOTION_VERSION: &str = "2022-06-28";

/// Client for one configured Notion database.
pub struct NotionClient {
    http: Client,
    base_url: String,
    database_id: String,
    api_key: String,
}

impl NotionClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.notion_api_url.clone(),
            database_id: config.notion_database_id.clone(),
            api_key: config.notion_api_key.clone(),
        }
    }

    /// Query the database with its default filter semantics.
    ///
    /// No body filters and no pagination cursor are sent, so only the first
    /// page of results is considered. Transport failures and non-2xx
    /// responses surface as errors the run treats as "nothing to do".
    pub async fn query_database(&self) -> Result<QueryResponse, AppError> {
        let url = format!("{}/v1/databases/{}/query", self.base_url, self.database_id);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header("Notion-Version", NOTION_VERSION)
            .json(&serde_json::json!({}))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_config(base_url: String) -> AppConfig {
        AppConfig {
            notion_database_id: "db-1".to_string(),
            notion_api_key: "secret-key".to_string(),
            telegram_bot_token: "unused".to_string(),
            sent_ids_file: "unused".to_string(),
            notion_api_url: base_url,
            telegram_api_url: "unused".to_string(),
        }
    }

    #[tokio::test]
    async fn query_sends_bearer_auth_and_version_header() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/databases/db-1/query"))
            .and(header("Authorization", "Bearer secret-key"))
            .and(header("Notion-Version", NOTION_VERSION))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "id": "page-a", "properties": {} },
                    { "id": "page-b" },
                ],
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotionClient::new(&test_config(server.uri()));
        let response = client.query_database().await.unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].id, "page-a");
        // A row without a properties object deserializes to an empty bag
        assert!(response.results[1].properties.is_empty());
    }

    #[tokio::test]
    async fn query_surfaces_http_errors() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/databases/db-1/query"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "object": "error",
                "code": "unauthorized",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = NotionClient::new(&test_config(server.uri()));
        assert!(client.query_database().await.is_err());
    }
}

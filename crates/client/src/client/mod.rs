//! HTTP client for the upstream posts API.

pub mod authors;
pub mod posts;

#[cfg(any(test, feature = "stub"))]
pub mod stub;

use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// HTTP client for the upstream posts API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct BlogClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl BlogClient {
    /// Create a new client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.config.base()
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base(), path)
    }

    /// GET `path` and decode the JSON body.
    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, ?query, "GET upstream");
        let response = self.client.get(&url).query(query).send().await?;
        self.handle_response(response).await
    }

    /// POST `body` as JSON to `path` and decode the JSON reply.
    async fn post_json<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<Value> {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST upstream");
        let response = self.client.post(&url).json(body).send().await?;
        self.handle_response(response).await
    }

    /// Handle error responses.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let url = response.url().to_string();
        if status.is_success() {
            response.json().await.map_err(ClientError::from)
        } else if status.as_u16() == 404 {
            Err(ClientError::NotFound { resource: url })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ClientError::Upstream {
                status: status.as_u16(),
                url,
                message,
            })
        }
    }
}

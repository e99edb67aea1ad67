use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::Transport;
use crate::protocol::ClientError;

const DEFAULT_TIMEOUT_MS: u64 = 30_000;
const DEFAULT_POOL_SIZE: usize = 16;

/// reqwest-backed [`Transport`] addressing a fixed base URL.
pub struct HttpTransport {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::configure(base_url, DEFAULT_TIMEOUT_MS, DEFAULT_POOL_SIZE)
    }

    pub(crate) fn configure(
        base_url: &str,
        timeout_ms: u64,
        pool_size: usize,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .pool_idle_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(pool_size)
            .build()
            .map_err(|e| ClientError::Connection(format!("failed to build HTTP client: {}", e)))?;

        Ok(HttpTransport {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn read_json(response: reqwest::Response) -> Result<Value, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ClientError::Server {
                status: status.as_u16(),
                message,
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::Protocol(format!("failed to read response: {}", e)))?;
        if text.is_empty() {
            return Err(ClientError::Protocol("empty response body".to_string()));
        }
        serde_json::from_str(&text)
            .map_err(|e| ClientError::Protocol(format!("failed to parse response: {}", e)))
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, ClientError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, url))
            .send()
            .await
            .map_err(|e| ClientError::Connection(format!("HTTP request failed: {}", e)))?;
        Self::read_json(response).await
    }

    async fn post(&self, url: &str, body: &Value) -> Result<Value, ClientError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, url))
            .json(body)
            .send()
            .await
            .map_err(|e| ClientError::Connection(format!("HTTP request failed: {}", e)))?;
        Self::read_json(response).await
    }
}

//! HTTP client for the soreness-log API.
//!
//! Configuration comes from [`TrackerConfig`].

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::config::TrackerConfig;
use crate::models::{CreateSorenessLogInput, SorenessLog};
use crate::tracker::SorenessLogSink;

/// HTTP client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: API key required or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// HTTP client for the soreness-log API.
#[derive(Debug, Clone)]
pub struct SorenessClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl SorenessClient {
    /// Create client from a loaded configuration.
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.api_url.clone(), config.api_key.clone())
    }

    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with optional auth header.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Handle a create acknowledgment.
    ///
    /// Every 2xx counts as success. The body is opaque: an empty or
    /// unrecognized body yields an empty [`SorenessLog`].
    async fn handle_created_response(
        &self,
        response: reqwest::Response,
    ) -> Result<SorenessLog, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::error_for(status, response).await);
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(SorenessLog::default());
        }
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            tracing::debug!("Unrecognized acknowledgment ({}): {}", status, e);
            SorenessLog::default()
        }))
    }

    /// Convert an HTTP error status to ClientError.
    async fn error_for(status: StatusCode, response: reqwest::Response) -> ClientError {
        let body = response.text().await.unwrap_or_default();
        match status {
            StatusCode::NOT_FOUND => ClientError::NotFound(body),
            StatusCode::BAD_REQUEST => ClientError::BadRequest(body),
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized,
            _ => ClientError::Server(format!("{}: {}", status, body)),
        }
    }

    /// Create one soreness log row.
    pub async fn create_soreness_log(
        &self,
        input: &CreateSorenessLogInput,
    ) -> Result<SorenessLog, ClientError> {
        tracing::debug!(
            "POST /soreness-logs body_part={} level={}",
            input.body_part,
            input.soreness_1_5
        );
        let response = self
            .request(reqwest::Method::POST, "/soreness-logs")
            .json(input)
            .send()
            .await?;
        self.handle_created_response(response).await
    }
}

#[async_trait]
impl SorenessLogSink for SorenessClient {
    async fn create_log(&self, input: &CreateSorenessLogInput) -> Result<SorenessLog, ClientError> {
        self.create_soreness_log(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = SorenessClient::new("http://localhost:9000/api/v1/", None);
        assert_eq!(client.base_url(), "http://localhost:9000/api/v1");
    }

    #[test]
    fn test_from_config_uses_config_url() {
        let config = TrackerConfig {
            api_url: "http://coach.test/api".to_string(),
            ..TrackerConfig::default()
        };
        assert_eq!(SorenessClient::from_config(&config).base_url(), "http://coach.test/api");
    }
}

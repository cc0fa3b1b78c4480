//! # Token Client SDK
//!
//! A typed Rust client for the link token validation API.

use reqwest::{Client, StatusCode};

use token_types::HealthResponse;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Token validation API client.
pub struct TokenClient {
    base_url: String,
    base_path: String,
    http: Client,
}

impl TokenClient {
    /// Creates a new client targeting the default `/token` mount point.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            base_path: "/token".to_string(),
            http: Client::new(),
        }
    }

    /// Sets the path the validate route is mounted under.
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        let trimmed = base_path.trim_matches('/');
        self.base_path = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    /// Full URL of the validate route.
    pub fn validate_url(&self) -> String {
        format!("{}{}/validate", self.base_url, self.base_path)
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Ok(false);
        }
        let body: HealthResponse = serde_json::from_slice(&resp.bytes().await?)?;
        Ok(body.status == "healthy")
    }

    /// Asks the server whether `token` is valid.
    ///
    /// `Ok(true)` on 200, `Ok(false)` on 401. The server never says why a
    /// token was refused.
    pub async fn validate(&self, token: &str) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(self.validate_url())
            .query(&[("token", token)])
            .send()
            .await?;

        match resp.status() {
            status if status.is_success() => Ok(true),
            StatusCode::UNAUTHORIZED => Ok(false),
            status => {
                let message = resp.text().await.unwrap_or_default();
                Err(ClientError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

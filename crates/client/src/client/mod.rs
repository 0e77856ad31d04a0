//! HTTP client for the blackhole operator API.

pub mod health;
pub mod requests;

use crate::error::{ClientError, Result};

/// Environment variable holding the server base URL.
pub const URL_ENV_VAR: &str = "BLACKHOLE_URL";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Path prefix of the operator endpoints.
const OPERATOR_PREFIX: &str = "/_blackhole";

/// HTTP client for the blackhole operator API.
#[derive(Debug, Clone)]
pub struct BlackholeClient {
    client: reqwest::Client,
    base_url: String,
}

impl BlackholeClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an operator endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, OPERATOR_PREFIX, path)
    }

    /// Decode a JSON body, or turn a non-success status into an error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            let text = response.text().await?;
            serde_json::from_str(&text).map_err(ClientError::from)
        } else {
            Err(server_error(response).await)
        }
    }

    /// Handle responses whose body is ignored.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(server_error(response).await)
        }
    }
}

async fn server_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    ClientError::ServerError { status, message }
}

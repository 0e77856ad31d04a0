//! Health check operations.

use super::BlackholeClient;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Storage health as reported by `/_blackhole/healthz`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub backend: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl BlackholeClient {
    /// Liveness probe. Succeeds when the server answers at all.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response).await
    }

    /// Storage health. A 503 from the server surfaces as `ClientError::ServerError`.
    pub async fn healthz(&self) -> Result<HealthStatus> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_parses_server_body() {
        let body = r#"{"status":"healthy","backend":"postgres","version":"PostgreSQL 16.2"}"#;
        let status: HealthStatus = serde_json::from_str(body).unwrap();

        assert_eq!(status.backend, "postgres");
        assert_eq!(status.version.as_deref(), Some("PostgreSQL 16.2"));
    }

    #[test]
    fn test_health_status_without_version() {
        let status: HealthStatus =
            serde_json::from_str(r#"{"status":"unhealthy","backend":"sqlite"}"#).unwrap();
        assert_eq!(status.version, None);
    }
}

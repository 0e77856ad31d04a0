//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/_blackhole/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/_blackhole/healthz` - Storage round trip (engine version query)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /_blackhole/livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch storage.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /_blackhole/healthz - Storage health.
///
/// Returns 200 with the engine name and version, or 503 when the store
/// cannot answer.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    let backend = state.repo.backend_name();

    match state.repo.server_version().await {
        Ok(version) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "backend": backend,
                "version": version,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(backend, error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "backend": backend,
                })),
            )
                .into_response()
        }
    }
}

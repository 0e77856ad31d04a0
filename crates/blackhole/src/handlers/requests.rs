use axum::{extract::State, Json};

use blackhole_core::request::RequestRecord;

use crate::{handlers::AppError, state::AppState};

/// GET /_blackhole/requests - every captured request, oldest first.
pub async fn list_requests(
    State(state): State<AppState>,
) -> Result<Json<Vec<RequestRecord>>, AppError> {
    let records = state.repo.list_records().await?;
    tracing::debug!(count = records.len(), "Listed captured requests");
    Ok(Json(records))
}

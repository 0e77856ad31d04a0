use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use blackhole_core::storage::{store_error_to_status_code, StoreError};

/// Storage failure surfaced from a handler.
///
/// The detail is logged; the client only sees a generic message.
pub struct AppError(pub StoreError);

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(store_error_to_status_code(&self.0))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(status = %status, error = %self.0, "Storage operation failed");

        let message = if status == StatusCode::SERVICE_UNAVAILABLE {
            "Storage unavailable"
        } else {
            "Error saving or reading requests"
        };
        (status, message).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

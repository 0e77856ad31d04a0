//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `ConnectionFailed` -> 503 (Service Unavailable)
/// - everything else -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use blackhole_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::ConnectionFailed("refused".to_string());
/// assert_eq!(store_error_to_status_code(&error), 503);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::ConnectionFailed(_) => 503,
        StoreError::SchemaProbe(_)
        | StoreError::SchemaCreate(_)
        | StoreError::WriteFailed(_)
        | StoreError::ReadFailed(_)
        | StoreError::Serialization(_)
        | StoreError::InvalidData(_) => 500,
    }
}

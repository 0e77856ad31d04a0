//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `StoreError` from `blackhole_core::storage`.

use blackhole_core::storage::StoreError;

/// SQLSTATE `undefined_table`.
pub const UNDEFINED_TABLE: &str = "42P01";

/// Returns true when `err` says the probed relation does not exist.
///
/// Decided on the SQLSTATE code alone, so it does not depend on the server's
/// message language.
pub fn is_undefined_table(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some(UNDEFINED_TABLE),
        _ => false,
    }
}

/// Maps a sqlx error to a StoreError.
///
/// Transport and pool failures become `ConnectionFailed`, row decoding
/// failures become `InvalidData`, and everything else is wrapped with `wrap`.
pub fn map_sqlx_error(err: sqlx::Error, wrap: fn(String) -> StoreError) -> StoreError {
    match &err {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed => StoreError::ConnectionFailed(err.to_string()),
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_) => StoreError::InvalidData(err.to_string()),
        _ => wrap(err.to_string()),
    }
}

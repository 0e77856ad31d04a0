//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `StoreError` from
//! `blackhole_core::storage`.

use blackhole_core::storage::StoreError;
use rusqlite::ErrorCode;

/// Returns true when `err` says the probed table does not exist.
///
/// SQLite has no dedicated result code for this: it is a plain `SQLITE_ERROR`
/// whose message starts with "no such table". This is the only place the
/// message text is inspected.
pub fn is_missing_table(err: &tokio_rusqlite::Error) -> bool {
    match err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => is_missing_table_rusqlite(rusqlite_err),
        _ => false,
    }
}

fn is_missing_table_rusqlite(err: &rusqlite::Error) -> bool {
    let (code, message) = match err {
        rusqlite::Error::SqliteFailure(sqlite_err, Some(message)) => (sqlite_err.code, message),
        // Prepare errors carrying a byte offset are reported this way on modern SQLite.
        rusqlite::Error::SqlInputError { error, msg, .. } => (error.code, msg),
        _ => return false,
    };
    code == ErrorCode::Unknown && message.starts_with("no such table")
}

/// Maps a tokio_rusqlite error to a StoreError.
///
/// Connection-level failures always become `ConnectionFailed`; everything else
/// is wrapped with `wrap`, which names the operation that failed
/// (e.g. `StoreError::WriteFailed`).
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    wrap: fn(String) -> StoreError,
) -> StoreError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, _))
            if sqlite_err.code == ErrorCode::CannotOpen =>
        {
            StoreError::ConnectionFailed(format!("Cannot open database: {err}"))
        }
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::FromSqlConversionFailure(..)) => {
            StoreError::InvalidData(err.to_string())
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            StoreError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => wrap(err.to_string()),
    }
}

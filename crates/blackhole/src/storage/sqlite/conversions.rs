//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use blackhole_core::request::RequestRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

/// Convert a SQLite row to a RequestRecord.
///
/// Expected columns: id, path, host, method, headers, query, body, captured_at
pub fn row_to_record(row: &Row) -> rusqlite::Result<RequestRecord> {
    let id: String = row.get(0)?;
    let captured_at: String = row.get(7)?;

    Ok(RequestRecord {
        id: parse_uuid(&id)?,
        path: row.get(1)?,
        host: row.get(2)?,
        method: row.get(3)?,
        headers: row.get(4)?,
        query: row.get(5)?,
        body: row.get(6)?,
        captured_at: parse_datetime(&captured_at)?,
    })
}

/// Format a timestamp as fixed-width RFC 3339 text (`2024-06-15T10:30:00.000000Z`).
///
/// The fixed width keeps lexicographic order equal to chronological order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a UUID from string.
fn parse_uuid(s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Parse a datetime from RFC 3339 string.
fn parse_datetime(s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(7, rusqlite::types::Type::Text, Box::new(e))
        })
}

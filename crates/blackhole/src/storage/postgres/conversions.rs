//! PostgreSQL row conversion.

use blackhole_core::request::RequestRecord;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Row shape returned by `SELECT_REQUESTS`.
#[derive(Debug, sqlx::FromRow)]
pub struct RequestRow {
    pub id: Uuid,
    pub path: String,
    pub host: String,
    pub method: String,
    pub headers: String,
    pub query: String,
    pub body: String,
    pub captured_at: DateTime<Utc>,
}

impl From<RequestRow> for RequestRecord {
    fn from(row: RequestRow) -> Self {
        RequestRecord {
            id: row.id,
            path: row.path,
            host: row.host,
            method: row.method,
            headers: row.headers,
            query: row.query,
            body: row.body,
            captured_at: row.captured_at,
        }
    }
}

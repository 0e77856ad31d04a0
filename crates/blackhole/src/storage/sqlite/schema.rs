//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O. Parameters use positional `?N` placeholders.

/// Creates the requests table.
///
/// `captured_at` holds RFC 3339 UTC text with fixed precision, so text order
/// matches time order.
pub const CREATE_REQUESTS: &str = r#"
CREATE TABLE IF NOT EXISTS requests (
    id TEXT PRIMARY KEY,
    path TEXT NOT NULL,
    host TEXT NOT NULL,
    method TEXT NOT NULL,
    headers TEXT NOT NULL,
    query TEXT NOT NULL,
    body TEXT NOT NULL,
    captured_at TEXT NOT NULL
)
"#;

pub const INSERT_REQUEST: &str = r#"
INSERT INTO requests (id, path, host, method, headers, query, body, captured_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
"#;

/// Full-table fetch. Ties on `captured_at` fall back to insertion order.
pub const SELECT_REQUESTS: &str = r#"
SELECT id, path, host, method, headers, query, body, captured_at
FROM requests
ORDER BY captured_at ASC, rowid ASC
"#;

pub const SELECT_VERSION: &str = "SELECT sqlite_version()";

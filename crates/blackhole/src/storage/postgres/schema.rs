//! PostgreSQL schema definitions and SQL query constants.
//!
//! Parameters use ordinal `$N` placeholders.

pub const CREATE_REQUESTS: &str = r#"
CREATE TABLE IF NOT EXISTS requests (
    id UUID PRIMARY KEY,
    path TEXT NOT NULL,
    host TEXT NOT NULL,
    method TEXT NOT NULL,
    headers TEXT NOT NULL,
    query TEXT NOT NULL,
    body TEXT NOT NULL,
    captured_at TIMESTAMPTZ NOT NULL
)
"#;

pub const INSERT_REQUEST: &str = r#"
INSERT INTO requests (id, path, host, method, headers, query, body, captured_at)
VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
"#;

pub const SELECT_REQUESTS: &str = r#"
SELECT id, path, host, method, headers, query, body, captured_at
FROM requests
ORDER BY captured_at ASC, id ASC
"#;

pub const SELECT_VERSION: &str = "SELECT version()";

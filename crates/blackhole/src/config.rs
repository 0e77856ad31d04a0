use std::{env, time::Duration};

/// Storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. Selects the relational engine when set
    /// and non-empty.
    pub pg_url: Option<String>,
    /// Path to SQLite database file (default: "database.db")
    pub sqlite_path: String,
    /// Maximum PostgreSQL pool size (default: 5)
    pub pg_max_connections: u32,
    /// PostgreSQL connect timeout in seconds (default: 10)
    pub pg_connect_timeout_seconds: u64,
    /// PostgreSQL TLS mode. Unset: the connection string's `sslmode`, else "require".
    pub pg_ssl_mode: Option<String>,
}

/// The storage engine chosen for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Sqlite { path: String },
    Postgres { url: String },
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `PGURL` - PostgreSQL connection string (unset or empty: use SQLite)
    /// - `SQLITE_PATH` - SQLite database path (default: "database.db")
    /// - `PG_MAX_CONNECTIONS` - Pool size (default: 5)
    /// - `PG_CONNECT_TIMEOUT_SECONDS` - Connect timeout (default: 10)
    /// - `PG_SSL_MODE` - `disable`, `prefer`, `require`, `verify-ca` or `verify-full`.
    ///   Overrides `sslmode` in `PGURL`; when both are absent "require" is used.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            pg_url: lookup("PGURL").filter(|v| !v.trim().is_empty()),
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "database.db".to_string()),
            pg_max_connections: lookup("PG_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            pg_connect_timeout_seconds: lookup("PG_CONNECT_TIMEOUT_SECONDS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            pg_ssl_mode: lookup("PG_SSL_MODE").filter(|v| !v.trim().is_empty()),
        }
    }

    /// Which engine to open.
    pub fn backend(&self) -> Backend {
        match &self.pg_url {
            Some(url) => Backend::Postgres { url: url.clone() },
            None => Backend::Sqlite {
                path: self.sqlite_path.clone(),
            },
        }
    }

    /// Get the PostgreSQL connect timeout as a Duration.
    pub fn pg_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.pg_connect_timeout_seconds)
    }
}

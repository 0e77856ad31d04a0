//! Storage backend implementations.
//!
//! Concrete implementations of `blackhole_core::storage::RequestRepository`.
//! Both engines are compiled in; [`connect`] picks one at startup from the
//! configuration and the choice holds for the life of the process.

pub mod postgres;
pub mod sqlite;

use std::sync::Arc;

use blackhole_core::storage::{RequestRepository, Result};

use crate::config::{Backend, Config};

pub use postgres::{PostgresOptions, PostgresRepository};
pub use sqlite::SqliteRepository;

/// Opens the configured engine and makes sure the `requests` table exists.
///
/// Returns the single repository handle shared by every request handler.
pub async fn connect(config: &Config) -> Result<Arc<dyn RequestRepository>> {
    let repo: Arc<dyn RequestRepository> = match config.backend() {
        Backend::Sqlite { path } => {
            tracing::info!(path = %path, "Using SQLite storage");
            Arc::new(SqliteRepository::open(&path).await?)
        }
        Backend::Postgres { url } => {
            tracing::info!("Using PostgreSQL storage");
            let mut options = PostgresOptions::new(url);
            options.ssl_mode = config.pg_ssl_mode.clone();
            options.max_connections = config.pg_max_connections;
            options.connect_timeout = config.pg_connect_timeout();
            Arc::new(PostgresRepository::connect(&options).await?)
        }
    };

    let status = repo.initialize().await?;
    tracing::info!(
        backend = repo.backend_name(),
        schema = status.as_str(),
        "Storage initialized"
    );

    Ok(repo)
}

//! SQLite repository implementation.
//!
//! Implements `RequestRepository` from `blackhole_core::storage` on a single
//! local file. `tokio_rusqlite` runs every call on one background thread, so
//! writes are serialized by the connection itself.

use async_trait::async_trait;
use chrono::Utc;
use tokio_rusqlite::Connection;
use uuid::Uuid;

use blackhole_core::request::{CapturedRequest, RequestRecord};
use blackhole_core::storage::{
    schema_check_sql, RequestRepository, Result, SchemaStatus, StoreError,
};

use super::conversions::{format_datetime, row_to_record};
use super::error::{is_missing_table, map_tokio_rusqlite_error};
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based request log.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Opens (or creates) the database file at `path`.
    ///
    /// The schema is not touched; call `initialize` before using the log.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| StoreError::ConnectionFailed(format!("{path}: {e}")))?;

        tracing::debug!(path, "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Opens an in-memory database. Data is lost when the repository is dropped.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self { conn })
    }

    /// Runs the column check, returning the raw engine error on failure.
    async fn check_schema(&self) -> std::result::Result<(), tokio_rusqlite::Error> {
        let sql = schema_check_sql();
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(&sql).map_err(wrap_err)?;
                let mut rows = stmt.query([]).map_err(wrap_err)?;
                rows.next().map_err(wrap_err)?;
                Ok(())
            })
            .await
    }

    async fn create_table(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.execute_batch(schema::CREATE_REQUESTS)
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, StoreError::SchemaCreate))
    }
}

#[async_trait]
impl RequestRepository for SqliteRepository {
    async fn initialize(&self) -> Result<SchemaStatus> {
        match self.check_schema().await {
            Ok(()) => {
                tracing::debug!("SQLite requests table already exists");
                Ok(SchemaStatus::Existing)
            }
            Err(e) if is_missing_table(&e) => {
                tracing::info!("SQLite requests table missing, creating it");
                self.create_table().await?;
                Ok(SchemaStatus::Created)
            }
            Err(e) => Err(map_tokio_rusqlite_error(e, StoreError::SchemaProbe)),
        }
    }

    async fn append_record(&self, request: &CapturedRequest) -> Result<Uuid> {
        let record = RequestRecord::capture(request, Uuid::new_v4(), Utc::now())?;
        let id = record.id;
        let captured_at = format_datetime(&record.captured_at);

        self.conn
            .call(move |conn| {
                conn.execute(
                    schema::INSERT_REQUEST,
                    rusqlite::params![
                        record.id.to_string(),
                        record.path,
                        record.host,
                        record.method,
                        record.headers,
                        record.query,
                        record.body,
                        captured_at
                    ],
                )
                .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, StoreError::WriteFailed))?;

        tracing::debug!(%id, "Stored request in SQLite");
        Ok(id)
    }

    async fn list_records(&self) -> Result<Vec<RequestRecord>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_REQUESTS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_record).map_err(wrap_err)?;

                let mut records = Vec::new();
                for row_result in rows {
                    records.push(row_result.map_err(wrap_err)?);
                }
                Ok(records)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, StoreError::ReadFailed))
    }

    async fn server_version(&self) -> Result<String> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::SELECT_VERSION, [], |row| row.get::<_, String>(0))
                    .map_err(wrap_err)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, StoreError::ReadFailed))
    }

    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}

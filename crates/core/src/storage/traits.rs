use async_trait::async_trait;
use uuid::Uuid;

use crate::request::{CapturedRequest, RequestRecord};

use super::{Result, SchemaStatus};

/// Append-only log of captured requests, implemented once per storage engine.
///
/// A single instance is created at startup and shared by every request
/// handler. `initialize` must complete before any other call.
#[async_trait]
pub trait RequestRepository: Send + Sync {
    /// Ensures the `requests` table exists, creating it when the probe reports it absent.
    ///
    /// Running it against an existing table is a no-op that returns
    /// [`SchemaStatus::Existing`].
    async fn initialize(&self) -> Result<SchemaStatus>;

    /// Stores one request with a fresh id and the store's current time.
    ///
    /// Returns once the engine has acknowledged the write.
    async fn append_record(&self, request: &CapturedRequest) -> Result<Uuid>;

    /// Returns every stored record, oldest capture first.
    async fn list_records(&self) -> Result<Vec<RequestRecord>>;

    /// Version string reported by the engine.
    async fn server_version(&self) -> Result<String>;

    /// Short engine name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}

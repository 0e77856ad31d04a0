use thiserror::Error;

/// Errors that can occur during store operations.
///
/// Every failure surfaces to the direct caller once; no variant is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The engine could not be opened or reached.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    /// The existence probe failed for a reason other than a missing table.
    #[error("Schema probe failed: {0}")]
    SchemaProbe(String),
    /// The table was absent and creating it failed.
    #[error("Schema creation failed: {0}")]
    SchemaCreate(String),
    #[error("Write failed: {0}")]
    WriteFailed(String),
    #[error("Read failed: {0}")]
    ReadFailed(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// A stored row could not be decoded into a record.
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

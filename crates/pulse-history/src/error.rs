//! Error types for the probe history store.
//!
//! Every variant means the storage medium could not be read or written;
//! callers that must stay available (the health recorder) degrade their
//! reported status instead of propagating these.

use thiserror::Error;

/// Result type alias for history store operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors that can occur during history store operations.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("failed to open database: {0}")]
    Open(String),

    #[error("transaction error: {0}")]
    Transaction(String),

    #[error("table error: {0}")]
    Table(String),

    #[error("read error: {0}")]
    Read(String),

    #[error("write error: {0}")]
    Write(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("deserialization error: {0}")]
    Deserialize(String),
}

//! Store error type.

use thiserror::Error;

/// Errors from story-store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] libsql::Error),

    #[error("migration failed: {0}")]
    Migration(String),

    #[error("failed to encode options column: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("query returned no result")]
    NoResult,

    #[error("malformed story row {id}: {reason}")]
    Malformed { id: i64, reason: String },
}

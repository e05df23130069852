//! Storage traits and error types
//!
//! This module defines the persistence capability the pipeline writes
//! through, and the errors a write can produce.

use crate::pipeline::SummaryRecord;
use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store connection lock poisoned")]
    LockPoisoned,

    #[error("Store worker failed: {0}")]
    Worker(String),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Appends finished records to a document store
///
/// Implementations perform exactly one insert per call and never query,
/// update, or deduplicate against existing records. They must be safe to
/// call from many pipeline tasks at once.
#[async_trait]
pub trait Persister: Send + Sync {
    async fn persist(&self, record: &SummaryRecord) -> StoreResult<()>;
}

//! Storage module for persisting digests
//!
//! This module handles all document store operations, including:
//! - SQLite database initialization and schema management
//! - Append-only summary record writes
//! - Batch run history

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteStore;
pub use traits::{Persister, StoreError, StoreResult};

use chrono::{DateTime, Utc};

/// A completed batch run as recorded in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRecord {
    pub id: i64,
    pub started_at: String,
    pub finished_at: String,
    pub config_hash: String,
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
}

/// Values written when a batch run finishes
#[derive(Debug, Clone)]
pub struct NewBatch<'a> {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub config_hash: &'a str,
    pub attempted: u64,
    pub succeeded: u64,
    pub failed: u64,
}

/// Aggregate figures about the store's contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreStatistics {
    /// Total summary records
    pub total_records: u64,

    /// Distinct `pdf_url` values among them
    pub distinct_urls: u64,

    /// Total batch runs recorded
    pub total_batches: u64,
}

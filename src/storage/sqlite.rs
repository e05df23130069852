//! SQLite document store
//!
//! This module provides a SQLite-based implementation of the [`Persister`] trait.

use crate::pipeline::SummaryRecord;
use crate::storage::schema::initialize_schema;
use crate::storage::traits::{Persister, StoreError, StoreResult};
use crate::storage::{BatchRecord, NewBatch, StoreStatistics};
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// SQLite-backed document store
///
/// The connection is opened once before a batch starts and shared by every
/// pipeline task. Cloning the store clones the handle, not the connection.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) the store at `path`
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the SQLite database file
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteStore)` - Successfully opened/created database
    /// * `Err(StoreError)` - Failed to open database
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        initialize_schema(&conn)?;

        Ok(Self::from_connection(conn))
    }

    /// Creates an in-memory store (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        initialize_schema(&conn)?;
        Ok(Self::from_connection(conn))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }

    // ===== Summaries =====

    /// Appends one summary record
    ///
    /// # Returns
    ///
    /// The row ID of the new record
    pub fn insert_summary(&self, record: &SummaryRecord) -> StoreResult<i64> {
        let keywords = serde_json::to_string(record.keywords())?;
        let now = Utc::now().to_rfc3339();

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO summaries (pdf_url, summary, keywords, num_pages, inserted_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.pdf_url(),
                record.summary(),
                keywords,
                record.num_pages() as i64,
                now
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Gets every record stored for a URL, oldest first
    pub fn get_summaries_by_url(&self, url: &str) -> StoreResult<Vec<SummaryRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT pdf_url, summary, keywords, num_pages FROM summaries
             WHERE pdf_url = ?1 ORDER BY id",
        )?;

        let rows = stmt
            .query_map(params![url], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, i64>(3)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(pdf_url, summary, keywords, num_pages)| -> StoreResult<SummaryRecord> {
                let keywords: Vec<String> = serde_json::from_str(&keywords)?;
                Ok(SummaryRecord::new(
                    pdf_url,
                    summary,
                    keywords,
                    num_pages as usize,
                ))
            })
            .collect()
    }

    /// Counts all summary records
    pub fn count_summaries(&self) -> StoreResult<u64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM summaries", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    // ===== Batch History =====

    /// Records a finished batch run
    pub fn record_batch(&self, batch: &NewBatch<'_>) -> StoreResult<i64> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO batches (started_at, finished_at, config_hash, attempted, succeeded, failed)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                batch.started_at.to_rfc3339(),
                batch.finished_at.to_rfc3339(),
                batch.config_hash,
                batch.attempted as i64,
                batch.succeeded as i64,
                batch.failed as i64
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Gets the most recent batch runs, newest first
    pub fn recent_batches(&self, limit: usize) -> StoreResult<Vec<BatchRecord>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT id, started_at, finished_at, config_hash, attempted, succeeded, failed
             FROM batches ORDER BY id DESC LIMIT ?1",
        )?;

        let batches = stmt
            .query_map(params![limit as i64], |row| {
                Ok(BatchRecord {
                    id: row.get(0)?,
                    started_at: row.get(1)?,
                    finished_at: row.get(2)?,
                    config_hash: row.get(3)?,
                    attempted: row.get::<_, i64>(4)? as u64,
                    succeeded: row.get::<_, i64>(5)? as u64,
                    failed: row.get::<_, i64>(6)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(batches)
    }

    // ===== Statistics =====

    /// Gathers aggregate figures about the store
    pub fn statistics(&self) -> StoreResult<StoreStatistics> {
        let conn = self.lock()?;
        let (total_records, distinct_urls): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), COUNT(DISTINCT pdf_url) FROM summaries",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )?;
        let total_batches: i64 =
            conn.query_row("SELECT COUNT(*) FROM batches", [], |row| row.get(0))?;

        Ok(StoreStatistics {
            total_records: total_records as u64,
            distinct_urls: distinct_urls as u64,
            total_batches: total_batches as u64,
        })
    }
}

#[async_trait]
impl Persister for SqliteStore {
    async fn persist(&self, record: &SummaryRecord) -> StoreResult<()> {
        let store = self.clone();
        let record = record.clone();

        let id = tokio::task::spawn_blocking(move || store.insert_summary(&record))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))??;

        tracing::trace!("Inserted summary row {}", id);
        Ok(())
    }
}

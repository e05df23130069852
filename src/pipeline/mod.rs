//! Ingestion pipeline for remote PDF documents
//!
//! This module contains the core batch logic, including:
//! - HTTP fetching of document bytes
//! - PDF text extraction
//! - Bounded-concurrency orchestration with per-document failure isolation

mod extractor;
mod fetcher;
mod orchestrator;
mod record;

pub use extractor::{LopdfExtractor, ParseError, ParsedText, TextExtractor};
pub use fetcher::{build_http_client, FetchError, Fetcher, HttpFetcher};
pub use orchestrator::{BatchReport, Orchestrator, TaskOutcome, DEFAULT_CONCURRENCY};
pub use record::SummaryRecord;

use crate::config::Config;
use crate::storage::{NewBatch, SqliteStore};
use chrono::Utc;
use std::path::Path;
use std::sync::Arc;

/// Runs a complete batch
///
/// This is the main entry point for digesting a URL list. It will:
/// 1. Open the document store
/// 2. Build the HTTP client
/// 3. Run every URL through the pipeline under the configured pool size
/// 4. Record the finished batch in the store's history
///
/// The store connection lives exactly as long as the batch. Once documents
/// have been dispatched the report is always returned; a failed history
/// write is logged and does not discard it.
///
/// # Arguments
///
/// * `config` - The loaded configuration
/// * `config_hash` - Hash of the configuration file, kept with the batch record
/// * `urls` - The documents to process
///
/// # Returns
///
/// * `Ok(BatchReport)` - The batch ran; individual documents may have failed
/// * `Err(DigestError)` - The store or HTTP client could not be set up
pub async fn run_batch(
    config: &Config,
    config_hash: &str,
    urls: Vec<String>,
) -> crate::Result<BatchReport> {
    let store = SqliteStore::open(Path::new(&config.store.database_path))?;
    let fetcher = HttpFetcher::from_config(&config.fetcher)?;

    let orchestrator = Orchestrator::new(Arc::new(fetcher), Arc::new(store.clone()))
        .with_concurrency(config.pipeline.concurrency);

    let started_at = Utc::now();
    let report = orchestrator.run(urls).await;

    let batch = NewBatch {
        started_at,
        finished_at: Utc::now(),
        config_hash,
        attempted: report.attempted as u64,
        succeeded: report.succeeded as u64,
        failed: report.failed() as u64,
    };
    match store.record_batch(&batch) {
        Ok(batch_id) => tracing::debug!("Recorded batch {}", batch_id),
        Err(e) => tracing::error!("Failed to record batch history: {}", e),
    }

    Ok(report)
}

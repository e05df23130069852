//! Statistics generation from the document store
//!
//! This module provides functionality for extracting and displaying
//! figures about stored digests and past batch runs.

use crate::storage::{BatchRecord, SqliteStore, StoreResult, StoreStatistics};

/// Number of past batches shown by [`print_statistics`]
const RECENT_BATCHES: usize = 5;

/// Store statistics summary
#[derive(Debug, Clone)]
pub struct DigestStatistics {
    /// Record and batch totals
    pub totals: StoreStatistics,

    /// Most recent batch runs, newest first
    pub recent_batches: Vec<BatchRecord>,
}

impl DigestStatistics {
    /// Records that share a URL with an earlier record
    pub fn duplicate_records(&self) -> u64 {
        self.totals
            .total_records
            .saturating_sub(self.totals.distinct_urls)
    }
}

/// Loads statistics from the store
pub fn load_statistics(store: &SqliteStore) -> StoreResult<DigestStatistics> {
    Ok(DigestStatistics {
        totals: store.statistics()?,
        recent_batches: store.recent_batches(RECENT_BATCHES)?,
    })
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &DigestStatistics) {
    println!("=== Digest Statistics ===\n");

    println!("Overview:");
    println!("  Total records: {}", stats.totals.total_records);
    println!("  Distinct URLs: {}", stats.totals.distinct_urls);
    println!("  Duplicate records: {}", stats.duplicate_records());
    println!("  Batches run: {}", stats.totals.total_batches);
    println!();

    if !stats.recent_batches.is_empty() {
        println!("Recent Batches:");
        for batch in &stats.recent_batches {
            let success_rate = if batch.attempted > 0 {
                (batch.succeeded as f64 / batch.attempted as f64) * 100.0
            } else {
                0.0
            };
            println!(
                "  #{} {}: {} / {} succeeded ({:.1}%), {} failed",
                batch.id,
                batch.started_at,
                batch.succeeded,
                batch.attempted,
                success_rate,
                batch.failed
            );
        }
    }
}

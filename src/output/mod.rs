//! Output module for human-readable reports
//!
//! This module handles:
//! - The process-level summary printed after a batch completes
//! - Statistics about the document store's contents

mod report;
pub mod stats;

pub use report::{format_report, print_report};
pub use stats::{load_statistics, print_statistics, DigestStatistics};

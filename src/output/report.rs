//! Batch completion summary

use crate::pipeline::BatchReport;
use std::fmt::Write;

/// Renders the completion summary for a finished batch
///
/// Only aggregate counts and timing appear here; the individual failures go
/// to the failure log.
pub fn format_report(report: &BatchReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Batch Complete ===\n");
    let _ = writeln!(
        out,
        "Total time taken: {:.2} seconds",
        report.elapsed.as_secs_f64()
    );
    let _ = writeln!(out, "Total PDFs attempted: {}", report.attempted);
    let _ = writeln!(out, "Succeeded: {}", report.succeeded);
    let _ = writeln!(out, "Failed: {}", report.failed());

    for (stage, count) in &report.failed_by_stage {
        let _ = writeln!(out, "  {}: {}", stage, count);
    }

    out
}

/// Prints the completion summary to stdout
pub fn print_report(report: &BatchReport) {
    print!("{}", format_report(report));
}

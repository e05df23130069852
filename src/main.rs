//! pdf-digest main entry point
//!
//! This is the command-line interface for the pdf-digest batch summarizer.

use anyhow::Context;
use clap::Parser;
use pdf_digest::config::{load_config_with_hash, validate, Config};
use pdf_digest::input::load_urls;
use pdf_digest::output::{load_statistics, print_report, print_statistics};
use pdf_digest::pipeline::run_batch;
use pdf_digest::storage::SqliteStore;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// pdf-digest: summarize and index batches of remote PDFs
///
/// pdf-digest downloads every PDF in a dataset, extracts its text, derives a
/// length-scaled summary and keyword list, and appends one record per
/// document to a SQLite store.
#[derive(Parser, Debug)]
#[command(name = "pdf-digest")]
#[command(version)]
#[command(about = "Batch PDF summarizer", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the configured worker pool size
    #[arg(long, value_name = "N")]
    concurrency: Option<usize>,

    /// Validate config and list the URLs that would be processed
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics from the document store and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;

    if let Some(concurrency) = cli.concurrency {
        config.pipeline.concurrency = concurrency;
        validate(&config).context("Invalid --concurrency")?;
    }

    setup_logging(cli.verbose, cli.quiet, config.logging.failure_log_path())?;
    tracing::info!(
        "Configuration loaded from {} (hash: {})",
        cli.config.display(),
        config_hash
    );

    if cli.dry_run {
        handle_dry_run(&config)
    } else if cli.stats {
        handle_stats(&config)
    } else {
        handle_batch(&config, &config_hash).await
    }
}

/// Sets up the console subscriber and, when configured, the failure log sink
fn setup_logging(verbose: u8, quiet: bool, failure_log: Option<&str>) -> anyhow::Result<()> {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pdf_digest=info,warn"),
            1 => EnvFilter::new("pdf_digest=debug,info"),
            2 => EnvFilter::new("pdf_digest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let console = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_filter(filter);

    let failures = match failure_log {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open failure log {}", path))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_target(false)
                    .with_filter(LevelFilter::ERROR),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console)
        .with(failures)
        .init();

    Ok(())
}

/// Handles the --dry-run mode: validates config and shows what would be processed
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    println!("=== pdf-digest Dry Run ===\n");

    println!("Input:");
    println!("  Path: {}", config.input.path);
    println!("  Format: {:?}", config.input.format);

    println!("\nPipeline:");
    println!("  Concurrency: {}", config.pipeline.concurrency);

    println!("\nFetcher:");
    println!("  User agent: {}", config.fetcher.user_agent);
    println!("  Timeout: {}s", config.fetcher.timeout_secs);
    println!("  Connect timeout: {}s", config.fetcher.connect_timeout_secs);

    println!("\nStore:");
    println!("  Database: {}", config.store.database_path);

    if let Some(path) = config.logging.failure_log_path() {
        println!("\nFailure log: {}", path);
    }

    let urls = load_urls(&config.input)?;
    println!("\nURLs ({}):", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    println!("\n✓ Configuration is valid");
    println!("✓ Would process {} documents", urls.len());

    Ok(())
}

/// Handles the --stats mode: shows statistics from the document store
fn handle_stats(config: &Config) -> anyhow::Result<()> {
    println!("Database: {}\n", config.store.database_path);

    let store = SqliteStore::open(Path::new(&config.store.database_path))?;
    let stats = load_statistics(&store)?;
    print_statistics(&stats);

    Ok(())
}

/// Handles the main batch operation
async fn handle_batch(config: &Config, config_hash: &str) -> anyhow::Result<()> {
    let urls = load_urls(&config.input)?;

    let report = run_batch(config, config_hash, urls)
        .await
        .context("Batch could not be started")?;

    print_report(&report);
    Ok(())
}

//! pdf-digest: a batch PDF summarizer
//!
//! This crate fetches remotely hosted PDF documents, extracts their text,
//! derives a page-count-scaled summary and keyword list for each one and
//! appends one record per document to a SQLite document store.

pub mod config;
pub mod derive;
pub mod input;
pub mod output;
pub mod pipeline;
pub mod state;
pub mod storage;

use thiserror::Error;

/// Main error type for pdf-digest operations
///
/// Per-document failures never surface here; they are captured as
/// [`pipeline::TaskOutcome`] values by the orchestrator.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Storage error: {0}")]
    Store(#[from] storage::StoreError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while loading the URL batch
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported dataset shape: {0}")]
    Shape(String),
}

/// Result type alias for pdf-digest operations
pub type Result<T> = std::result::Result<T, DigestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{BatchReport, Orchestrator, SummaryRecord, TaskOutcome};
pub use state::{FailureStage, TaskState};

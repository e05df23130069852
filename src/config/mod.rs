//! Configuration module for pdf-digest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//!
//! # Example
//!
//! ```no_run
//! use pdf_digest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("digest.toml")).unwrap();
//! println!("Worker pool size: {}", config.pipeline.concurrency);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetcherConfig, InputConfig, InputFormat, LoggingConfig, PipelineConfig, StoreConfig,
    DEFAULT_FAILURE_LOG,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{validate, MAX_CONCURRENCY};

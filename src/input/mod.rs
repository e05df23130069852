//! Input sources for the URL batch
//!
//! The orchestrator only ever sees a `Vec<String>`. Where those URLs come
//! from is decided here, behind the [`UrlSource`] trait.

mod dataset;

pub use dataset::{JsonDatasetSource, LineFileSource};

use crate::config::{InputConfig, InputFormat};
use crate::InputError;
use std::path::PathBuf;

/// Produces the list of document URLs for one batch
pub trait UrlSource {
    fn load(&self) -> Result<Vec<String>, InputError>;
}

/// Builds the source described by the input configuration
pub fn source_for(config: &InputConfig) -> Box<dyn UrlSource> {
    let path = PathBuf::from(&config.path);
    match config.format {
        InputFormat::Json => Box::new(JsonDatasetSource::new(path)),
        InputFormat::Lines => Box::new(LineFileSource::new(path)),
    }
}

/// Loads the URL batch described by the input configuration
pub fn load_urls(config: &InputConfig) -> Result<Vec<String>, InputError> {
    let urls = source_for(config).load()?;
    tracing::info!("Loaded {} URLs from {}", urls.len(), config.path);
    Ok(urls)
}

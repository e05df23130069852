//! File-backed URL sources

use super::UrlSource;
use crate::InputError;
use serde_json::Value;
use std::path::{Path, PathBuf};

fn read_file(path: &Path) -> Result<String, InputError> {
    std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// A JSON dataset file
///
/// Either an object whose values are URLs (keys are ignored, values are
/// taken in document order) or a plain array of URL strings.
#[derive(Debug, Clone)]
pub struct JsonDatasetSource {
    path: PathBuf,
}

impl JsonDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Extracts URLs from an already parsed dataset
    pub fn urls_from_value(value: Value) -> Result<Vec<String>, InputError> {
        let entries: Vec<(String, Value)> = match value {
            Value::Object(map) => map.into_iter().collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (format!("[{}]", i), v))
                .collect(),
            other => {
                return Err(InputError::Shape(format!(
                    "expected an object or array at the top level, got {}",
                    json_kind(&other)
                )))
            }
        };

        entries
            .into_iter()
            .map(|(key, value)| match value {
                Value::String(url) => Ok(url),
                other => Err(InputError::Shape(format!(
                    "entry {} must be a string, got {}",
                    key,
                    json_kind(&other)
                ))),
            })
            .collect()
    }
}

impl UrlSource for JsonDatasetSource {
    fn load(&self) -> Result<Vec<String>, InputError> {
        let content = read_file(&self.path)?;
        let value: Value = serde_json::from_str(&content)?;
        Self::urls_from_value(value)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A plain text file with one URL per line
///
/// Surrounding whitespace is trimmed; blank lines and lines starting with
/// `#` are skipped.
#[derive(Debug, Clone)]
pub struct LineFileSource {
    path: PathBuf,
}

impl LineFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UrlSource for LineFileSource {
    fn load(&self) -> Result<Vec<String>, InputError> {
        let content = read_file(&self.path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}

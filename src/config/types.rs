use serde::Deserialize;

/// Main configuration structure for pdf-digest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the URL batch comes from
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Path to the dataset file
    pub path: String,

    /// How the dataset file is laid out
    #[serde(default)]
    pub format: InputFormat,
}

/// Layout of the input dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// JSON object whose values are URLs, or a JSON array of URLs
    #[default]
    Json,

    /// One URL per line
    Lines,
}

/// Worker pool configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Number of documents processed concurrently
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            concurrency: default_concurrency(),
        }
    }
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// TCP connect timeout (seconds)
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

/// Default file receiving failure log entries
pub const DEFAULT_FAILURE_LOG: &str = "pdf_processing.log";

/// Log sink configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// File receiving one entry per failed document; empty disables it
    #[serde(rename = "failure-log", default = "default_failure_log")]
    pub failure_log: String,
}

impl LoggingConfig {
    /// The failure log path, or `None` when the sink is disabled
    pub fn failure_log_path(&self) -> Option<&str> {
        let path = self.failure_log.trim();
        (!path.is_empty()).then_some(path)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            failure_log: default_failure_log(),
        }
    }
}

fn default_concurrency() -> usize {
    5
}

fn default_user_agent() -> String {
    format!("pdf-digest/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_failure_log() -> String {
    DEFAULT_FAILURE_LOG.to_string()
}

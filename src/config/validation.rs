use crate::config::types::{Config, FetcherConfig, InputConfig, PipelineConfig, StoreConfig};
use crate::{ConfigError, ConfigResult};

/// Upper bound on the worker pool size
pub const MAX_CONCURRENCY: usize = 100;

/// Validates the entire configuration
pub fn validate(config: &Config) -> ConfigResult<()> {
    validate_input_config(&config.input)?;
    validate_pipeline_config(&config.pipeline)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_store_config(&config.store)?;
    Ok(())
}

/// Validates input configuration
fn validate_input_config(config: &InputConfig) -> ConfigResult<()> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "input path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates worker pool configuration
fn validate_pipeline_config(config: &PipelineConfig) -> ConfigResult<()> {
    if config.concurrency < 1 || config.concurrency > MAX_CONCURRENCY {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and {}, got {}",
            MAX_CONCURRENCY, config.concurrency
        )));
    }
    Ok(())
}

/// Validates fetcher configuration
fn validate_fetcher_config(config: &FetcherConfig) -> ConfigResult<()> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    // Header values must be visible ASCII
    if !config
        .user_agent
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control())
    {
        return Err(ConfigError::Validation(format!(
            "user-agent must contain only printable ASCII, got '{}'",
            config.user_agent
        )));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// Validates store configuration
fn validate_store_config(config: &StoreConfig) -> ConfigResult<()> {
    if config.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "database-path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

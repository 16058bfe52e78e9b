//! Logging configuration and tracing subscriber setup

use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use super::error::{ConfigError, ConfigValidationError};

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info,resume_manager=debug`
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl LoggingConfig {
    /// Validate the filter directive
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.level.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLogDirective);
        }
        self.env_filter().map(|_| ())
    }

    fn env_filter(&self) -> Result<EnvFilter, ConfigValidationError> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| ConfigValidationError::InvalidLogDirective(e.to_string()))
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_level() -> String {
    "info,resume_manager=debug".to_string()
}

/// Install the global tracing subscriber.
///
/// Only the first call in a process succeeds; later calls return
/// `ConfigError::TracingInit`.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), ConfigError> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| ConfigError::TracingInit(e.to_string()))
}

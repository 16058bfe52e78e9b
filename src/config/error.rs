//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ConfigValidationError),

    #[error("Tracing initialization failed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("Limit '{0}' must be greater than zero")]
    ZeroLimit(&'static str),

    #[error("Log filter directive must not be empty")]
    EmptyLogDirective,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogDirective(String),
}

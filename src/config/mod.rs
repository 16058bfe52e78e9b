//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RESUME_MANAGER` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use resume_manager::config::{init_tracing, AppConfig};
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! init_tracing(&config.logging).expect("Failed to install tracing");
//!
//! println!("Users may hold {} resumes", config.limits.max_resumes_per_user);
//! ```

mod error;
mod limits;
mod logging;

pub use error::{ConfigError, ConfigValidationError};
pub use limits::LimitsConfig;
pub use logging::{init_tracing, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "RESUME_MANAGER";

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Per-user and per-resume caps
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `RESUME_MANAGER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RESUME_MANAGER__LIMITS__MAX_CAREERS=30` -> `limits.max_careers = 30`
    /// - `RESUME_MANAGER__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a TOML file, overridden by the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or if a
    /// value cannot be parsed into its expected type.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ConfigValidationError` for a zero cap or an empty or
    /// unparsable log directive.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.limits.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::io::Write;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("RESUME_MANAGER__LIMITS__MAX_CAREERS");
        env::remove_var("RESUME_MANAGER__LIMITS__MAX_RESUMES_PER_USER");
        env::remove_var("RESUME_MANAGER__LOGGING__JSON");
        env::remove_var("RESUME_MANAGER__LOGGING__LEVEL");
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();

        assert_eq!(config.limits, LimitsConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RESUME_MANAGER__LIMITS__MAX_CAREERS", "3");
        env::set_var("RESUME_MANAGER__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.limits.max_careers, 3);
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_from_file_with_environment_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[limits]\nmax_resumes_per_user = 2\nmax_careers = 5\n\n[logging]\nlevel = \"warn\""
        )
        .unwrap();

        env::set_var("RESUME_MANAGER__LIMITS__MAX_CAREERS", "7");
        let result = AppConfig::load_from_file(file.path());
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.limits.max_resumes_per_user, 2);
        assert_eq!(config.limits.max_careers, 7);
        assert_eq!(config.limits.max_projects, 50);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_zero_cap() {
        let config = AppConfig {
            limits: LimitsConfig {
                max_resumes_per_user: 0,
                ..LimitsConfig::default()
            },
            ..AppConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::ZeroLimit("max_resumes_per_user"))
        );
    }
}

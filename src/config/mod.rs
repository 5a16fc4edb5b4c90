//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AHP_ENGINE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use ahp_engine::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Strict reciprocity: {}", config.engine.strict_reciprocity);
//! ```

mod engine;
mod error;
mod logging;
mod persistence;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use persistence::PersistenceConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Tracing output configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Matrix validation policy
    #[serde(default)]
    pub engine: EngineConfig,

    /// Whether computed results are recorded
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AHP_ENGINE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `AHP_ENGINE__LOGGING__JSON=true` -> `logging.json = true`
    /// - `AHP_ENGINE__ENGINE__RECIPROCITY_TOLERANCE=0.05` -> `engine.reciprocity_tolerance = 0.05`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("AHP_ENGINE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.engine.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ahp::Reciprocity;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("AHP_ENGINE__LOGGING__LEVEL");
        env::remove_var("AHP_ENGINE__LOGGING__JSON");
        env::remove_var("AHP_ENGINE__ENGINE__STRICT_RECIPROCITY");
        env::remove_var("AHP_ENGINE__ENGINE__RECIPROCITY_TOLERANCE");
        env::remove_var("AHP_ENGINE__PERSISTENCE__RECORD_CALCULATIONS");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info,ahp_engine=debug");
        assert!(!config.engine.strict_reciprocity);
        assert!(config.persistence.record_calculations);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__LOGGING__JSON", "true");
        env::set_var("AHP_ENGINE__ENGINE__STRICT_RECIPROCITY", "true");
        env::set_var("AHP_ENGINE__ENGINE__RECIPROCITY_TOLERANCE", "0.05");
        env::set_var("AHP_ENGINE__PERSISTENCE__RECORD_CALCULATIONS", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.logging.json);
        assert_eq!(
            config.engine.reciprocity(),
            Reciprocity::Strict { tolerance: 0.05 }
        );
        assert!(!config.persistence.record_calculations);
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__ENGINE__RECIPROCITY_TOLERANCE", "-0.5");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidTolerance(-0.5))
        );
    }

    #[test]
    fn test_unparseable_value_is_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("AHP_ENGINE__ENGINE__STRICT_RECIPROCITY", "sometimes");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}

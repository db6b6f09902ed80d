//! Configuration management for the validator.
//!
//! This module loads the default phone region and the log level from
//! environment variables, optionally seeded from a `.env` file.

use crate::domain::{RegionCode, DEFAULT_REGION};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Environment variable selecting the default phone region.
pub const DEFAULT_REGION_VAR: &str = "VALIDATOR_DEFAULT_REGION";

/// Environment variable holding the fallback log filter.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration for the validator.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region used for phone numbers without an explicit region (default: "IN")
    pub default_region: RegionCode,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `VALIDATOR_DEFAULT_REGION`: ISO 3166-1 alpha-2 region (default: "IN")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not.
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(ConfigError::DotenvError(e.to_string())),
        }

        let default_region = Self::parse_env_region(DEFAULT_REGION_VAR)?;
        let log_level = env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            default_region,
            log_level,
        })
    }

    /// Parse an environment variable as a region code, defaulting to "IN".
    fn parse_env_region(var_name: &str) -> ConfigResult<RegionCode> {
        match env::var(var_name) {
            Ok(val) => RegionCode::new(val.trim()).map_err(|e| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Ok(RegionCode::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_region: RegionCode::default(),
            log_level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }

        fn unset(&mut self, key: &str) {
            env::remove_var(key);
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_region.as_str(), DEFAULT_REGION);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults() {
        let mut guard = EnvGuard::new();
        guard.unset(DEFAULT_REGION_VAR);
        guard.unset(LOG_LEVEL_VAR);

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_region.as_str(), "IN");
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set(DEFAULT_REGION_VAR, "US");
        guard.set(LOG_LEVEL_VAR, "debug");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_region.as_str(), "US");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_region_whitespace_trimmed() {
        let mut guard = EnvGuard::new();
        guard.set(DEFAULT_REGION_VAR, " GB ");

        let config = Config::from_env().unwrap();
        assert_eq!(config.default_region.as_str(), "GB");
    }

    #[test]
    #[serial]
    fn test_config_invalid_region() {
        let mut guard = EnvGuard::new();
        guard.set(DEFAULT_REGION_VAR, "us");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, DEFAULT_REGION_VAR);
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_region() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_REGION", "AU");

        let result = Config::parse_env_region("TEST_REGION");
        assert_eq!(result.unwrap().as_str(), "AU");

        let result = Config::parse_env_region("NONEXISTENT_REGION");
        assert_eq!(result.unwrap().as_str(), "IN");
    }
}

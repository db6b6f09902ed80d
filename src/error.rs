//! Error types for the validator's configuration layer.
//!
//! Validation itself never fails with an error at the facade; see
//! [`crate::domain::ValidationError`] for the value-object rejection reasons.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConfigError::InvalidValue {
            var: "VALIDATOR_DEFAULT_REGION".to_string(),
            reason: "Unknown region code: XX".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for VALIDATOR_DEFAULT_REGION: Unknown region code: XX"
        );

        let err = ConfigError::DotenvError("line 3".to_string());
        assert_eq!(err.to_string(), "Failed to load .env file: line 3");
    }
}

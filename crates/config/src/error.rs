//! Error types for configuration loading.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable holds a value that cannot be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The base URL is missing or malformed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Conflicting authentication settings were supplied.
    #[error("Ambiguous authentication: {0}")]
    AmbiguousAuth(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::InvalidValue {
            var: "ES_TIMEOUT_SECS".to_string(),
            message: "must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ES_TIMEOUT_SECS: must be a number"
        );
    }
}

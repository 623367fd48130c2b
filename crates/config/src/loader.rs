//! Environment-driven configuration loading.
//!
//! Responsibilities:
//! - Read and parse `ES_*` environment variables into a [`Config`].
//! - Load `.env` files via dotenvy before reading the environment.
//! - Validate the base URL and authentication combination.
//!
//! Does NOT handle:
//! - Secret storage beyond process environment.
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Exactly one authentication strategy may be configured; supplying both
//!   basic credentials and an API key is an error.
//! - Invalid numeric or boolean values return `ConfigError::InvalidValue`.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::constants::MAX_TIMEOUT_SECS;
use crate::error::ConfigError;
use crate::types::{AuthStrategy, Config};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Loader for building a [`Config`] from the process environment.
///
/// # Recognized variables
///
/// - `ES_URL` - base URL of a cluster node
/// - `ES_USERNAME` / `ES_PASSWORD` - basic authentication
/// - `ES_API_KEY_ID` / `ES_API_KEY` - API key authentication
/// - `ES_BEARER_TOKEN` - bearer token authentication
/// - `ES_TIMEOUT_SECS` - request timeout in seconds
/// - `ES_SKIP_VERIFY` - skip TLS certificate verification (true/false)
#[derive(Debug, Default)]
pub struct ConfigLoader {
    skip_dotenv: bool,
}

impl ConfigLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Do not read `.env` files (useful in tests).
    pub fn skip_dotenv(mut self) -> Self {
        self.skip_dotenv = true;
        self
    }

    /// Load configuration from the environment.
    pub fn load(self) -> Result<Config, ConfigError> {
        if !self.skip_dotenv {
            // Missing .env files are fine; the environment may be set directly.
            if let Err(e) = dotenvy::dotenv() {
                if !e.not_found() {
                    tracing::warn!("Failed to read .env file: {}", e);
                }
            }
        }

        let mut config = Config::default();

        if let Some(base_url) = env_var_or_none("ES_URL") {
            Url::parse(&base_url).map_err(|e| ConfigError::InvalidBaseUrl(e.to_string()))?;
            config.connection.base_url = base_url;
        }

        if let Some(skip) = env_var_or_none("ES_SKIP_VERIFY") {
            config.connection.skip_verify =
                skip.parse().map_err(|_| ConfigError::InvalidValue {
                    var: "ES_SKIP_VERIFY".to_string(),
                    message: "must be true or false".to_string(),
                })?;
        }

        if let Some(timeout) = env_var_or_none("ES_TIMEOUT_SECS") {
            let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                var: "ES_TIMEOUT_SECS".to_string(),
                message: "must be a number".to_string(),
            })?;
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: "ES_TIMEOUT_SECS".to_string(),
                    message: format!("must be between 1 and {} (got {})", MAX_TIMEOUT_SECS, secs),
                });
            }
            config.connection.timeout = Duration::from_secs(secs);
        }

        config.auth = Self::resolve_auth()?;

        Ok(config)
    }

    /// Resolve the authentication strategy from the environment.
    fn resolve_auth() -> Result<AuthStrategy, ConfigError> {
        let username = env_var_or_none("ES_USERNAME");
        let password = env_var_or_none("ES_PASSWORD");
        let api_key_id = env_var_or_none("ES_API_KEY_ID");
        let api_key = env_var_or_none("ES_API_KEY");
        let bearer = env_var_or_none("ES_BEARER_TOKEN");

        let basic_set = username.is_some() || password.is_some();
        let api_key_set = api_key_id.is_some() || api_key.is_some();

        let configured = [basic_set, api_key_set, bearer.is_some()]
            .iter()
            .filter(|set| **set)
            .count();
        if configured > 1 {
            return Err(ConfigError::AmbiguousAuth(
                "set only one of basic credentials, API key, or bearer token".to_string(),
            ));
        }

        if let Some(token) = bearer {
            return Ok(AuthStrategy::Bearer {
                token: SecretString::new(token.into()),
            });
        }

        if api_key_set {
            let id = api_key_id.ok_or_else(|| ConfigError::InvalidValue {
                var: "ES_API_KEY_ID".to_string(),
                message: "required when ES_API_KEY is set".to_string(),
            })?;
            let key = api_key.ok_or_else(|| ConfigError::InvalidValue {
                var: "ES_API_KEY".to_string(),
                message: "required when ES_API_KEY_ID is set".to_string(),
            })?;
            return Ok(AuthStrategy::ApiKey {
                id,
                key: SecretString::new(key.into()),
            });
        }

        if basic_set {
            let username = username.ok_or_else(|| ConfigError::InvalidValue {
                var: "ES_USERNAME".to_string(),
                message: "required when ES_PASSWORD is set".to_string(),
            })?;
            let password = password.ok_or_else(|| ConfigError::InvalidValue {
                var: "ES_PASSWORD".to_string(),
                message: "required when ES_USERNAME is set".to_string(),
            })?;
            return Ok(AuthStrategy::Basic {
                username,
                password: SecretString::new(password.into()),
            });
        }

        Ok(AuthStrategy::None)
    }
}

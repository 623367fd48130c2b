//! Configuration types for the Elasticsearch indices client.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeout).
//! - Define authentication strategies (basic, API key, bearer token).
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `Config::default()` provides development defaults (localhost:9200, no auth).

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Strategy for authenticating with the cluster.
#[derive(Debug, Clone, Default)]
pub enum AuthStrategy {
    /// No authentication (security disabled or handled by a proxy).
    #[default]
    None,
    /// HTTP basic authentication.
    Basic {
        username: String,
        password: SecretString,
    },
    /// Elasticsearch API key (sent as `Authorization: ApiKey base64(id:key)`).
    ApiKey { id: String, key: SecretString },
    /// Bearer token authentication.
    Bearer { token: SecretString },
}

/// Connection configuration for the cluster.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of a cluster node (e.g., https://localhost:9200)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Complete configuration combining connection and authentication settings.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthStrategy,
}

impl Config {
    /// Create a config with basic authentication.
    pub fn with_basic_auth(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthStrategy::Basic { username, password },
        }
    }

    /// Create a config with API key authentication.
    pub fn with_api_key(base_url: String, id: String, key: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthStrategy::ApiKey { id, key },
        }
    }

    /// Create an unauthenticated config for the given URL.
    pub fn with_url(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthStrategy::None,
        }
    }
}

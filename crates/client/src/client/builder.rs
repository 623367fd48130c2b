//! Client builder for constructing [`ElasticClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`ElasticClient`] methods)
//! - Credential encoding on requests (handled by `auth.rs`)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::Credentials;
use crate::client::ElasticClient;
use crate::error::{ClientError, Result};
use elastic_indices_config::{
    constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_TIMEOUT_SECS},
    Config,
};

/// Builder for creating a new [`ElasticClient`].
///
/// All configuration options have sensible defaults except for `base_url`,
/// which is required. Omitting credentials produces an anonymous client,
/// suitable for clusters without security enabled.
///
/// # Example
///
/// ```rust,ignore
/// use elastic_indices_client::{Credentials, ElasticClient};
/// use secrecy::SecretString;
/// use std::time::Duration;
///
/// let client = ElasticClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .credentials(Credentials::Bearer {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
pub struct ElasticClientBuilder {
    base_url: Option<String>,
    credentials: Credentials,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for ElasticClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: Credentials::None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ElasticClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of a cluster node.
    ///
    /// This should include the protocol and port, e.g., `https://localhost:9200`.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the credentials attached to every request.
    ///
    /// See [`Credentials`] for available options. Default is anonymous.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this in development or testing environments. Disabling TLS
    /// verification makes the connection vulnerable to man-in-the-middle attacks.
    ///
    /// # Note
    /// This only affects HTTPS connections. For HTTP URLs, a warning is logged
    /// but no error occurs.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create a client builder from configuration.
    ///
    /// Centralizes the conversion from config crate types to client crate
    /// types so every consumer constructs clients the same way.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use elastic_indices_client::ElasticClient;
    /// use elastic_indices_config::ConfigLoader;
    ///
    /// let config = ConfigLoader::new().load()?;
    /// let client = ElasticClient::builder()
    ///     .from_config(&config)
    ///     .build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Credentials::from(&config.auth);
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// This prevents double slashes when concatenating with endpoint paths.
    ///
    /// # Examples
    ///
    /// - `"https://localhost:9200/"` -> `"https://localhost:9200"`
    /// - `"https://localhost:9200"` -> `"https://localhost:9200"`
    /// - `"https://example.com:9200//"` -> `"https://example.com:9200"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`ElasticClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::Http`] if the HTTP client fails to build.
    pub fn build(self) -> Result<ElasticClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            let is_https = base_url.starts_with("https://");
            if is_https {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                // skip_verify only affects TLS certificate verification.
                // It has no effect on HTTP connections since there is no TLS layer.
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(ElasticClient {
            http,
            base_url,
            credentials: self.credentials,
        })
    }
}

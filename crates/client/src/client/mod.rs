//! Main Elasticsearch index-administration client and API methods.
//!
//! This module provides the primary [`ElasticClient`] for administering
//! indices over the Elasticsearch REST API. Credentials are attached to
//! every request; there is no session state.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `lifecycle`: Create, delete, open, close, exists, get
//! - `mappings`: Put and get mappings, field mappings
//! - `aliases`: Alias actions, retrieval, existence
//! - `settings`: Get and update index settings
//! - `maintenance`: Refresh, flush, force-merge, cache clearing
//! - `resize`: Shrink, split, rollover
//! - `templates`: Index template management
//! - `query_tools`: Query validation and text analysis
//! - `freeze`: Freeze and unfreeze
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Credential encoding (handled by [`crate::auth::Credentials`])
//!
//! # Invariants
//! - Every API method issues exactly one HTTP request.
//! - Errors from the cluster surface as [`crate::error::ClientError::Api`];
//!   no method retries on its own.

pub mod builder;

// API method submodules
mod aliases;
mod freeze;
mod lifecycle;
mod maintenance;
mod mappings;
mod query_tools;
mod resize;
mod settings;
mod templates;

use crate::auth::Credentials;

/// Elasticsearch index-administration client.
///
/// # Creating a Client
///
/// Use [`ElasticClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use elastic_indices_client::{Credentials, ElasticClient};
/// use secrecy::SecretString;
///
/// let client = ElasticClient::builder()
///     .base_url("https://localhost:9200".to_string())
///     .credentials(Credentials::Basic {
///         username: "elastic".to_string(),
///         password: SecretString::new("changeme".to_string().into()),
///     })
///     .build()?;
/// ```
///
/// # Authentication
///
/// The client supports anonymous access, HTTP basic authentication,
/// Elasticsearch API keys, and bearer tokens. See [`Credentials`].
#[derive(Debug)]
pub struct ElasticClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
}

impl ElasticClient {
    /// Create a new client builder.
    ///
    /// This is the entry point for constructing an [`ElasticClient`].
    pub fn builder() -> builder::ElasticClientBuilder {
        builder::ElasticClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check whether the client sends credentials with its requests.
    pub fn is_anonymous(&self) -> bool {
        self.credentials.is_anonymous()
    }
}

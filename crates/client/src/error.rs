//! Error types for the Elasticsearch indices client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: connection, timeout, TLS, or body IO problem.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the cluster.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// A 2xx response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// A request could not be turned into a valid URL, either at client
    /// construction or because a request named no target indices.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is a transport-level failure.
    pub fn is_transport_error(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Check if this error is a parse failure on a successful response.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::InvalidResponse(_))
    }

    /// The HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

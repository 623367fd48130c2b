//! Centralized constants for the elastic-indices workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Elasticsearch HTTP port.
pub const DEFAULT_ES_PORT: u16 = 9200;

/// Default base URL used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9200";

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

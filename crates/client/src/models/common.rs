//! Common types shared across index-administration API models.
//!
//! This module contains acknowledgement responses, shard outcome summaries,
//! error bodies, and request knobs reused by multiple operation families.
//! It does NOT contain operation-specific models.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Boolean-bearing response confirming a cluster-state change was accepted.
#[derive(Debug, Deserialize, Clone)]
pub struct AcknowledgedResponse {
    pub acknowledged: bool,
}

/// Acknowledgement that also reports whether the requisite number of shard
/// copies started before the request timeout.
#[derive(Debug, Deserialize, Clone)]
pub struct ShardsAcknowledgedResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
}

/// Per-shard outcome summary returned by broadcast operations
/// (refresh, flush, force-merge, clear-cache, validate-query).
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShardStatistics {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
    #[serde(default)]
    pub failures: Vec<ShardFailure>,
}

/// A failure on a single shard within a broadcast operation.
#[derive(Debug, Deserialize, Clone)]
pub struct ShardFailure {
    #[serde(default)]
    pub shard: Option<u32>,
    #[serde(default)]
    pub index: Option<String>,
    /// Structured failure cause as reported by the cluster.
    #[serde(default)]
    pub reason: Option<Value>,
}

/// Error body returned by the cluster on non-2xx responses.
#[derive(Debug, Deserialize, Clone)]
pub struct ErrorBody {
    pub error: ErrorCause,
    #[serde(default)]
    pub status: Option<u16>,
}

/// The `error` object of a cluster error body.
#[derive(Debug, Deserialize, Clone)]
pub struct ErrorCause {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

impl ErrorBody {
    /// Render a compact one-line message, e.g.
    /// `index_not_found_exception: no such index [missing]`.
    pub fn summary(&self) -> String {
        match (&self.error.kind, &self.error.reason) {
            (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
            (Some(kind), None) => kind.clone(),
            (None, Some(reason)) => reason.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

/// Wildcard expansion behavior for index name patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpandWildcards {
    Open,
    Closed,
    All,
    None,
}

impl ExpandWildcards {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::All => "all",
            Self::None => "none",
        }
    }
}

impl fmt::Display for ExpandWildcards {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How multi-index requests treat missing or closed indices.
#[derive(Debug, Clone, Default)]
pub struct IndicesOptions {
    /// Whether unavailable concrete indices are ignored rather than erroring.
    pub ignore_unavailable: Option<bool>,
    /// Whether wildcard expressions resolving to no indices are allowed.
    pub allow_no_indices: Option<bool>,
    /// Which index states wildcard expressions expand to.
    pub expand_wildcards: Option<ExpandWildcards>,
}

impl IndicesOptions {
    /// Append these options to a query parameter list.
    pub(crate) fn append_query(&self, params: &mut Vec<(String, String)>) {
        if let Some(v) = self.ignore_unavailable {
            params.push(("ignore_unavailable".to_string(), v.to_string()));
        }
        if let Some(v) = self.allow_no_indices {
            params.push(("allow_no_indices".to_string(), v.to_string()));
        }
        if let Some(v) = self.expand_wildcards {
            params.push(("expand_wildcards".to_string(), v.as_str().to_string()));
        }
    }
}

/// Number of shard copies to wait for before an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveShardCount {
    /// Wait for all shard copies.
    All,
    /// Wait for the given number of copies.
    Count(u32),
}

impl ActiveShardCount {
    pub(crate) fn as_param(&self) -> String {
        match self {
            Self::All => "all".to_string(),
            Self::Count(n) => n.to_string(),
        }
    }
}

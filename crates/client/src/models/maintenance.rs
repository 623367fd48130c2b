//! Shard maintenance models: refresh, flush, synced flush, force merge,
//! clear cache.

use serde::Deserialize;
use std::collections::HashMap;

use crate::models::common::{IndicesOptions, ShardStatistics};

/// Request to make recent operations visible to search.
#[derive(Debug, Clone, Default)]
pub struct RefreshRequest {
    /// Indices to refresh; empty means all indices.
    pub indices: Vec<String>,
    pub options: IndicesOptions,
}

impl RefreshRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Per-shard outcome of a refresh.
#[derive(Debug, Deserialize, Clone)]
pub struct RefreshResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStatistics,
}

/// Request to flush the transaction log of one or more indices.
#[derive(Debug, Clone, Default)]
pub struct FlushRequest {
    pub indices: Vec<String>,
    /// Force a flush even when no changes need committing.
    pub force: Option<bool>,
    /// Block until a running flush finishes rather than erroring.
    pub wait_if_ongoing: Option<bool>,
    pub options: IndicesOptions,
}

impl FlushRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Per-shard outcome of a flush.
#[derive(Debug, Deserialize, Clone)]
pub struct FlushResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStatistics,
}

/// Request for a synced flush (writes a sync id marker to each shard).
#[derive(Debug, Clone, Default)]
pub struct SyncedFlushRequest {
    pub indices: Vec<String>,
    pub options: IndicesOptions,
}

impl SyncedFlushRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// One shard copy that failed to sync-flush.
#[derive(Debug, Deserialize, Clone)]
pub struct SyncedFlushFailure {
    #[serde(default)]
    pub shard: Option<u32>,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Synced-flush totals for one index.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexSyncedFlush {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
    #[serde(default)]
    pub failures: Vec<SyncedFlushFailure>,
}

/// Global shard totals plus per-index synced-flush results.
#[derive(Debug, Deserialize, Clone)]
pub struct SyncedFlushResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStatistics,
    #[serde(flatten)]
    pub indices: HashMap<String, IndexSyncedFlush>,
}

/// Request to merge index segments down.
#[derive(Debug, Clone, Default)]
pub struct ForceMergeRequest {
    pub indices: Vec<String>,
    /// Merge down to at most this many segments per shard.
    pub max_num_segments: Option<u32>,
    /// Only expunge segments containing deletes.
    pub only_expunge_deletes: Option<bool>,
    /// Flush after the merge.
    pub flush: Option<bool>,
    pub options: IndicesOptions,
}

impl ForceMergeRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Per-shard outcome of a force merge.
#[derive(Debug, Deserialize, Clone)]
pub struct ForceMergeResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStatistics,
}

/// Request to clear index-level caches.
#[derive(Debug, Clone, Default)]
pub struct ClearCacheRequest {
    pub indices: Vec<String>,
    /// Clear the query cache.
    pub query: Option<bool>,
    /// Clear the fielddata cache.
    pub fielddata: Option<bool>,
    /// Clear the request cache.
    pub request: Option<bool>,
    /// Restrict fielddata clearing to these fields.
    pub fields: Vec<String>,
    pub options: IndicesOptions,
}

impl ClearCacheRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Per-shard outcome of a cache clear.
#[derive(Debug, Deserialize, Clone)]
pub struct ClearCacheResponse {
    #[serde(rename = "_shards")]
    pub shards: ShardStatistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_refresh_response() {
        let json = r#"{"_shards": {"total": 10, "successful": 10, "failed": 0}}"#;
        let resp: RefreshResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.shards.total, 10);
        assert_eq!(resp.shards.failed, 0);
    }

    #[test]
    fn test_deserialize_synced_flush_response() {
        let json = r#"{
            "_shards": {"total": 4, "successful": 3, "failed": 1},
            "logs": {
                "total": 4,
                "successful": 3,
                "failed": 1,
                "failures": [{"shard": 1, "reason": "pending operations"}]
            }
        }"#;
        let resp: SyncedFlushResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.shards.failed, 1);
        let index = &resp.indices["logs"];
        assert_eq!(index.failures.len(), 1);
        assert_eq!(index.failures[0].shard, Some(1));
        assert_eq!(index.failures[0].reason.as_deref(), Some("pending operations"));
    }
}

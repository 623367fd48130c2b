//! Shard maintenance API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Refreshing and flushing indices
//! - Synced flush, force-merge, and cache clearing
//!
//! # What this module does NOT handle:
//! - Low-level maintenance endpoint HTTP calls (in [`crate::endpoints::maintenance`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    ClearCacheRequest, ClearCacheResponse, FlushRequest, FlushResponse, ForceMergeRequest,
    ForceMergeResponse, RefreshRequest, RefreshResponse, SyncedFlushRequest, SyncedFlushResponse,
};

impl ElasticClient {
    /// Make recent writes to one or more indices visible to search.
    pub async fn refresh(&self, request: &RefreshRequest) -> Result<RefreshResponse> {
        endpoints::refresh(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Flush the transaction log of one or more indices to disk.
    pub async fn flush(&self, request: &FlushRequest) -> Result<FlushResponse> {
        endpoints::flush(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Perform a synced flush, writing sync-ids for faster recovery.
    pub async fn flush_synced(&self, request: &SyncedFlushRequest) -> Result<SyncedFlushResponse> {
        endpoints::flush_synced(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Merge the segments of one or more indices.
    pub async fn force_merge(&self, request: &ForceMergeRequest) -> Result<ForceMergeResponse> {
        endpoints::force_merge(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Clear query, fielddata, or request caches.
    pub async fn clear_cache(&self, request: &ClearCacheRequest) -> Result<ClearCacheResponse> {
        endpoints::clear_cache(&self.http, &self.base_url, &self.credentials, request).await
    }
}

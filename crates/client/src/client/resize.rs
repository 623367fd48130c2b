//! Resize and rollover API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Shrinking an index into fewer primary shards
//! - Splitting an index into more primary shards
//! - Rolling an alias over to a fresh index
//!
//! # What this module does NOT handle:
//! - Low-level resize endpoint HTTP calls (in [`crate::endpoints::resize`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ResizeRequest, ResizeResponse, RolloverRequest, RolloverResponse};

impl ElasticClient {
    /// Shrink an index into a new index with fewer primary shards.
    pub async fn shrink(&self, request: &ResizeRequest) -> Result<ResizeResponse> {
        endpoints::shrink(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Split an index into a new index with more primary shards.
    pub async fn split(&self, request: &ResizeRequest) -> Result<ResizeResponse> {
        endpoints::split(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Roll an alias over to a new index when its conditions are met.
    pub async fn rollover(&self, request: &RolloverRequest) -> Result<RolloverResponse> {
        endpoints::rollover(&self.http, &self.base_url, &self.credentials, request).await
    }
}

//! Freeze API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Freezing indices into a read-only, memory-light state
//! - Unfreezing them back into normal operation
//!
//! # What this module does NOT handle:
//! - Low-level freeze endpoint HTTP calls (in [`crate::endpoints::freeze`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{FreezeIndexRequest, ShardsAcknowledgedResponse, UnfreezeIndexRequest};

impl ElasticClient {
    /// Freeze one or more indices.
    pub async fn freeze_index(
        &self,
        request: &FreezeIndexRequest,
    ) -> Result<ShardsAcknowledgedResponse> {
        endpoints::freeze_index(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Unfreeze one or more frozen indices.
    pub async fn unfreeze_index(
        &self,
        request: &UnfreezeIndexRequest,
    ) -> Result<ShardsAcknowledgedResponse> {
        endpoints::unfreeze_index(&self.http, &self.base_url, &self.credentials, request).await
    }
}

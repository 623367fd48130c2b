//! Settings API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Retrieving index settings
//! - Updating dynamic index settings
//!
//! # What this module does NOT handle:
//! - Low-level settings endpoint HTTP calls (in [`crate::endpoints::settings`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetSettingsRequest, GetSettingsResponse, UpdateSettingsRequest,
};

impl ElasticClient {
    /// Retrieve the settings of one or more indices.
    pub async fn get_settings(&self, request: &GetSettingsRequest) -> Result<GetSettingsResponse> {
        endpoints::get_settings(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Update dynamic settings on one or more indices.
    pub async fn put_settings(
        &self,
        request: &UpdateSettingsRequest,
    ) -> Result<AcknowledgedResponse> {
        endpoints::update_settings(&self.http, &self.base_url, &self.credentials, request).await
    }
}

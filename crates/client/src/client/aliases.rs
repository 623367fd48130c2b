//! Alias API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Applying alias actions atomically
//! - Retrieving aliases and checking their existence
//!
//! # What this module does NOT handle:
//! - Low-level alias endpoint HTTP calls (in [`crate::endpoints::aliases`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetAliasesRequest, GetAliasesResponse, UpdateAliasesRequest,
};

impl ElasticClient {
    /// Apply a set of alias add/remove actions as a single atomic change.
    pub async fn update_aliases(
        &self,
        request: &UpdateAliasesRequest,
    ) -> Result<AcknowledgedResponse> {
        endpoints::update_aliases(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Retrieve aliases, optionally filtered by index and alias name.
    pub async fn get_alias(&self, request: &GetAliasesRequest) -> Result<GetAliasesResponse> {
        endpoints::get_alias(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Check whether one or more aliases exist.
    pub async fn alias_exists(&self, request: &GetAliasesRequest) -> Result<bool> {
        endpoints::alias_exists(&self.http, &self.base_url, &self.credentials, request).await
    }
}

//! Mapping API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Updating index mappings
//! - Retrieving index and field mappings
//!
//! # What this module does NOT handle:
//! - Low-level mapping endpoint HTTP calls (in [`crate::endpoints::mappings`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetFieldMappingsRequest, GetFieldMappingsResponse, GetMappingsRequest,
    GetMappingsResponse, PutMappingRequest,
};

impl ElasticClient {
    /// Add fields to or update the mapping of one or more indices.
    pub async fn put_mapping(&self, request: &PutMappingRequest) -> Result<AcknowledgedResponse> {
        endpoints::put_mapping(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Retrieve the mappings of one or more indices.
    pub async fn get_mapping(&self, request: &GetMappingsRequest) -> Result<GetMappingsResponse> {
        endpoints::get_mappings(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Retrieve the mappings of specific fields.
    pub async fn get_field_mapping(
        &self,
        request: &GetFieldMappingsRequest,
    ) -> Result<GetFieldMappingsResponse> {
        endpoints::get_field_mappings(&self.http, &self.base_url, &self.credentials, request).await
    }
}

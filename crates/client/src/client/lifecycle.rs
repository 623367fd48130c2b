//! Index lifecycle API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Creating and deleting indices
//! - Opening and closing indices
//! - Index existence checks and full index retrieval
//!
//! # What this module does NOT handle:
//! - Low-level lifecycle endpoint HTTP calls (in [`crate::endpoints::lifecycle`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, CloseIndexRequest, CreateIndexRequest, CreateIndexResponse,
    DeleteIndexRequest, GetIndexRequest, GetIndexResponse, OpenIndexRequest, OpenIndexResponse,
};

impl ElasticClient {
    /// Create an index with optional settings, mappings, and aliases.
    pub async fn create_index(&self, request: &CreateIndexRequest) -> Result<CreateIndexResponse> {
        endpoints::create_index(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Delete one or more indices.
    pub async fn delete_index(&self, request: &DeleteIndexRequest) -> Result<AcknowledgedResponse> {
        endpoints::delete_index(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Open one or more closed indices.
    pub async fn open_index(&self, request: &OpenIndexRequest) -> Result<OpenIndexResponse> {
        endpoints::open_index(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Close one or more indices.
    pub async fn close_index(&self, request: &CloseIndexRequest) -> Result<AcknowledgedResponse> {
        endpoints::close_index(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Check whether all the given indices exist.
    pub async fn index_exists(&self, request: &GetIndexRequest) -> Result<bool> {
        endpoints::index_exists(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Retrieve aliases, mappings, and settings for one or more indices.
    pub async fn get_index(&self, request: &GetIndexRequest) -> Result<GetIndexResponse> {
        endpoints::get_index(&self.http, &self.base_url, &self.credentials, request).await
    }
}

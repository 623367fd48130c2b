//! Index template API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Creating, retrieving, and deleting index templates
//! - Template existence checks
//!
//! # What this module does NOT handle:
//! - Low-level template endpoint HTTP calls (in [`crate::endpoints::templates`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, DeleteTemplateRequest, GetTemplatesRequest, GetTemplatesResponse,
    PutTemplateRequest, TemplatesExistRequest,
};

impl ElasticClient {
    /// Create or update an index template.
    pub async fn put_template(&self, request: &PutTemplateRequest) -> Result<AcknowledgedResponse> {
        endpoints::put_template(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Retrieve index templates by name or pattern.
    pub async fn get_templates(
        &self,
        request: &GetTemplatesRequest,
    ) -> Result<GetTemplatesResponse> {
        endpoints::get_templates(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Check whether an index template exists.
    pub async fn template_exists(&self, request: &TemplatesExistRequest) -> Result<bool> {
        endpoints::template_exists(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Delete an index template.
    pub async fn delete_template(
        &self,
        request: &DeleteTemplateRequest,
    ) -> Result<AcknowledgedResponse> {
        endpoints::delete_template(&self.http, &self.base_url, &self.credentials, request).await
    }
}

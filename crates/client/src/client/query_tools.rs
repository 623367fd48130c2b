//! Query tooling API methods for [`ElasticClient`].
//!
//! # What this module handles:
//! - Validating queries without executing them
//! - Running text through analyzers
//!
//! # What this module does NOT handle:
//! - Low-level query tooling endpoint HTTP calls (in [`crate::endpoints::query_tools`])

use crate::client::ElasticClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ValidateQueryRequest, ValidateQueryResponse,
};

impl ElasticClient {
    /// Validate a query against one or more indices without executing it.
    pub async fn validate_query(
        &self,
        request: &ValidateQueryRequest,
    ) -> Result<ValidateQueryResponse> {
        endpoints::validate_query(&self.http, &self.base_url, &self.credentials, request).await
    }

    /// Run text through an analyzer and return the produced tokens.
    pub async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse> {
        endpoints::analyze(&self.http, &self.base_url, &self.credentials, request).await
    }
}

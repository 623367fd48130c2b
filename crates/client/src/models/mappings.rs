//! Mapping models: put mapping, get mappings, get field mappings.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::models::common::IndicesOptions;

/// Request to add fields to or update the mapping of existing indices.
#[derive(Debug, Clone, Default)]
pub struct PutMappingRequest {
    pub indices: Vec<String>,
    /// The mapping document, e.g. `{"properties": {"message": {"type": "text"}}}`.
    pub source: Value,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub options: IndicesOptions,
}

impl PutMappingRequest {
    pub fn new(indices: Vec<String>, source: Value) -> Self {
        Self {
            indices,
            source,
            ..Self::default()
        }
    }
}

/// Request to retrieve index mappings.
#[derive(Debug, Clone, Default)]
pub struct GetMappingsRequest {
    pub indices: Vec<String>,
    pub options: IndicesOptions,
}

impl GetMappingsRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// The mapping document of one index.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexMappings {
    #[serde(default)]
    pub mappings: Value,
}

/// Response mapping each concrete index to its mapping document.
#[derive(Debug, Deserialize, Clone)]
pub struct GetMappingsResponse {
    #[serde(flatten)]
    pub indices: HashMap<String, IndexMappings>,
}

/// Request to retrieve the mappings of specific fields.
#[derive(Debug, Clone, Default)]
pub struct GetFieldMappingsRequest {
    pub indices: Vec<String>,
    /// Field names or wildcard patterns (required).
    pub fields: Vec<String>,
    /// Include default mapping values in the response.
    pub include_defaults: bool,
    pub options: IndicesOptions,
}

impl GetFieldMappingsRequest {
    pub fn new(indices: Vec<String>, fields: Vec<String>) -> Self {
        Self {
            indices,
            fields,
            ..Self::default()
        }
    }
}

/// Mapping of a single field as stored in the index metadata.
#[derive(Debug, Deserialize, Clone)]
pub struct FieldMappingMetadata {
    pub full_name: String,
    /// The field's mapping definition keyed by its leaf name.
    pub mapping: Value,
}

/// Field mappings of one index.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexFieldMappings {
    #[serde(default)]
    pub mappings: HashMap<String, FieldMappingMetadata>,
}

/// Response mapping each concrete index to its per-field mappings.
#[derive(Debug, Deserialize, Clone)]
pub struct GetFieldMappingsResponse {
    #[serde(flatten)]
    pub indices: HashMap<String, IndexFieldMappings>,
}

//! Index lifecycle models: create, delete, open, close, get, exists.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::models::aliases::AliasMetadata;
use crate::models::common::{ActiveShardCount, IndicesOptions};

/// Request to create a new index.
#[derive(Debug, Clone, Default)]
pub struct CreateIndexRequest {
    /// The name of the index to create (required).
    pub index: String,
    /// Index settings document, e.g. `{"number_of_shards": 3}`.
    pub settings: Option<Value>,
    /// Mapping document for the index.
    pub mappings: Option<Value>,
    /// Aliases to attach on creation, e.g. `{"logs": {}}`.
    pub aliases: Option<Value>,
    /// How long to wait for the cluster-state update.
    pub timeout: Option<Duration>,
    /// How long to wait for a master node.
    pub master_timeout: Option<Duration>,
    /// Shard copies that must be started before returning.
    pub wait_for_active_shards: Option<ActiveShardCount>,
}

impl CreateIndexRequest {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            ..Self::default()
        }
    }

    /// Assemble the request body, or `None` when no body parts are set.
    pub(crate) fn body(&self) -> Option<Value> {
        let mut body = Map::new();
        if let Some(settings) = &self.settings {
            body.insert("settings".to_string(), settings.clone());
        }
        if let Some(mappings) = &self.mappings {
            body.insert("mappings".to_string(), mappings.clone());
        }
        if let Some(aliases) = &self.aliases {
            body.insert("aliases".to_string(), aliases.clone());
        }
        if body.is_empty() {
            None
        } else {
            Some(Value::Object(body))
        }
    }
}

/// Response to an index creation.
#[derive(Debug, Deserialize, Clone)]
pub struct CreateIndexResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
    /// The concrete index name that was created.
    pub index: String,
}

/// Request to delete one or more indices.
#[derive(Debug, Clone, Default)]
pub struct DeleteIndexRequest {
    pub indices: Vec<String>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub options: IndicesOptions,
}

impl DeleteIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Request to open one or more closed indices.
#[derive(Debug, Clone, Default)]
pub struct OpenIndexRequest {
    pub indices: Vec<String>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub wait_for_active_shards: Option<ActiveShardCount>,
    pub options: IndicesOptions,
}

impl OpenIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Response to opening an index.
#[derive(Debug, Deserialize, Clone)]
pub struct OpenIndexResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
}

/// Request to close one or more indices.
#[derive(Debug, Clone, Default)]
pub struct CloseIndexRequest {
    pub indices: Vec<String>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub options: IndicesOptions,
}

impl CloseIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Request to retrieve index metadata, also used for existence checks.
#[derive(Debug, Clone, Default)]
pub struct GetIndexRequest {
    pub indices: Vec<String>,
    /// Include default setting values in the response.
    pub include_defaults: bool,
    /// Read from the local cluster state rather than the master.
    pub local: bool,
    pub options: IndicesOptions,
}

impl GetIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Full metadata of one index: aliases, mappings, settings.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexState {
    #[serde(default)]
    pub aliases: HashMap<String, AliasMetadata>,
    #[serde(default)]
    pub mappings: Value,
    #[serde(default)]
    pub settings: Value,
}

/// Response mapping each concrete index to its metadata.
#[derive(Debug, Deserialize, Clone)]
pub struct GetIndexResponse {
    #[serde(flatten)]
    pub indices: HashMap<String, IndexState>,
}

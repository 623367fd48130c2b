//! Settings models: get and update index settings.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::models::common::IndicesOptions;

/// Request to retrieve index settings.
#[derive(Debug, Clone, Default)]
pub struct GetSettingsRequest {
    /// Indices to read settings from; empty means all indices.
    pub indices: Vec<String>,
    /// Setting names or wildcard patterns to filter by; empty means all.
    pub names: Vec<String>,
    /// Include default setting values in the response.
    pub include_defaults: bool,
    pub options: IndicesOptions,
}

impl GetSettingsRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// The settings of one index, with defaults when requested.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexSettings {
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub defaults: Option<Value>,
}

/// Response mapping each concrete index to its settings.
#[derive(Debug, Deserialize, Clone)]
pub struct GetSettingsResponse {
    #[serde(flatten)]
    pub indices: HashMap<String, IndexSettings>,
}

/// Request to update dynamic index settings.
#[derive(Debug, Clone, Default)]
pub struct UpdateSettingsRequest {
    /// Indices to update; empty means all indices.
    pub indices: Vec<String>,
    /// The settings document, e.g. `{"index": {"number_of_replicas": 2}}`.
    pub settings: Value,
    /// Do not overwrite settings that already have an explicit value.
    pub preserve_existing: bool,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub options: IndicesOptions,
}

impl UpdateSettingsRequest {
    pub fn new(indices: Vec<String>, settings: Value) -> Self {
        Self {
            indices,
            settings,
            ..Self::default()
        }
    }
}

//! Alias models: atomic alias updates, alias retrieval and existence.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;

use crate::models::common::IndicesOptions;

/// One action within an atomic alias update.
///
/// Serializes to the wire form expected by the alias-update endpoint:
/// `{"add": {...}}`, `{"remove": {...}}` or `{"remove_index": {...}}`.
#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "snake_case")]
pub enum AliasAction {
    /// Point an alias at an index.
    Add {
        index: String,
        alias: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        filter: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        index_routing: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        search_routing: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        is_write_index: Option<bool>,
    },
    /// Remove an alias from an index.
    Remove { index: String, alias: String },
    /// Delete the index itself, like a delete-index request.
    RemoveIndex { index: String },
}

impl AliasAction {
    /// Convenience constructor for a plain add action.
    pub fn add(index: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Add {
            index: index.into(),
            alias: alias.into(),
            filter: None,
            index_routing: None,
            search_routing: None,
            is_write_index: None,
        }
    }

    /// Convenience constructor for a remove action.
    pub fn remove(index: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Remove {
            index: index.into(),
            alias: alias.into(),
        }
    }
}

/// Request to apply a set of alias actions atomically.
#[derive(Debug, Clone, Default)]
pub struct UpdateAliasesRequest {
    pub actions: Vec<AliasAction>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
}

impl UpdateAliasesRequest {
    pub fn new(actions: Vec<AliasAction>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }
}

/// Request to retrieve aliases, also used for existence checks.
#[derive(Debug, Clone, Default)]
pub struct GetAliasesRequest {
    /// Indices to restrict the lookup to; empty means all indices.
    pub indices: Vec<String>,
    /// Alias names or wildcard patterns; empty means all aliases.
    pub aliases: Vec<String>,
    pub options: IndicesOptions,
}

impl GetAliasesRequest {
    pub fn new(aliases: Vec<String>) -> Self {
        Self {
            aliases,
            ..Self::default()
        }
    }
}

/// Metadata attached to a single alias.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AliasMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_routing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_routing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_write_index: Option<bool>,
}

/// The aliases of one index.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexAliases {
    #[serde(default)]
    pub aliases: HashMap<String, AliasMetadata>,
}

/// Response mapping each concrete index to its aliases.
#[derive(Debug, Deserialize, Clone)]
pub struct GetAliasesResponse {
    #[serde(flatten)]
    pub indices: HashMap<String, IndexAliases>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_add_action() {
        let action = AliasAction::add("logs-000001", "logs");
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(
            value,
            json!({"add": {"index": "logs-000001", "alias": "logs"}})
        );
    }

    #[test]
    fn test_serialize_add_action_with_write_index() {
        let action = AliasAction::Add {
            index: "logs-000002".to_string(),
            alias: "logs".to_string(),
            filter: Some(json!({"term": {"level": "error"}})),
            index_routing: None,
            search_routing: None,
            is_write_index: Some(true),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value["add"]["is_write_index"], true);
        assert_eq!(value["add"]["filter"]["term"]["level"], "error");
    }

    #[test]
    fn test_serialize_remove_index_action() {
        let action = AliasAction::RemoveIndex {
            index: "stale".to_string(),
        };
        let value = serde_json::to_value(&action).unwrap();
        assert_eq!(value, json!({"remove_index": {"index": "stale"}}));
    }

    #[test]
    fn test_deserialize_get_aliases_response() {
        let json = r#"{
            "logs-000001": {
                "aliases": {
                    "logs": {"is_write_index": true}
                }
            }
        }"#;
        let resp: GetAliasesResponse = serde_json::from_str(json).unwrap();
        let meta = &resp.indices["logs-000001"].aliases["logs"];
        assert_eq!(meta.is_write_index, Some(true));
    }
}

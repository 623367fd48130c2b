//! Resize and rollover models: shrink, split, rollover.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::models::common::ActiveShardCount;

/// Request to shrink or split a source index into a target index.
#[derive(Debug, Clone, Default)]
pub struct ResizeRequest {
    /// The existing source index (required).
    pub source: String,
    /// The target index to create (required).
    pub target: String,
    /// Settings for the target index, e.g. `{"index.number_of_shards": 2}`.
    pub settings: Option<Value>,
    /// Aliases to attach to the target index.
    pub aliases: Option<Value>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub wait_for_active_shards: Option<ActiveShardCount>,
}

impl ResizeRequest {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            ..Self::default()
        }
    }

    pub(crate) fn body(&self) -> Option<Value> {
        let mut body = Map::new();
        if let Some(settings) = &self.settings {
            body.insert("settings".to_string(), settings.clone());
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

/// Response to a shrink or split.
#[derive(Debug, Deserialize, Clone)]
pub struct ResizeResponse {
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
    /// The target index that was created.
    pub index: String,
}

/// Request to roll an alias over to a new index when conditions are met.
#[derive(Debug, Clone, Default)]
pub struct RolloverRequest {
    /// The alias to roll over (required); must point at a single write index.
    pub alias: String,
    /// Explicit name for the new index; derived from the old name when unset.
    pub new_index: Option<String>,
    /// Roll over when the index is older than this, e.g. `"7d"`.
    pub max_age: Option<String>,
    /// Roll over when the index holds at least this many documents.
    pub max_docs: Option<u64>,
    /// Roll over when the index grows past this size, e.g. `"50gb"`.
    pub max_size: Option<String>,
    /// Evaluate conditions without performing the rollover.
    pub dry_run: bool,
    /// Settings for the new index.
    pub settings: Option<Value>,
    /// Mappings for the new index.
    pub mappings: Option<Value>,
    /// Aliases for the new index.
    pub aliases: Option<Value>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub wait_for_active_shards: Option<ActiveShardCount>,
}

impl RolloverRequest {
    pub fn new(alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            ..Self::default()
        }
    }

    pub(crate) fn body(&self) -> Option<Value> {
        let mut conditions = Map::new();
        if let Some(max_age) = &self.max_age {
            conditions.insert("max_age".to_string(), Value::String(max_age.clone()));
        }
        if let Some(max_docs) = self.max_docs {
            conditions.insert("max_docs".to_string(), Value::from(max_docs));
        }
        if let Some(max_size) = &self.max_size {
            conditions.insert("max_size".to_string(), Value::String(max_size.clone()));
        }

        let mut body = Map::new();
        if !conditions.is_empty() {
            body.insert("conditions".to_string(), Value::Object(conditions));
        }
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

/// Response to a rollover, including which conditions matched.
#[derive(Debug, Deserialize, Clone)]
pub struct RolloverResponse {
    pub old_index: String,
    pub new_index: String,
    pub rolled_over: bool,
    pub dry_run: bool,
    pub acknowledged: bool,
    #[serde(default)]
    pub shards_acknowledged: bool,
    /// Condition description to whether it matched, e.g. `"[max_docs: 1000]": true`.
    #[serde(default)]
    pub conditions: HashMap<String, bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resize_body_empty() {
        assert!(ResizeRequest::new("logs", "logs-small").body().is_none());
    }

    #[test]
    fn test_rollover_body_conditions() {
        let request = RolloverRequest {
            max_age: Some("7d".to_string()),
            max_docs: Some(1000),
            ..RolloverRequest::new("logs")
        };
        let body = request.body().unwrap();
        assert_eq!(body["conditions"]["max_age"], "7d");
        assert_eq!(body["conditions"]["max_docs"], 1000);
        assert!(body.get("settings").is_none());
    }

    #[test]
    fn test_rollover_body_with_new_index_settings() {
        let request = RolloverRequest {
            max_size: Some("50gb".to_string()),
            settings: Some(json!({"index.number_of_shards": 3})),
            ..RolloverRequest::new("logs")
        };
        let body = request.body().unwrap();
        assert_eq!(body["settings"]["index.number_of_shards"], 3);
        assert_eq!(body["conditions"]["max_size"], "50gb");
    }

    #[test]
    fn test_deserialize_rollover_response() {
        let json = r#"{
            "old_index": "logs-000001",
            "new_index": "logs-000002",
            "rolled_over": true,
            "dry_run": false,
            "acknowledged": true,
            "shards_acknowledged": true,
            "conditions": {"[max_docs: 1000]": true}
        }"#;
        let resp: RolloverResponse = serde_json::from_str(json).unwrap();
        assert!(resp.rolled_over);
        assert_eq!(resp.new_index, "logs-000002");
        assert_eq!(resp.conditions["[max_docs: 1000]"], true);
    }
}

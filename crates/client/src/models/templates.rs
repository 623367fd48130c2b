//! Index template models: put, get, delete, exists.

use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::time::Duration;

use crate::models::aliases::AliasMetadata;

/// Request to create or update an index template.
#[derive(Debug, Clone, Default)]
pub struct PutTemplateRequest {
    /// The template name (required).
    pub name: String,
    /// Index name patterns the template applies to (required).
    pub index_patterns: Vec<String>,
    /// Merge priority when multiple templates match; higher wins.
    pub order: Option<i64>,
    /// Version number attached to the template for external management.
    pub version: Option<u64>,
    pub settings: Option<Value>,
    pub mappings: Option<Value>,
    pub aliases: Option<Value>,
    /// Fail if a template with this name already exists.
    pub create: bool,
    pub master_timeout: Option<Duration>,
}

impl PutTemplateRequest {
    pub fn new(name: impl Into<String>, index_patterns: Vec<String>) -> Self {
        Self {
            name: name.into(),
            index_patterns,
            ..Self::default()
        }
    }

    pub(crate) fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert(
            "index_patterns".to_string(),
            Value::from(self.index_patterns.clone()),
        );
        if let Some(order) = self.order {
            body.insert("order".to_string(), Value::from(order));
        }
        if let Some(version) = self.version {
            body.insert("version".to_string(), Value::from(version));
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
        Value::Object(body)
    }
}

/// Request to retrieve index templates by name or pattern.
#[derive(Debug, Clone, Default)]
pub struct GetTemplatesRequest {
    /// Template names or wildcard patterns; empty means all templates.
    pub names: Vec<String>,
    pub master_timeout: Option<Duration>,
}

impl GetTemplatesRequest {
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            ..Self::default()
        }
    }
}

/// A stored index template.
#[derive(Debug, Deserialize, Clone)]
pub struct IndexTemplate {
    #[serde(default)]
    pub index_patterns: Vec<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub version: Option<u64>,
    #[serde(default)]
    pub settings: Value,
    #[serde(default)]
    pub mappings: Option<Value>,
    #[serde(default)]
    pub aliases: HashMap<String, AliasMetadata>,
}

/// Response mapping each template name to its definition.
#[derive(Debug, Deserialize, Clone)]
pub struct GetTemplatesResponse {
    #[serde(flatten)]
    pub templates: HashMap<String, IndexTemplate>,
}

/// Request to check whether a template exists.
#[derive(Debug, Clone, Default)]
pub struct TemplatesExistRequest {
    /// Template name or wildcard pattern (required).
    pub name: String,
}

impl TemplatesExistRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Request to delete an index template.
#[derive(Debug, Clone, Default)]
pub struct DeleteTemplateRequest {
    /// The template name (required).
    pub name: String,
    pub master_timeout: Option<Duration>,
}

impl DeleteTemplateRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_put_template_body() {
        let request = PutTemplateRequest {
            order: Some(10),
            settings: Some(json!({"number_of_shards": 1})),
            ..PutTemplateRequest::new("logs-template", vec!["logs-*".to_string()])
        };
        let body = request.body();
        assert_eq!(body["index_patterns"], json!(["logs-*"]));
        assert_eq!(body["order"], 10);
        assert_eq!(body["settings"]["number_of_shards"], 1);
        assert!(body.get("version").is_none());
    }

    #[test]
    fn test_deserialize_get_templates_response() {
        let json = r#"{
            "logs-template": {
                "index_patterns": ["logs-*"],
                "order": 10,
                "version": 3,
                "settings": {"index": {"number_of_shards": "1"}},
                "mappings": {"properties": {"message": {"type": "text"}}},
                "aliases": {"logs": {}}
            }
        }"#;
        let resp: GetTemplatesResponse = serde_json::from_str(json).unwrap();
        let template = &resp.templates["logs-template"];
        assert_eq!(template.index_patterns, vec!["logs-*"]);
        assert_eq!(template.order, 10);
        assert_eq!(template.version, Some(3));
        assert!(template.aliases.contains_key("logs"));
    }

    #[test]
    fn test_deserialize_minimal_template() {
        let json = r#"{"bare": {"index_patterns": ["bare-*"]}}"#;
        let resp: GetTemplatesResponse = serde_json::from_str(json).unwrap();
        let template = &resp.templates["bare"];
        assert_eq!(template.order, 0);
        assert!(template.mappings.is_none());
        assert!(template.aliases.is_empty());
    }
}

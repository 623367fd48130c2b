//! Query tooling models: validate query and analyze.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::models::common::{IndicesOptions, ShardStatistics};

/// Request to validate a query without executing it.
#[derive(Debug, Clone, Default)]
pub struct ValidateQueryRequest {
    /// Indices to validate against; empty means all indices.
    pub indices: Vec<String>,
    /// The query document, e.g. `{"match": {"message": "error"}}`.
    pub query: Value,
    /// Return an explanation for invalid queries.
    pub explain: Option<bool>,
    /// Return the query as it would be rewritten for execution.
    pub rewrite: Option<bool>,
    /// Validate on every shard instead of one per index.
    pub all_shards: Option<bool>,
    pub options: IndicesOptions,
}

impl ValidateQueryRequest {
    pub fn new(indices: Vec<String>, query: Value) -> Self {
        Self {
            indices,
            query,
            ..Self::default()
        }
    }

    pub(crate) fn body(&self) -> Value {
        json!({ "query": self.query })
    }
}

/// Per-index or per-shard explanation of a query validation.
#[derive(Debug, Deserialize, Clone)]
pub struct QueryExplanation {
    #[serde(default)]
    pub index: Option<String>,
    #[serde(default)]
    pub shard: Option<i32>,
    pub valid: bool,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Result of a query validation.
#[derive(Debug, Deserialize, Clone)]
pub struct ValidateQueryResponse {
    pub valid: bool,
    #[serde(rename = "_shards", default)]
    pub shards: ShardStatistics,
    #[serde(default)]
    pub explanations: Option<Vec<QueryExplanation>>,
}

/// Request to run text through an analyzer.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeRequest {
    /// Index whose analyzers to use; unset means the global analyzers.
    pub index: Option<String>,
    /// The text to analyze (required).
    pub text: Vec<String>,
    /// A named analyzer, e.g. `"standard"`.
    pub analyzer: Option<String>,
    /// A tokenizer for a custom transient analyzer.
    pub tokenizer: Option<String>,
    /// Token filters for a custom transient analyzer.
    pub filter: Vec<String>,
    /// Character filters for a custom transient analyzer.
    pub char_filter: Vec<String>,
    /// Derive the analyzer from this field's mapping.
    pub field: Option<String>,
    /// A named normalizer (keyword fields).
    pub normalizer: Option<String>,
    /// Return detailed token attributes per analysis stage.
    pub explain: bool,
    /// Token attributes to include when explain is set.
    pub attributes: Vec<String>,
}

impl AnalyzeRequest {
    /// Analyze text with a named global analyzer.
    pub fn with_analyzer(analyzer: impl Into<String>, text: Vec<String>) -> Self {
        Self {
            analyzer: Some(analyzer.into()),
            text,
            ..Self::default()
        }
    }

    /// Analyze text the way a mapped field of the given index would.
    pub fn with_field(
        index: impl Into<String>,
        field: impl Into<String>,
        text: Vec<String>,
    ) -> Self {
        Self {
            index: Some(index.into()),
            field: Some(field.into()),
            text,
            ..Self::default()
        }
    }

    pub(crate) fn body(&self) -> Value {
        let mut body = Map::new();
        body.insert("text".to_string(), Value::from(self.text.clone()));
        if let Some(analyzer) = &self.analyzer {
            body.insert("analyzer".to_string(), Value::String(analyzer.clone()));
        }
        if let Some(tokenizer) = &self.tokenizer {
            body.insert("tokenizer".to_string(), Value::String(tokenizer.clone()));
        }
        if !self.filter.is_empty() {
            body.insert("filter".to_string(), Value::from(self.filter.clone()));
        }
        if !self.char_filter.is_empty() {
            body.insert("char_filter".to_string(), Value::from(self.char_filter.clone()));
        }
        if let Some(field) = &self.field {
            body.insert("field".to_string(), Value::String(field.clone()));
        }
        if let Some(normalizer) = &self.normalizer {
            body.insert("normalizer".to_string(), Value::String(normalizer.clone()));
        }
        if self.explain {
            body.insert("explain".to_string(), Value::Bool(true));
        }
        if !self.attributes.is_empty() {
            body.insert("attributes".to_string(), Value::from(self.attributes.clone()));
        }
        Value::Object(body)
    }
}

/// One token produced by analysis.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzeToken {
    pub token: String,
    pub start_offset: i64,
    pub end_offset: i64,
    #[serde(rename = "type")]
    pub token_type: String,
    pub position: i64,
}

/// Result of running text through an analyzer.
#[derive(Debug, Deserialize, Clone)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub tokens: Vec<AnalyzeToken>,
    /// Per-stage token detail, present when explain was requested.
    #[serde(default)]
    pub detail: Option<Value>,
}

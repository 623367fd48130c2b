//! Request and response types for the index-administration API.
//!
//! Request structs carry public fields with `Default` impls so callers can
//! use struct-update syntax for optional knobs. Response types mirror the
//! JSON wire format; open-ended documents (settings, mappings, queries)
//! stay `serde_json::Value` rather than modeling the whole DSL.

pub mod aliases;
pub mod common;
pub mod freeze;
pub mod lifecycle;
pub mod maintenance;
pub mod mappings;
pub mod query_tools;
pub mod resize;
pub mod settings;
pub mod templates;

pub use aliases::{
    AliasAction, AliasMetadata, GetAliasesRequest, GetAliasesResponse, IndexAliases,
    UpdateAliasesRequest,
};
pub use common::{
    AcknowledgedResponse, ActiveShardCount, ErrorBody, ErrorCause, ExpandWildcards,
    IndicesOptions, ShardFailure, ShardStatistics, ShardsAcknowledgedResponse,
};
pub use freeze::{FreezeIndexRequest, UnfreezeIndexRequest};
pub use lifecycle::{
    CloseIndexRequest, CreateIndexRequest, CreateIndexResponse, DeleteIndexRequest,
    GetIndexRequest, GetIndexResponse, IndexState, OpenIndexRequest, OpenIndexResponse,
};
pub use maintenance::{
    ClearCacheRequest, ClearCacheResponse, FlushRequest, FlushResponse, ForceMergeRequest,
    ForceMergeResponse, IndexSyncedFlush, RefreshRequest, RefreshResponse, SyncedFlushFailure,
    SyncedFlushRequest, SyncedFlushResponse,
};
pub use mappings::{
    FieldMappingMetadata, GetFieldMappingsRequest, GetFieldMappingsResponse, GetMappingsRequest,
    GetMappingsResponse, IndexFieldMappings, IndexMappings, PutMappingRequest,
};
pub use query_tools::{
    AnalyzeRequest, AnalyzeResponse, AnalyzeToken, QueryExplanation, ValidateQueryRequest,
    ValidateQueryResponse,
};
pub use resize::{ResizeRequest, ResizeResponse, RolloverRequest, RolloverResponse};
pub use settings::{
    GetSettingsRequest, GetSettingsResponse, IndexSettings, UpdateSettingsRequest,
};
pub use templates::{
    DeleteTemplateRequest, GetTemplatesRequest, GetTemplatesResponse, IndexTemplate,
    PutTemplateRequest, TemplatesExistRequest,
};

//! Elasticsearch index-administration REST client.
//!
//! This crate provides a type-safe async client for the index-management
//! surface of the Elasticsearch REST API: index lifecycle, mappings,
//! settings, aliases, templates, shard maintenance, resize/rollover,
//! analyze/validate-query, and freeze/unfreeze.
//!
//! Every operation issues exactly one HTTP call and decodes the response
//! into a typed value; there is no retry or connection-management policy
//! at this layer.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use client::builder::ElasticClientBuilder;
pub use client::ElasticClient;
pub use error::{ClientError, Result};
pub use models::{
    AcknowledgedResponse, ActiveShardCount, AliasAction, AliasMetadata, AnalyzeRequest,
    AnalyzeResponse, AnalyzeToken, ClearCacheRequest, ClearCacheResponse, CloseIndexRequest,
    CreateIndexRequest, CreateIndexResponse, DeleteIndexRequest, DeleteTemplateRequest,
    FlushRequest, FlushResponse, ForceMergeRequest, ForceMergeResponse, FreezeIndexRequest,
    GetAliasesRequest, GetAliasesResponse, GetFieldMappingsRequest, GetFieldMappingsResponse,
    GetIndexRequest, GetIndexResponse, GetMappingsRequest, GetMappingsResponse,
    GetSettingsRequest, GetSettingsResponse, GetTemplatesRequest, GetTemplatesResponse,
    IndexTemplate, IndicesOptions, OpenIndexRequest, OpenIndexResponse, PutMappingRequest,
    PutTemplateRequest, RefreshRequest, RefreshResponse, ResizeRequest, ResizeResponse,
    RolloverRequest, RolloverResponse, ShardFailure, ShardStatistics,
    ShardsAcknowledgedResponse, SyncedFlushRequest, SyncedFlushResponse, TemplatesExistRequest,
    UnfreezeIndexRequest, UpdateAliasesRequest, UpdateSettingsRequest, ValidateQueryRequest,
    ValidateQueryResponse,
};

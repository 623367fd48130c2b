//! Shard maintenance endpoints: refresh, flush, synced flush, force merge,
//! clear cache.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::index_path;
use crate::error::Result;
use crate::models::{
    ClearCacheRequest, ClearCacheResponse, FlushRequest, FlushResponse, ForceMergeRequest,
    ForceMergeResponse, RefreshRequest, RefreshResponse, SyncedFlushRequest, SyncedFlushResponse,
};

/// Refresh one or more indices.
pub async fn refresh(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &RefreshRequest,
) -> Result<RefreshResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_refresh"));

    let mut params: Vec<(String, String)> = Vec::new();
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Flush one or more indices.
pub async fn flush(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &FlushRequest,
) -> Result<FlushResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_flush"));

    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(force) = request.force {
        params.push(("force".to_string(), force.to_string()));
    }
    if let Some(wait) = request.wait_if_ongoing {
        params.push(("wait_if_ongoing".to_string(), wait.to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Perform a synced flush on one or more indices.
pub async fn flush_synced(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &SyncedFlushRequest,
) -> Result<SyncedFlushResponse> {
    let url = format!(
        "{}{}",
        base_url,
        index_path(&request.indices, "_flush/synced")
    );

    let mut params: Vec<(String, String)> = Vec::new();
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Force-merge the segments of one or more indices.
pub async fn force_merge(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ForceMergeRequest,
) -> Result<ForceMergeResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_forcemerge"));

    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(max) = request.max_num_segments {
        params.push(("max_num_segments".to_string(), max.to_string()));
    }
    if let Some(only) = request.only_expunge_deletes {
        params.push(("only_expunge_deletes".to_string(), only.to_string()));
    }
    if let Some(flush) = request.flush {
        params.push(("flush".to_string(), flush.to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Clear caches of one or more indices.
pub async fn clear_cache(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ClearCacheRequest,
) -> Result<ClearCacheResponse> {
    let url = format!(
        "{}{}",
        base_url,
        index_path(&request.indices, "_cache/clear")
    );

    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(query) = request.query {
        params.push(("query".to_string(), query.to_string()));
    }
    if let Some(fielddata) = request.fielddata {
        params.push(("fielddata".to_string(), fielddata.to_string()));
    }
    if let Some(req_cache) = request.request {
        params.push(("request".to_string(), req_cache.to_string()));
    }
    if !request.fields.is_empty() {
        params.push(("fields".to_string(), request.fields.join(",")));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

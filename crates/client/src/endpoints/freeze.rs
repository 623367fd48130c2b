//! Freeze and unfreeze endpoints.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::{append_timeouts, append_wait_for_active_shards};
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::index_path;
use crate::error::Result;
use crate::models::{FreezeIndexRequest, ShardsAcknowledgedResponse, UnfreezeIndexRequest};

/// Freeze one or more indices, making them read-only and memory-light.
pub async fn freeze_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &FreezeIndexRequest,
) -> Result<ShardsAcknowledgedResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_freeze"));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    append_wait_for_active_shards(&mut params, request.wait_for_active_shards);
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Unfreeze one or more frozen indices.
pub async fn unfreeze_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &UnfreezeIndexRequest,
) -> Result<ShardsAcknowledgedResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_unfreeze"));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    append_wait_for_active_shards(&mut params, request.wait_for_active_shards);
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

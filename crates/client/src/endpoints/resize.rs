//! Resize and rollover endpoints: shrink, split, rollover.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::{append_timeouts, append_wait_for_active_shards};
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::encode_path_segment;
use crate::error::Result;
use crate::models::{ResizeRequest, ResizeResponse, RolloverRequest, RolloverResponse};

/// Shared converter for the two resize flavors.
async fn resize(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ResizeRequest,
    operation: &str,
) -> Result<ResizeResponse> {
    let url = format!(
        "{}/{}/{}/{}",
        base_url,
        encode_path_segment(&request.source),
        operation,
        encode_path_segment(&request.target)
    );

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    append_wait_for_active_shards(&mut params, request.wait_for_active_shards);

    let mut builder = credentials.apply(client.put(&url)).query(&params);
    if let Some(body) = request.body() {
        builder = builder.json(&body);
    }

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Shrink an index into a target with fewer primary shards.
pub async fn shrink(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ResizeRequest,
) -> Result<ResizeResponse> {
    resize(client, base_url, credentials, request, "_shrink").await
}

/// Split an index into a target with more primary shards.
pub async fn split(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ResizeRequest,
) -> Result<ResizeResponse> {
    resize(client, base_url, credentials, request, "_split").await
}

/// Roll an alias over to a new index when its conditions are met.
pub async fn rollover(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &RolloverRequest,
) -> Result<RolloverResponse> {
    let mut url = format!(
        "{}/{}/_rollover",
        base_url,
        encode_path_segment(&request.alias)
    );
    if let Some(new_index) = &request.new_index {
        url.push('/');
        url.push_str(&encode_path_segment(new_index));
    }

    let mut params: Vec<(String, String)> = Vec::new();
    if request.dry_run {
        params.push(("dry_run".to_string(), "true".to_string()));
    }
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    append_wait_for_active_shards(&mut params, request.wait_for_active_shards);

    let mut builder = credentials.apply(client.post(&url)).query(&params);
    if let Some(body) = request.body() {
        builder = builder.json(&body);
    }

    let response = send_request(builder).await?;
    decode_json(response).await
}

//! Index lifecycle endpoints: create, delete, open, close, get, exists.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::{append_timeouts, append_wait_for_active_shards};
use crate::endpoints::request::{decode_json, send_exists, send_request};
use crate::endpoints::url::{encode_path_segment, index_path, join_names};
use crate::error::{ClientError, Result};
use crate::models::{
    AcknowledgedResponse, CloseIndexRequest, CreateIndexRequest, CreateIndexResponse,
    DeleteIndexRequest, GetIndexRequest, GetIndexResponse, OpenIndexRequest, OpenIndexResponse,
};

/// Operations addressed at `{base_url}/{indices}` must name at least one
/// index; an empty list would target the cluster root instead.
fn require_indices(indices: &[String]) -> Result<()> {
    if indices.is_empty() {
        return Err(ClientError::InvalidUrl(
            "at least one index name is required".to_string(),
        ));
    }
    Ok(())
}

/// Create a new index.
pub async fn create_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &CreateIndexRequest,
) -> Result<CreateIndexResponse> {
    let url = format!("{}/{}", base_url, encode_path_segment(&request.index));

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

/// Delete one or more indices.
pub async fn delete_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &DeleteIndexRequest,
) -> Result<AcknowledgedResponse> {
    require_indices(&request.indices)?;
    let url = format!("{}/{}", base_url, join_names(&request.indices));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.delete(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Open one or more closed indices.
pub async fn open_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &OpenIndexRequest,
) -> Result<OpenIndexResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_open"));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    append_wait_for_active_shards(&mut params, request.wait_for_active_shards);
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Close one or more indices.
pub async fn close_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &CloseIndexRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_close"));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.post(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Check whether one or more indices exist.
pub async fn index_exists(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetIndexRequest,
) -> Result<bool> {
    require_indices(&request.indices)?;
    let url = format!("{}/{}", base_url, join_names(&request.indices));

    let mut params: Vec<(String, String)> = Vec::new();
    if request.local {
        params.push(("local".to_string(), "true".to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.head(&url)).query(&params);

    send_exists(builder).await
}

/// Retrieve aliases, mappings, and settings for one or more indices.
pub async fn get_index(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetIndexRequest,
) -> Result<GetIndexResponse> {
    require_indices(&request.indices)?;
    let url = format!("{}/{}", base_url, join_names(&request.indices));

    let mut params: Vec<(String, String)> = Vec::new();
    if request.include_defaults {
        params.push(("include_defaults".to_string(), "true".to_string()));
    }
    if request.local {
        params.push(("local".to_string(), "true".to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.get(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

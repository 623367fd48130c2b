//! Mapping endpoints: put mapping, get mappings, get field mappings.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::append_timeouts;
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::{index_path, join_names};
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetFieldMappingsRequest, GetFieldMappingsResponse, GetMappingsRequest,
    GetMappingsResponse, PutMappingRequest,
};

/// Update the mapping of one or more indices.
pub async fn put_mapping(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &PutMappingRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_mapping"));

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    request.options.append_query(&mut params);

    let builder = credentials
        .apply(client.put(&url))
        .query(&params)
        .json(&request.source);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Retrieve the mappings of one or more indices.
pub async fn get_mappings(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetMappingsRequest,
) -> Result<GetMappingsResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_mapping"));

    let mut params: Vec<(String, String)> = Vec::new();
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.get(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Retrieve the mappings of specific fields.
pub async fn get_field_mappings(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetFieldMappingsRequest,
) -> Result<GetFieldMappingsResponse> {
    let suffix = format!("_mapping/field/{}", join_names(&request.fields));
    let url = format!("{}{}", base_url, index_path(&request.indices, &suffix));

    let mut params: Vec<(String, String)> = Vec::new();
    if request.include_defaults {
        params.push(("include_defaults".to_string(), "true".to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.get(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

//! Settings endpoints: get and update index settings.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::append_timeouts;
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::{index_path, join_names};
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetSettingsRequest, GetSettingsResponse, UpdateSettingsRequest,
};

/// Retrieve index settings, optionally filtered by setting name.
pub async fn get_settings(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetSettingsRequest,
) -> Result<GetSettingsResponse> {
    let suffix = if request.names.is_empty() {
        "_settings".to_string()
    } else {
        format!("_settings/{}", join_names(&request.names))
    };
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

/// Update dynamic settings on one or more indices.
pub async fn update_settings(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &UpdateSettingsRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!("{}{}", base_url, index_path(&request.indices, "_settings"));

    let mut params: Vec<(String, String)> = Vec::new();
    if request.preserve_existing {
        params.push(("preserve_existing".to_string(), "true".to_string()));
    }
    append_timeouts(&mut params, request.timeout, request.master_timeout);
    request.options.append_query(&mut params);

    let builder = credentials
        .apply(client.put(&url))
        .query(&params)
        .json(&request.settings);

    let response = send_request(builder).await?;
    decode_json(response).await
}

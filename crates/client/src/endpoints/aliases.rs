//! Alias endpoints: atomic updates, retrieval, existence.

use reqwest::Client;
use serde_json::json;

use crate::auth::Credentials;
use crate::endpoints::params::append_timeouts;
use crate::endpoints::request::{decode_json, send_exists, send_request};
use crate::endpoints::url::{index_path, join_names};
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, GetAliasesRequest, GetAliasesResponse, UpdateAliasesRequest,
};

/// Apply a set of alias actions atomically.
pub async fn update_aliases(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &UpdateAliasesRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!("{}/_aliases", base_url);

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, request.timeout, request.master_timeout);

    let body = json!({ "actions": request.actions });
    let builder = credentials
        .apply(client.post(&url))
        .query(&params)
        .json(&body);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Path for alias lookups: `/{indices}/_alias/{aliases}` with both parts
/// optional.
fn alias_path(request: &GetAliasesRequest) -> String {
    let suffix = if request.aliases.is_empty() {
        "_alias".to_string()
    } else {
        format!("_alias/{}", join_names(&request.aliases))
    };
    index_path(&request.indices, &suffix)
}

/// Retrieve aliases, optionally filtered by index and alias name.
pub async fn get_alias(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetAliasesRequest,
) -> Result<GetAliasesResponse> {
    let url = format!("{}{}", base_url, alias_path(request));

    let mut params: Vec<(String, String)> = Vec::new();
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.get(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Check whether one or more aliases exist.
pub async fn alias_exists(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetAliasesRequest,
) -> Result<bool> {
    let url = format!("{}{}", base_url, alias_path(request));

    let mut params: Vec<(String, String)> = Vec::new();
    request.options.append_query(&mut params);

    let builder = credentials.apply(client.head(&url)).query(&params);

    send_exists(builder).await
}

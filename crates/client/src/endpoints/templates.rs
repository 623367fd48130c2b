//! Index template endpoints: put, get, delete, exists.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::params::append_timeouts;
use crate::endpoints::request::{decode_json, send_exists, send_request};
use crate::endpoints::url::{encode_path_segment, join_names};
use crate::error::Result;
use crate::models::{
    AcknowledgedResponse, DeleteTemplateRequest, GetTemplatesRequest, GetTemplatesResponse,
    PutTemplateRequest, TemplatesExistRequest,
};

/// Create or update an index template.
pub async fn put_template(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &PutTemplateRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!(
        "{}/_template/{}",
        base_url,
        encode_path_segment(&request.name)
    );

    let mut params: Vec<(String, String)> = Vec::new();
    if request.create {
        params.push(("create".to_string(), "true".to_string()));
    }
    append_timeouts(&mut params, None, request.master_timeout);

    let builder = credentials
        .apply(client.put(&url))
        .query(&params)
        .json(&request.body());

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Retrieve index templates by name or pattern.
pub async fn get_templates(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &GetTemplatesRequest,
) -> Result<GetTemplatesResponse> {
    let url = if request.names.is_empty() {
        format!("{}/_template", base_url)
    } else {
        format!("{}/_template/{}", base_url, join_names(&request.names))
    };

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, None, request.master_timeout);

    let builder = credentials.apply(client.get(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Check whether an index template exists.
pub async fn template_exists(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &TemplatesExistRequest,
) -> Result<bool> {
    let url = format!(
        "{}/_template/{}",
        base_url,
        encode_path_segment(&request.name)
    );

    let builder = credentials.apply(client.head(&url));

    send_exists(builder).await
}

/// Delete an index template.
pub async fn delete_template(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &DeleteTemplateRequest,
) -> Result<AcknowledgedResponse> {
    let url = format!(
        "{}/_template/{}",
        base_url,
        encode_path_segment(&request.name)
    );

    let mut params: Vec<(String, String)> = Vec::new();
    append_timeouts(&mut params, None, request.master_timeout);

    let builder = credentials.apply(client.delete(&url)).query(&params);

    let response = send_request(builder).await?;
    decode_json(response).await
}

//! Query tooling endpoints: validate query, analyze.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::request::{decode_json, send_request};
use crate::endpoints::url::{encode_path_segment, index_path};
use crate::error::Result;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ValidateQueryRequest, ValidateQueryResponse,
};

/// Validate a query without executing it.
pub async fn validate_query(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &ValidateQueryRequest,
) -> Result<ValidateQueryResponse> {
    let url = format!(
        "{}{}",
        base_url,
        index_path(&request.indices, "_validate/query")
    );

    let mut params: Vec<(String, String)> = Vec::new();
    if let Some(explain) = request.explain {
        params.push(("explain".to_string(), explain.to_string()));
    }
    if let Some(rewrite) = request.rewrite {
        params.push(("rewrite".to_string(), rewrite.to_string()));
    }
    if let Some(all_shards) = request.all_shards {
        params.push(("all_shards".to_string(), all_shards.to_string()));
    }
    request.options.append_query(&mut params);

    let builder = credentials
        .apply(client.post(&url))
        .query(&params)
        .json(&request.body());

    let response = send_request(builder).await?;
    decode_json(response).await
}

/// Run text through an analyzer and return the produced tokens.
pub async fn analyze(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse> {
    let url = match &request.index {
        Some(index) => format!("{}/{}/_analyze", base_url, encode_path_segment(index)),
        None => format!("{}/_analyze", base_url),
    };

    let builder = credentials.apply(client.post(&url)).json(&request.body());

    let response = send_request(builder).await?;
    decode_json(response).await
}

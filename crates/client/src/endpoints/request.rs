//! Shared request execution for all endpoints.
//!
//! Every operation funnels through this module: exactly one HTTP call per
//! invocation, non-2xx responses turned into `ClientError::Api` with a
//! message extracted from the cluster's error body, and 2xx bodies decoded
//! into typed values. No retries happen at this layer.

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::ErrorBody;

/// Send a request and surface non-2xx responses as `Api` errors.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let status = status.as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    // Prefer the structured error body for a cleaner message.
    let message = match serde_json::from_str::<ErrorBody>(&body) {
        Ok(parsed) => parsed.summary(),
        Err(_) => body,
    };

    debug!(status, url = %url, "Request failed");
    Err(ClientError::Api {
        status,
        url,
        message,
    })
}

/// Send a HEAD-style existence check: 200 means present, 404 means absent.
pub async fn send_exists(builder: RequestBuilder) -> Result<bool> {
    let response = builder.send().await?;

    match response.status().as_u16() {
        200 => Ok(true),
        404 => Ok(false),
        status => {
            let url = response.url().to_string();
            debug!(status, url = %url, "Existence check failed");
            Err(ClientError::Api {
                status,
                url,
                message: format!("unexpected status {} for existence check", status),
            })
        }
    }
}

/// Decode a 2xx response body into the declared type.
///
/// Serde failures become `InvalidResponse` so callers can distinguish parse
/// failures from transport failures.
pub async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to decode response: {}", e)))
}

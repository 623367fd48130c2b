//! Error surface tests.
//!
//! This module tests how failures surface to callers:
//! - Non-2xx responses become `Api` errors with the cluster's error summary
//! - Malformed 2xx bodies become `InvalidResponse`
//! - Connection failures become transport errors
//! - Unexpected statuses on existence checks are errors, not booleans
//!
//! # Invariants
//! - A failed operation produces exactly one error, never a partial value
//! - Error messages carry the cluster's `type: reason` summary when available

mod common;

use common::*;
use elastic_indices_client::{
    ClientError, CreateIndexRequest, DeleteIndexRequest, GetAliasesRequest, GetIndexRequest,
};
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_api_error_carries_summary() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {
                "type": "index_not_found_exception",
                "reason": "no such index [missing]"
            },
            "status": 404
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = DeleteIndexRequest::new(vec!["missing".to_string()]);

    let result = endpoints::delete_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(404));
    match err {
        ClientError::Api { message, .. } => {
            assert_eq!(message, "index_not_found_exception: no such index [missing]");
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_with_unstructured_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(503).set_body_string("service unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = CreateIndexRequest::new("logs-000001");

    let result = endpoints::create_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(503));
    match err {
        ClientError::Api { message, .. } => assert_eq!(message, "service unavailable"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = CreateIndexRequest::new("logs-000001");

    let result = endpoints::create_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.is_parse_error());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on this port
    let client = Client::new();
    let request = DeleteIndexRequest::new(vec!["logs".to_string()]);

    let result = endpoints::delete_index(
        &client,
        "http://127.0.0.1:1",
        &Credentials::None,
        &request,
    )
    .await;

    let err = result.unwrap_err();
    assert!(err.is_transport_error());
}

#[tokio::test]
async fn test_exists_check_unexpected_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetIndexRequest::new(vec!["logs-000001".to_string()]);

    let result =
        endpoints::index_exists(&client, &mock_server.uri(), &Credentials::None, &request).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_exists_check_forbidden_is_error_not_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/_alias/secret"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetAliasesRequest::new(vec!["secret".to_string()]);

    let result =
        endpoints::alias_exists(&client, &mock_server.uri(), &Credentials::None, &request).await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), Some(403));
}

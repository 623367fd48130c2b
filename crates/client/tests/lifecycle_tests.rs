//! Index lifecycle endpoint tests.
//!
//! This module tests the index lifecycle API:
//! - Creating indices with settings, mappings, and aliases
//! - Deleting, opening, and closing indices
//! - Index existence checks and full index retrieval
//!
//! # Invariants
//! - Each operation issues exactly one HTTP request
//! - Successful responses decode into typed values unmodified
//! - HEAD existence checks map 200 to true and 404 to false

mod common;

use common::*;
use elastic_indices_client::{
    ClientError, CloseIndexRequest, CreateIndexRequest, DeleteIndexRequest, GetIndexRequest,
    OpenIndexRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_create_index() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("lifecycle/create_index.json");

    Mock::given(method("PUT"))
        .and(path("/logs-000001"))
        .and(body_json(json!({
            "settings": {"number_of_shards": 3}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = CreateIndexRequest {
        settings: Some(json!({"number_of_shards": 3})),
        ..CreateIndexRequest::new("logs-000001")
    };

    let result = endpoints::create_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    if let Err(ref e) = result {
        eprintln!("Create index error: {:?}", e);
    }
    assert!(result.is_ok());
    let response = result.unwrap();
    assert!(response.acknowledged);
    assert!(response.shards_acknowledged);
    assert_eq!(response.index, "logs-000001");
}

#[tokio::test]
async fn test_create_index_without_body() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("lifecycle/create_index.json");

    Mock::given(method("PUT"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
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

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_delete_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/logs-000001,logs-000002"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = DeleteIndexRequest::new(vec![
        "logs-000001".to_string(),
        "logs-000002".to_string(),
    ]);

    let result = endpoints::delete_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    assert!(result.is_ok());
    assert!(result.unwrap().acknowledged);
}

#[tokio::test]
async fn test_delete_index_rejects_empty_index_list() {
    // An empty index list would resolve to the cluster root URL; the
    // request must be rejected before any HTTP call is made.
    let mock_server = MockServer::start().await;

    let client = Client::new();
    let request = DeleteIndexRequest::new(Vec::new());

    let result = endpoints::delete_index(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_open_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logs-000001/_open"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "acknowledged": true,
            "shards_acknowledged": true
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = OpenIndexRequest::new(vec!["logs-000001".to_string()]);

    let result =
        endpoints::open_index(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
    let response = result.unwrap();
    assert!(response.acknowledged);
    assert!(response.shards_acknowledged);
}

#[tokio::test]
async fn test_close_index() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/logs-000001/_close"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = CloseIndexRequest::new(vec!["logs-000001".to_string()]);

    let result =
        endpoints::close_index(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
    assert!(result.unwrap().acknowledged);
}

#[tokio::test]
async fn test_index_exists_true() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetIndexRequest::new(vec!["logs-000001".to_string()]);

    let result =
        endpoints::index_exists(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_index_exists_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetIndexRequest::new(vec!["missing".to_string()]);

    let result =
        endpoints::index_exists(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[tokio::test]
async fn test_index_exists_rejects_empty_index_list() {
    // HEAD against the cluster root answers 200, which would read as
    // "exists" for zero indices; reject locally instead.
    let mock_server = MockServer::start().await;

    let client = Client::new();
    let request = GetIndexRequest::new(Vec::new());

    let result =
        endpoints::index_exists(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_index() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("lifecycle/get_index.json");

    Mock::given(method("GET"))
        .and(path("/logs-000001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetIndexRequest::new(vec!["logs-000001".to_string()]);

    let result =
        endpoints::get_index(&client, &mock_server.uri(), &Credentials::None, &request).await;

    if let Err(ref e) = result {
        eprintln!("Get index error: {:?}", e);
    }
    assert!(result.is_ok());
    let response = result.unwrap();
    let state = &response.indices["logs-000001"];
    assert!(state.aliases.contains_key("logs"));
    assert_eq!(
        state.settings["index"]["number_of_shards"],
        json!("3")
    );
}

#[tokio::test]
async fn test_get_index_passes_include_defaults() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("lifecycle/get_index.json");

    Mock::given(method("GET"))
        .and(path("/logs-000001"))
        .and(query_param("include_defaults", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetIndexRequest {
        include_defaults: true,
        ..GetIndexRequest::new(vec!["logs-000001".to_string()])
    };

    let result =
        endpoints::get_index(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
}

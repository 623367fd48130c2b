//! Index template endpoint tests.
//!
//! This module tests the template API:
//! - Creating and updating templates
//! - Retrieving templates by name or pattern
//! - Template existence checks and deletion
//!
//! # Invariants
//! - Each operation issues exactly one HTTP request
//! - `create=true` makes the put fail on an existing template (server side)
//! - HEAD existence checks map 200 to true and 404 to false

mod common;

use common::*;
use elastic_indices_client::{
    DeleteTemplateRequest, GetTemplatesRequest, PutTemplateRequest, TemplatesExistRequest,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};

#[tokio::test]
async fn test_put_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/_template/logs-template"))
        .and(body_json(json!({
            "index_patterns": ["logs-*"],
            "order": 10,
            "settings": {"number_of_shards": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = PutTemplateRequest {
        order: Some(10),
        settings: Some(json!({"number_of_shards": 1})),
        ..PutTemplateRequest::new("logs-template", vec!["logs-*".to_string()])
    };

    let result =
        endpoints::put_template(&client, &mock_server.uri(), &Credentials::None, &request).await;

    if let Err(ref e) = result {
        eprintln!("Put template error: {:?}", e);
    }
    assert!(result.is_ok());
    assert!(result.unwrap().acknowledged);
}

#[tokio::test]
async fn test_put_template_create_flag() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/_template/logs-template"))
        .and(query_param("create", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = PutTemplateRequest {
        create: true,
        ..PutTemplateRequest::new("logs-template", vec!["logs-*".to_string()])
    };

    let result =
        endpoints::put_template(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_get_templates() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("templates/get_templates.json");

    Mock::given(method("GET"))
        .and(path("/_template/logs-template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetTemplatesRequest::new(vec!["logs-template".to_string()]);

    let result =
        endpoints::get_templates(&client, &mock_server.uri(), &Credentials::None, &request).await;

    if let Err(ref e) = result {
        eprintln!("Get templates error: {:?}", e);
    }
    assert!(result.is_ok());
    let response = result.unwrap();
    let template = &response.templates["logs-template"];
    assert_eq!(template.index_patterns, vec!["logs-*"]);
    assert_eq!(template.order, 10);
}

#[tokio::test]
async fn test_get_all_templates() {
    let mock_server = MockServer::start().await;

    let fixture = load_fixture("templates/get_templates.json");

    Mock::given(method("GET"))
        .and(path("/_template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&fixture))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = GetTemplatesRequest::default();

    let result =
        endpoints::get_templates(&client, &mock_server.uri(), &Credentials::None, &request).await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_template_exists_true() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/_template/logs-template"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = TemplatesExistRequest::new("logs-template");

    let result = endpoints::template_exists(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[tokio::test]
async fn test_template_exists_false() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/_template/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = TemplatesExistRequest::new("missing");

    let result = endpoints::template_exists(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[tokio::test]
async fn test_delete_template() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/_template/logs-template"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"acknowledged": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new();
    let request = DeleteTemplateRequest::new("logs-template");

    let result = endpoints::delete_template(
        &client,
        &mock_server.uri(),
        &Credentials::None,
        &request,
    )
    .await;

    assert!(result.is_ok());
    assert!(result.unwrap().acknowledged);
}

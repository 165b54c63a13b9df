mod common;

use std::sync::Arc;

use common::{contact, post_json, test_router};
use gateway::backend::mock::MockMessagingBackend;
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn search_returns_matching_contacts() {
    let backend = Arc::new(
        MockMessagingBackend::new().with_contacts(vec![contact("Alice", "15551234567")]),
    );
    let router = test_router(backend);

    let (status, body) = post_json(&router, "/api/contacts/search", json!({"query": "alice"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let contacts = body["data"].as_array().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["phone_number"], "15551234567");
    assert_eq!(contacts[0]["name"], "Alice");
    assert_eq!(contacts[0]["jid"], "15551234567@s.whatsapp.net");
}

#[tokio::test]
async fn search_is_idempotent_against_unchanged_backend() {
    let backend = Arc::new(
        MockMessagingBackend::new().with_contacts(vec![contact("Alice", "15551234567")]),
    );
    let router = test_router(backend);

    let (_, first) = post_json(&router, "/api/contacts/search", json!({"query": "alice"})).await;
    let (_, second) = post_json(&router, "/api/contacts/search", json!({"query": "alice"})).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn missing_query_is_rejected_before_the_backend() {
    // A backend call would produce a 500; the 422 proves validation ran first
    let backend = Arc::new(MockMessagingBackend::new().with_failure("must not be called"));
    let router = test_router(backend);

    let (status, body) = post_json(&router, "/api/contacts/search", json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let backend = Arc::new(MockMessagingBackend::new());
    let router = test_router(backend);

    let (status, body) = post_json(&router, "/api/contacts/search", json!({"query": ""})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn backend_failure_surfaces_as_500_envelope() {
    let backend = Arc::new(MockMessagingBackend::new().with_failure("database is locked"));
    let router = test_router(backend);

    let (status, body) = post_json(&router, "/api/contacts/search", json!({"query": "alice"})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("database is locked"));
}

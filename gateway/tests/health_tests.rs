mod common;

use std::sync::Arc;

use common::{get, test_router, test_router_with_env};
use gateway::{backend::mock::MockMessagingBackend, types::Environment};
use http::StatusCode;

#[tokio::test]
async fn health_returns_ok_regardless_of_backend_state() {
    let backend = Arc::new(MockMessagingBackend::new().with_failure("bridge down"));
    let router = test_router(backend);

    let (status, body) = get(&router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(!body["semver"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn openapi_document_visible_in_development() {
    let router = test_router(Arc::new(MockMessagingBackend::new()));

    let (status, body) = get(&router, "/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/contacts/search"].is_object());
}

#[tokio::test]
async fn openapi_document_hidden_in_production() {
    let router = test_router_with_env(
        Arc::new(MockMessagingBackend::new()),
        Environment::Production,
    );

    let (status, _body) = get(&router, "/openapi.json").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

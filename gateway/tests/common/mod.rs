//! Shared helpers for gateway integration tests

#![allow(dead_code)]

use std::sync::Arc;

use aide::openapi::OpenApi;
use axum::{body::Body, Extension, Router};
use chrono::{TimeZone, Utc};
use gateway::{
    backend::{Chat, Contact, Message, MessagingBackend},
    routes,
    types::Environment,
};
use http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Builds the full router wired to the given backend double
pub fn test_router(backend: Arc<dyn MessagingBackend>) -> Router {
    test_router_with_env(backend, Environment::Development)
}

/// Same as [`test_router`] with an explicit environment
pub fn test_router_with_env(backend: Arc<dyn MessagingBackend>, environment: Environment) -> Router {
    let mut openapi = OpenApi::default();

    routes::handler()
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(backend))
}

/// Sends a JSON POST and returns `(status, parsed body)`
pub async fn post_json(router: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request");

    send(router, request).await
}

/// Sends a GET and returns `(status, parsed body)`
pub async fn get(router: &Router, path: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request");

    send(router, request).await
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("request failed");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body is not valid JSON")
    };

    (status, body)
}

/// A contact fixture
pub fn contact(name: &str, number: &str) -> Contact {
    Contact {
        phone_number: number.to_string(),
        name: Some(name.to_string()),
        jid: format!("{number}@s.whatsapp.net"),
    }
}

/// A chat fixture
pub fn chat(jid: &str, name: &str) -> Chat {
    Chat {
        jid: jid.to_string(),
        name: Some(name.to_string()),
        last_message_time: Some(Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()),
        last_message: Some("see you then".to_string()),
        last_sender: Some("15551234567".to_string()),
        last_is_from_me: Some(false),
    }
}

/// A message fixture
pub fn message(id: &str, content: &str) -> Message {
    Message {
        timestamp: Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap(),
        sender: "15551234567".to_string(),
        content: content.to_string(),
        is_from_me: false,
        chat_jid: "15551234567@s.whatsapp.net".to_string(),
        id: id.to_string(),
        chat_name: Some("Alice".to_string()),
        media_type: None,
    }
}

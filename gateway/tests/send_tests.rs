mod common;

use std::sync::Arc;

use common::{post_json, test_router};
use gateway::backend::{mock::MockMessagingBackend, SendOutcome};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn send_message_wraps_the_bridge_status() {
    let backend = Arc::new(MockMessagingBackend::new().with_send_outcome(SendOutcome {
        success: true,
        message: "sent".to_string(),
    }));
    let router = test_router(backend);

    let (status, body) = post_json(
        &router,
        "/api/send/message",
        json!({"recipient": "15551234567", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "sent");
}

#[tokio::test]
async fn send_message_reported_failure_becomes_500() {
    let backend = Arc::new(MockMessagingBackend::new().with_send_outcome(SendOutcome {
        success: false,
        message: "not connected".to_string(),
    }));
    let router = test_router(backend);

    let (status, body) = post_json(
        &router,
        "/api/send/message",
        json!({"recipient": "15551234567", "message": "hi"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "not connected");
}

#[tokio::test]
async fn identical_sends_each_reach_the_backend() {
    let backend = Arc::new(MockMessagingBackend::new());
    let router = test_router(backend.clone());

    let payload = json!({"recipient": "15551234567", "message": "hi"});
    post_json(&router, "/api/send/message", payload.clone()).await;
    post_json(&router, "/api/send/message", payload).await;

    let calls = backend.send_calls.lock().unwrap();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
}

#[tokio::test]
async fn send_file_forwards_recipient_and_path() {
    let backend = Arc::new(MockMessagingBackend::new());
    let router = test_router(backend.clone());

    let (status, body) = post_json(
        &router,
        "/api/send/file",
        json!({"recipient": "123456789@g.us", "media_path": "/home/user/photo.jpg"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let calls = backend.send_calls.lock().unwrap();
    assert_eq!(
        calls[0],
        (
            "123456789@g.us".to_string(),
            "/home/user/photo.jpg".to_string()
        )
    );
}

#[tokio::test]
async fn send_audio_reported_failure_becomes_500() {
    let backend = Arc::new(MockMessagingBackend::new().with_send_outcome(SendOutcome {
        success: false,
        message: "file is not an Opus voice note and no converter is available".to_string(),
    }));
    let router = test_router(backend);

    let (status, body) = post_json(
        &router,
        "/api/send/audio",
        json!({"recipient": "15551234567", "media_path": "/home/user/note.mp3"}),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("Opus"));
}

#[tokio::test]
async fn missing_recipient_is_rejected_before_the_backend() {
    let backend = Arc::new(MockMessagingBackend::new());
    let router = test_router(backend.clone());

    let (status, body) = post_json(&router, "/api/send/message", json!({"message": "hi"})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert!(backend.send_calls.lock().unwrap().is_empty());
}

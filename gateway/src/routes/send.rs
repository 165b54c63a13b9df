use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    backend::{MessagingBackend, SendOutcome},
    types::{AppError, Envelope, ValidatedJson},
};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct SendMessageRequest {
    /// Phone number (with country code, no `+`) or JID
    /// (e.g. `123456789@s.whatsapp.net`, or `123456789@g.us` for groups)
    #[validate(length(min = 1))]
    pub recipient: String,
    /// The message text to send
    pub message: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct SendFileRequest {
    /// Phone number or JID
    #[validate(length(min = 1))]
    pub recipient: String,
    /// Absolute path to the media file to send
    #[validate(length(min = 1))]
    pub media_path: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct SendAudioRequest {
    /// Phone number or JID
    #[validate(length(min = 1))]
    pub recipient: String,
    /// Absolute path to the audio file to send
    #[validate(length(min = 1))]
    pub media_path: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SendData {
    /// Delivery status text reported by the bridge
    pub message: String,
}

/// A reported failure surfaces as HTTP 500 with the bridge's status text;
/// a success keeps the text as the `data.message` payload
fn into_send_response(outcome: SendOutcome) -> Result<Json<Envelope<SendData>>, AppError> {
    if outcome.success {
        Ok(Json(Envelope::new(SendData {
            message: outcome.message,
        })))
    } else {
        Err(AppError::internal(outcome.message))
    }
}

/// Send a text message to a person or group
///
/// Sends are not idempotent: every call dispatches a distinct message, the
/// gateway never deduplicates.
pub async fn message(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<SendMessageRequest>,
) -> Result<Json<Envelope<SendData>>, AppError> {
    let outcome = backend
        .send_message(&payload.recipient, &payload.message)
        .await?;

    into_send_response(outcome)
}

/// Send a file (image, video, raw audio, document)
///
/// The file must exist at the given absolute path on the gateway host.
pub async fn file(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<SendFileRequest>,
) -> Result<Json<Envelope<SendData>>, AppError> {
    let outcome = backend
        .send_file(&payload.recipient, &payload.media_path)
        .await?;

    into_send_response(outcome)
}

/// Send an audio file as a voice note
///
/// The bridge converts other formats to `.ogg` Opus when a converter is
/// available; otherwise the input must already be in that codec.
pub async fn audio(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<SendAudioRequest>,
) -> Result<Json<Envelope<SendData>>, AppError> {
    let outcome = backend
        .send_audio_message(&payload.recipient, &payload.media_path)
        .await?;

    into_send_response(outcome)
}

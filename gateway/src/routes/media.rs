use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    backend::MessagingBackend,
    types::{AppError, Envelope, ValidatedJson},
};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct DownloadMediaRequest {
    /// The ID of the message containing the media
    #[validate(length(min = 1))]
    pub message_id: String,
    /// The JID of the chat containing the message
    #[validate(length(min = 1))]
    pub chat_jid: String,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct DownloadData {
    /// Download status text
    pub message: String,
    /// Local path where the media was saved
    pub file_path: String,
}

/// Download media from a message
///
/// Returns the local file path where the bridge saved the media. A missing
/// path from the bridge is a failed download and surfaces as HTTP 500.
pub async fn download(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<DownloadMediaRequest>,
) -> Result<Json<Envelope<DownloadData>>, AppError> {
    let file_path = backend
        .download_media(&payload.message_id, &payload.chat_jid)
        .await?;

    match file_path {
        Some(file_path) => Ok(Json(Envelope::new(DownloadData {
            message: "Media downloaded successfully".to_string(),
            file_path,
        }))),
        None => Err(AppError::internal("Failed to download media")),
    }
}

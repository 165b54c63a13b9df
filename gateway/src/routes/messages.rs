use std::sync::Arc;

use axum::{Extension, Json};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    backend::{Message, MessageContext, MessageQuery, MessagingBackend},
    types::{AppError, Envelope, ValidatedJson},
};

fn default_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

fn default_context_len() -> u32 {
    1
}

fn default_context_window() -> u32 {
    5
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct ListMessagesRequest {
    /// Only return messages after this ISO-8601 instant
    pub after: Option<DateTime<Utc>>,
    /// Only return messages before this ISO-8601 instant
    pub before: Option<DateTime<Utc>>,
    /// Phone number to filter messages by sender
    pub sender_phone_number: Option<String>,
    /// Chat JID to filter messages by chat
    pub chat_jid: Option<String>,
    /// Search term to filter messages by content
    pub query: Option<String>,
    /// Maximum number of messages to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Page number for pagination
    #[serde(default)]
    pub page: u32,
    /// Whether to include messages before and after matches
    #[serde(default = "default_true")]
    pub include_context: bool,
    /// Number of messages to include before each match
    #[serde(default = "default_context_len")]
    pub context_before: u32,
    /// Number of messages to include after each match
    #[serde(default = "default_context_len")]
    pub context_after: u32,
}

impl From<ListMessagesRequest> for MessageQuery {
    fn from(req: ListMessagesRequest) -> Self {
        Self {
            after: req.after,
            before: req.before,
            sender_phone_number: req.sender_phone_number,
            chat_jid: req.chat_jid,
            query: req.query,
            limit: req.limit,
            page: req.page,
            include_context: req.include_context,
            context_before: req.context_before,
            context_after: req.context_after,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct GetLastInteractionRequest {
    /// The JID of the contact to search for
    #[validate(length(min = 1))]
    pub jid: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct GetMessageContextRequest {
    /// The ID of the message to get context for
    #[validate(length(min = 1))]
    pub message_id: String,
    /// Number of messages to include before the target message
    #[serde(default = "default_context_window")]
    pub before: u32,
    /// Number of messages to include after the target message
    #[serde(default = "default_context_window")]
    pub after: u32,
}

/// List messages matching the given criteria
///
/// Supports filtering by date window, sender, chat and content. Returns a
/// paginated list, optionally interleaved with the surrounding context of
/// each match.
pub async fn list(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<ListMessagesRequest>,
) -> Result<Json<Envelope<Vec<Message>>>, AppError> {
    let messages = backend.list_messages(payload.into()).await?;

    Ok(Json(Envelope::new(messages)))
}

/// Most recent message exchanged with a contact
///
/// `data` is `null` when no interaction exists.
pub async fn last_interaction(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<GetLastInteractionRequest>,
) -> Result<Json<Envelope<Option<Message>>>, AppError> {
    let message = backend.get_last_interaction(&payload.jid).await?;

    Ok(Json(Envelope::new(message)))
}

/// Target message plus its surrounding messages
pub async fn context(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<GetMessageContextRequest>,
) -> Result<Json<Envelope<MessageContext>>, AppError> {
    let context = backend
        .get_message_context(&payload.message_id, payload.before, payload.after)
        .await?;

    Ok(Json(Envelope::new(context)))
}

use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    backend::{Chat, ChatQuery, ChatSort, MessagingBackend},
    types::{AppError, Envelope, ValidatedJson},
};

fn default_limit() -> u32 {
    20
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct ListChatsRequest {
    /// Search term to filter chats by name or JID
    pub query: Option<String>,
    /// Maximum number of chats to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Page number for pagination
    #[serde(default)]
    pub page: u32,
    /// Whether to include the last message in each chat
    #[serde(default = "default_true")]
    pub include_last_message: bool,
    /// Field to sort results by
    #[serde(default)]
    pub sort_by: ChatSort,
}

impl From<ListChatsRequest> for ChatQuery {
    fn from(req: ListChatsRequest) -> Self {
        Self {
            query: req.query,
            limit: req.limit,
            page: req.page,
            include_last_message: req.include_last_message,
            sort_by: req.sort_by,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct GetChatRequest {
    /// The JID of the chat to retrieve
    #[validate(length(min = 1))]
    pub chat_jid: String,
    /// Whether to include the last message
    #[serde(default = "default_true")]
    pub include_last_message: bool,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct GetDirectChatByContactRequest {
    /// The phone number to search for
    #[validate(length(min = 1))]
    pub sender_phone_number: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct GetContactChatsRequest {
    /// The contact's JID to search for
    #[validate(length(min = 1))]
    pub jid: String,
    /// Maximum number of chats to return
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Page number for pagination
    #[serde(default)]
    pub page: u32,
}

/// List chats matching the given criteria
///
/// Returns a paginated list of chats with metadata and an optional last
/// message per chat.
pub async fn list(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<ListChatsRequest>,
) -> Result<Json<Envelope<Vec<Chat>>>, AppError> {
    let chats = backend.list_chats(payload.into()).await?;

    Ok(Json(Envelope::new(chats)))
}

/// Fetch chat metadata by JID
///
/// `data` is `null` when no chat matches.
pub async fn get(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<GetChatRequest>,
) -> Result<Json<Envelope<Option<Chat>>>, AppError> {
    let chat = backend
        .get_chat(&payload.chat_jid, payload.include_last_message)
        .await?;

    Ok(Json(Envelope::new(chat)))
}

/// Find the direct chat with a contact by phone number
///
/// `data` is `null` when there is no direct chat with the contact.
pub async fn get_by_contact(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<GetDirectChatByContactRequest>,
) -> Result<Json<Envelope<Option<Chat>>>, AppError> {
    let chat = backend
        .get_direct_chat_by_contact(&payload.sender_phone_number)
        .await?;

    Ok(Json(Envelope::new(chat)))
}

/// List every chat involving a contact
///
/// Returns both direct chats and groups where the contact is a member.
pub async fn by_contact(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<GetContactChatsRequest>,
) -> Result<Json<Envelope<Vec<Chat>>>, AppError> {
    let chats = backend
        .get_contact_chats(&payload.jid, payload.limit, payload.page)
        .await?;

    Ok(Json(Envelope::new(chats)))
}

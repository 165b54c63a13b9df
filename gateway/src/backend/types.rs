//! Domain records and query shapes shared with the backend
//!
//! Record shapes mirror the bridge daemon's message store rows and pass
//! through the gateway untouched. Identifiers are opaque JID-style strings
//! (`<number>@s.whatsapp.net` for a direct peer, `<number>@g.us` for a
//! group); the gateway never parses them.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A WhatsApp contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Contact {
    /// Phone number with country code, no leading `+`
    pub phone_number: String,
    /// Display name, when known
    pub name: Option<String>,
    /// JID-style identifier
    pub jid: String,
}

/// A direct or group conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Chat {
    /// JID-style identifier
    pub jid: String,
    /// Chat display name, when known
    pub name: Option<String>,
    /// Timestamp of the most recent message
    pub last_message_time: Option<DateTime<Utc>>,
    /// Content of the most recent message, when requested
    pub last_message: Option<String>,
    /// Sender of the most recent message
    pub last_sender: Option<String>,
    /// Whether the most recent message was sent by this account
    pub last_is_from_me: Option<bool>,
}

/// A single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Sender phone number or JID
    pub sender: String,
    /// Text content; empty for pure media messages
    pub content: String,
    /// Whether this account sent the message
    pub is_from_me: bool,
    /// JID of the chat the message belongs to
    pub chat_jid: String,
    /// Message identifier, unique within the chat
    pub id: String,
    /// Chat display name, when known
    pub chat_name: Option<String>,
    /// Media kind (`image`, `video`, `audio`, `document`), when present
    pub media_type: Option<String>,
}

/// A message with its surrounding context window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MessageContext {
    /// The target message
    pub message: Message,
    /// Messages immediately preceding the target
    pub before: Vec<Message>,
    /// Messages immediately following the target
    pub after: Vec<Message>,
}

/// Outcome pair reported by the send and download operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// Whether the operation succeeded
    pub success: bool,
    /// Delivery status text, or the failure reason when `success` is false
    pub message: String,
}

/// Sort order for chat listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ChatSort {
    /// Most recently active chats first
    #[default]
    LastActive,
    /// Alphabetical by chat name
    Name,
}

/// Filters for chat listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatQuery {
    /// Substring match against chat name or JID
    pub query: Option<String>,
    /// Maximum number of chats per page
    pub limit: u32,
    /// Zero-based page number
    pub page: u32,
    /// Whether to include each chat's last message
    pub include_last_message: bool,
    /// Sort order
    pub sort_by: ChatSort,
}

/// Filters for message listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageQuery {
    /// Only messages after this instant
    pub after: Option<DateTime<Utc>>,
    /// Only messages before this instant
    pub before: Option<DateTime<Utc>>,
    /// Filter by sender phone number
    pub sender_phone_number: Option<String>,
    /// Restrict to a single chat
    pub chat_jid: Option<String>,
    /// Substring match against message content
    pub query: Option<String>,
    /// Maximum number of matches per page
    pub limit: u32,
    /// Zero-based page number
    pub page: u32,
    /// Whether to interleave surrounding messages around each match
    pub include_context: bool,
    /// Messages to include before each match
    pub context_before: u32,
    /// Messages to include after each match
    pub context_after: u32,
}

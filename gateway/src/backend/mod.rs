//! Backend collaborator boundary
//!
//! All substantive messaging work (network session, local message store,
//! media handling) lives behind the [`MessagingBackend`] trait. The gateway
//! only forwards validated requests and wraps the results; it keeps no state
//! between calls and never retries.

mod bridge;
mod error;
mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use bridge::BridgeClient;
pub use error::BackendError;
pub use types::{
    Chat, ChatQuery, ChatSort, Contact, Message, MessageContext, MessageQuery, SendOutcome,
};

use async_trait::async_trait;

/// One method per gateway capability
///
/// Read-style methods surface failures as [`BackendError`]. Not-found is not
/// a failure: `get_chat`, `get_direct_chat_by_contact` and
/// `get_last_interaction` return `Ok(None)` when nothing matches. Send
/// methods report their outcome as a [`SendOutcome`] pair instead of an
/// error, and `download_media` returns `Ok(None)` when the download failed.
#[async_trait]
pub trait MessagingBackend: Send + Sync {
    /// Search contacts by name or phone number
    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, BackendError>;

    /// List chats matching the query, most recent page first
    async fn list_chats(&self, query: ChatQuery) -> Result<Vec<Chat>, BackendError>;

    /// Fetch a single chat by JID
    async fn get_chat(
        &self,
        chat_jid: &str,
        include_last_message: bool,
    ) -> Result<Option<Chat>, BackendError>;

    /// Find the direct chat with a contact by phone number
    async fn get_direct_chat_by_contact(
        &self,
        sender_phone_number: &str,
    ) -> Result<Option<Chat>, BackendError>;

    /// List every chat (direct and group) involving a contact
    async fn get_contact_chats(
        &self,
        jid: &str,
        limit: u32,
        page: u32,
    ) -> Result<Vec<Chat>, BackendError>;

    /// List messages matching the query, optionally interleaved with
    /// surrounding context
    async fn list_messages(&self, query: MessageQuery) -> Result<Vec<Message>, BackendError>;

    /// Most recent message exchanged with a contact
    async fn get_last_interaction(&self, jid: &str) -> Result<Option<Message>, BackendError>;

    /// Target message plus its surrounding context window
    async fn get_message_context(
        &self,
        message_id: &str,
        before: u32,
        after: u32,
    ) -> Result<MessageContext, BackendError>;

    /// Send a text message; the outcome carries the delivery status text
    async fn send_message(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendOutcome, BackendError>;

    /// Send a file (image, video, raw audio, document) from an absolute path
    /// on the gateway host
    async fn send_file(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError>;

    /// Send an audio file as a voice note
    ///
    /// The bridge may transcode to an Opus voice note when a converter is
    /// available; otherwise the input must already be in that codec.
    async fn send_audio_message(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError>;

    /// Download media from a message, returning the local path it was saved
    /// to
    async fn download_media(
        &self,
        message_id: &str,
        chat_jid: &str,
    ) -> Result<Option<String>, BackendError>;
}

//! Programmable in-memory backend for tests

use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    BackendError, Chat, ChatQuery, Contact, Message, MessageContext, MessageQuery,
    MessagingBackend, SendOutcome,
};

/// Backend double with canned results and call recording
///
/// Every read-style method can be made to fail via [`Self::with_failure`];
/// the recording fields expose exactly what the gateway forwarded, which is
/// how the default-parameter tests observe the request shaping.
#[derive(Default)]
pub struct MockMessagingBackend {
    contacts: Vec<Contact>,
    chats: Vec<Chat>,
    messages: Vec<Message>,
    context: Option<MessageContext>,
    last_interaction: Option<Message>,
    send_outcome: Option<SendOutcome>,
    download_path: Option<String>,
    failure: Option<String>,

    /// Chat queries received by `list_chats`
    pub chat_queries: Mutex<Vec<ChatQuery>>,
    /// `(chat_jid, include_last_message)` pairs received by `get_chat`
    pub chat_lookups: Mutex<Vec<(String, bool)>>,
    /// `(jid, limit, page)` triples received by `get_contact_chats`
    pub contact_chat_calls: Mutex<Vec<(String, u32, u32)>>,
    /// Message queries received by `list_messages`
    pub message_queries: Mutex<Vec<MessageQuery>>,
    /// `(message_id, before, after)` triples received by `get_message_context`
    pub context_calls: Mutex<Vec<(String, u32, u32)>>,
    /// `(recipient, text or media path)` pairs received by the send methods
    pub send_calls: Mutex<Vec<(String, String)>>,
}

impl MockMessagingBackend {
    /// Creates a mock that returns empty results everywhere
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canned contact list for `search_contacts`
    #[must_use]
    pub fn with_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.contacts = contacts;
        self
    }

    /// Canned chat list for the chat listing and lookup methods
    #[must_use]
    pub fn with_chats(mut self, chats: Vec<Chat>) -> Self {
        self.chats = chats;
        self
    }

    /// Canned message list for `list_messages`
    #[must_use]
    pub fn with_messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Canned context for `get_message_context`
    #[must_use]
    pub fn with_context(mut self, context: MessageContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Canned message for `get_last_interaction`
    #[must_use]
    pub fn with_last_interaction(mut self, message: Message) -> Self {
        self.last_interaction = Some(message);
        self
    }

    /// Outcome reported by the send methods
    #[must_use]
    pub fn with_send_outcome(mut self, outcome: SendOutcome) -> Self {
        self.send_outcome = Some(outcome);
        self
    }

    /// Local path reported by `download_media`; unset means download failure
    #[must_use]
    pub fn with_download_path(mut self, path: impl Into<String>) -> Self {
        self.download_path = Some(path.into());
        self
    }

    /// Makes every method fail with the given message
    #[must_use]
    pub fn with_failure(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    fn fail(&self) -> Result<(), BackendError> {
        match &self.failure {
            Some(message) => Err(BackendError::Bridge(message.clone())),
            None => Ok(()),
        }
    }

    fn outcome(&self) -> SendOutcome {
        self.send_outcome.clone().unwrap_or(SendOutcome {
            success: true,
            message: "sent".to_string(),
        })
    }
}

#[async_trait]
impl MessagingBackend for MockMessagingBackend {
    async fn search_contacts(&self, _query: &str) -> Result<Vec<Contact>, BackendError> {
        self.fail()?;
        Ok(self.contacts.clone())
    }

    async fn list_chats(&self, query: ChatQuery) -> Result<Vec<Chat>, BackendError> {
        self.fail()?;
        self.chat_queries.lock().expect("lock poisoned").push(query);
        Ok(self.chats.clone())
    }

    async fn get_chat(
        &self,
        chat_jid: &str,
        include_last_message: bool,
    ) -> Result<Option<Chat>, BackendError> {
        self.fail()?;
        self.chat_lookups
            .lock()
            .expect("lock poisoned")
            .push((chat_jid.to_string(), include_last_message));
        Ok(self.chats.iter().find(|c| c.jid == chat_jid).cloned())
    }

    async fn get_direct_chat_by_contact(
        &self,
        sender_phone_number: &str,
    ) -> Result<Option<Chat>, BackendError> {
        self.fail()?;
        Ok(self
            .chats
            .iter()
            .find(|c| c.jid.starts_with(sender_phone_number))
            .cloned())
    }

    async fn get_contact_chats(
        &self,
        jid: &str,
        limit: u32,
        page: u32,
    ) -> Result<Vec<Chat>, BackendError> {
        self.fail()?;
        self.contact_chat_calls
            .lock()
            .expect("lock poisoned")
            .push((jid.to_string(), limit, page));
        Ok(self.chats.clone())
    }

    async fn list_messages(&self, query: MessageQuery) -> Result<Vec<Message>, BackendError> {
        self.fail()?;
        self.message_queries
            .lock()
            .expect("lock poisoned")
            .push(query);
        Ok(self.messages.clone())
    }

    async fn get_last_interaction(&self, _jid: &str) -> Result<Option<Message>, BackendError> {
        self.fail()?;
        Ok(self.last_interaction.clone())
    }

    async fn get_message_context(
        &self,
        message_id: &str,
        before: u32,
        after: u32,
    ) -> Result<MessageContext, BackendError> {
        self.fail()?;
        self.context_calls
            .lock()
            .expect("lock poisoned")
            .push((message_id.to_string(), before, after));
        self.context
            .clone()
            .ok_or_else(|| BackendError::Bridge("message not found".to_string()))
    }

    async fn send_message(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.fail()?;
        self.send_calls
            .lock()
            .expect("lock poisoned")
            .push((recipient.to_string(), message.to_string()));
        Ok(self.outcome())
    }

    async fn send_file(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.fail()?;
        self.send_calls
            .lock()
            .expect("lock poisoned")
            .push((recipient.to_string(), media_path.to_string()));
        Ok(self.outcome())
    }

    async fn send_audio_message(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.fail()?;
        self.send_calls
            .lock()
            .expect("lock poisoned")
            .push((recipient.to_string(), media_path.to_string()));
        Ok(self.outcome())
    }

    async fn download_media(
        &self,
        _message_id: &str,
        _chat_jid: &str,
    ) -> Result<Option<String>, BackendError> {
        self.fail()?;
        Ok(self.download_path.clone())
    }
}

//! HTTP client to the messaging bridge daemon
//!
//! The bridge owns the messaging-network session, the local message store
//! and media handling; it exposes one JSON call per capability under
//! `/rpc/<name>`. This client forwards each call and decodes the typed
//! result. It adds no retries, caching or session logic.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::{
    BackendError, Chat, ChatQuery, Contact, Message, MessageContext, MessageQuery,
    MessagingBackend, SendOutcome,
};

/// Request timeout for bridge calls
const REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Typed HTTP client for the bridge daemon's JSON API
pub struct BridgeClient {
    base_url: String,
    http_client: Client,
}

impl BridgeClient {
    /// Creates a new bridge client
    ///
    /// # Panics
    ///
    /// If the HTTP client fails to be created
    #[must_use]
    pub fn new(base_url: String) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            http_client,
        }
    }

    async fn call<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, BackendError>
    where
        Req: Serialize + Sync,
        Resp: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);

        let response = self
            .http_client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|err| BackendError::Bridge(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(BackendError::Bridge(format!(
                "bridge returned {status}: {detail}"
            )));
        }

        response
            .json::<Resp>()
            .await
            .map_err(|err| BackendError::InvalidResponse(err.to_string()))
    }
}

#[derive(Serialize)]
struct QueryCall<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct ChatCall<'a> {
    chat_jid: &'a str,
    include_last_message: bool,
}

#[derive(Serialize)]
struct PhoneCall<'a> {
    sender_phone_number: &'a str,
}

#[derive(Serialize)]
struct ContactChatsCall<'a> {
    jid: &'a str,
    limit: u32,
    page: u32,
}

#[derive(Serialize)]
struct JidCall<'a> {
    jid: &'a str,
}

#[derive(Serialize)]
struct ContextCall<'a> {
    message_id: &'a str,
    before: u32,
    after: u32,
}

#[derive(Serialize)]
struct TextSendCall<'a> {
    recipient: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct MediaSendCall<'a> {
    recipient: &'a str,
    media_path: &'a str,
}

#[derive(Serialize)]
struct DownloadCall<'a> {
    message_id: &'a str,
    chat_jid: &'a str,
}

#[derive(Deserialize)]
struct DownloadResult {
    file_path: Option<String>,
}

#[async_trait]
impl MessagingBackend for BridgeClient {
    async fn search_contacts(&self, query: &str) -> Result<Vec<Contact>, BackendError> {
        self.call("/rpc/search_contacts", &QueryCall { query }).await
    }

    async fn list_chats(&self, query: ChatQuery) -> Result<Vec<Chat>, BackendError> {
        self.call("/rpc/list_chats", &query).await
    }

    async fn get_chat(
        &self,
        chat_jid: &str,
        include_last_message: bool,
    ) -> Result<Option<Chat>, BackendError> {
        self.call(
            "/rpc/get_chat",
            &ChatCall {
                chat_jid,
                include_last_message,
            },
        )
        .await
    }

    async fn get_direct_chat_by_contact(
        &self,
        sender_phone_number: &str,
    ) -> Result<Option<Chat>, BackendError> {
        self.call(
            "/rpc/get_direct_chat_by_contact",
            &PhoneCall {
                sender_phone_number,
            },
        )
        .await
    }

    async fn get_contact_chats(
        &self,
        jid: &str,
        limit: u32,
        page: u32,
    ) -> Result<Vec<Chat>, BackendError> {
        self.call("/rpc/get_contact_chats", &ContactChatsCall { jid, limit, page })
            .await
    }

    async fn list_messages(&self, query: MessageQuery) -> Result<Vec<Message>, BackendError> {
        self.call("/rpc/list_messages", &query).await
    }

    async fn get_last_interaction(&self, jid: &str) -> Result<Option<Message>, BackendError> {
        self.call("/rpc/get_last_interaction", &JidCall { jid }).await
    }

    async fn get_message_context(
        &self,
        message_id: &str,
        before: u32,
        after: u32,
    ) -> Result<MessageContext, BackendError> {
        self.call(
            "/rpc/get_message_context",
            &ContextCall {
                message_id,
                before,
                after,
            },
        )
        .await
    }

    async fn send_message(
        &self,
        recipient: &str,
        message: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.call("/rpc/send_message", &TextSendCall { recipient, message })
            .await
    }

    async fn send_file(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.call(
            "/rpc/send_file",
            &MediaSendCall {
                recipient,
                media_path,
            },
        )
        .await
    }

    async fn send_audio_message(
        &self,
        recipient: &str,
        media_path: &str,
    ) -> Result<SendOutcome, BackendError> {
        self.call(
            "/rpc/send_audio_message",
            &MediaSendCall {
                recipient,
                media_path,
            },
        )
        .await
    }

    async fn download_media(
        &self,
        message_id: &str,
        chat_jid: &str,
    ) -> Result<Option<String>, BackendError> {
        let result: DownloadResult = self
            .call(
                "/rpc/download_media",
                &DownloadCall {
                    message_id,
                    chat_jid,
                },
            )
            .await?;

        Ok(result.file_path)
    }
}

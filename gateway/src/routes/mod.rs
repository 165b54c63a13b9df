mod chats;
mod contacts;
mod docs;
mod health;
mod media;
mod messages;
mod send;

use aide::axum::{
    routing::{get, post},
    ApiRouter,
};

/// Creates the router with all handler routes
pub fn handler() -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler())
        .api_route("/health", get(health::handler))
        .api_route("/api/contacts/search", post(contacts::search))
        .api_route("/api/chats/list", post(chats::list))
        .api_route("/api/chats/get", post(chats::get))
        .api_route("/api/chats/get_by_contact", post(chats::get_by_contact))
        .api_route("/api/chats/by_contact", post(chats::by_contact))
        .api_route("/api/messages/list", post(messages::list))
        .api_route(
            "/api/messages/last_interaction",
            post(messages::last_interaction),
        )
        .api_route("/api/messages/context", post(messages::context))
        .api_route("/api/send/message", post(send::message))
        .api_route("/api/send/file", post(send::file))
        .api_route("/api/send/audio", post(send::audio))
        .api_route("/api/media/download", post(media::download))
}

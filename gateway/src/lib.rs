//! WhatsApp Voice Gateway service
//!
//! REST façade that exposes messaging operations (contact search, chat and
//! message listing, message/media send, media download) for voice-assistant
//! clients. All substantive messaging work happens in the bridge daemon; the
//! gateway validates requests, forwards them through the
//! [`backend::MessagingBackend`] trait and wraps every outcome into a uniform
//! `{success, data|error}` envelope.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Backend collaborator boundary
pub mod backend;

/// Route handlers
pub mod routes;

/// HTTP server setup
pub mod server;

/// Envelopes, errors, extractors and configuration
pub mod types;

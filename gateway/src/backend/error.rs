//! Backend failure type

use thiserror::Error;

/// Failure raised by the backend collaborator
///
/// The gateway surfaces every variant as HTTP 500 with the display text as
/// the error string; it never maps variants to distinct statuses.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The bridge daemon is unreachable or reported a failure
    #[error("bridge error: {0}")]
    Bridge(String),

    /// The bridge returned a payload the gateway could not decode
    #[error("invalid bridge response: {0}")]
    InvalidResponse(String),
}

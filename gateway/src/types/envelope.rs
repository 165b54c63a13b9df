//! Success envelope shared by every endpoint

use schemars::JsonSchema;
use serde::Serialize;

/// Uniform success wrapper: `{"success": true, "data": <T>}`
///
/// `T` is endpoint-specific and passed through from the backend untouched.
#[derive(Debug, Serialize, JsonSchema)]
pub struct Envelope<T> {
    /// Always `true` for a success response
    pub success: bool,
    /// Endpoint-specific payload
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wraps a backend result into the success envelope
    pub const fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

//! Universal error handling for the API
//!
//! Every failure path funnels through [`AppError`], the single translation
//! boundary between backend/validation failures and HTTP responses.

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::Serialize;

use crate::backend::BackendError;

/// Error envelope returned on every failure path:
/// `{"success": false, "error": "<message>"}`
#[derive(Debug, Serialize, JsonSchema)]
pub struct ErrorEnvelope {
    /// Always `false` for an error response
    pub success: bool,
    /// Human-readable failure description
    pub error: String,
}

/// Application error type that wraps the error envelope
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Create an error with an explicit status code
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Backend failure surfaced as HTTP 500
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Request validation failure, rejected before the backend is invoked
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {}", self.message),
            500..=599 => tracing::error!("Server error: {}", self.message),
            _ => {}
        }

        let body = ErrorEnvelope {
            success: false,
            error: self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

/// Any backend failure maps to a 500 with the failure's display text;
/// the gateway does not distinguish error kinds at the HTTP level
impl From<BackendError> for AppError {
    fn from(err: BackendError) -> Self {
        Self::internal(err.to_string())
    }
}

impl OperationOutput for AppError {
    type Inner = ErrorEnvelope;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ErrorEnvelope>::operation_response(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_become_500() {
        let err = AppError::from(BackendError::Bridge("not connected".to_string()));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_errors_become_422() {
        let response = AppError::validation("missing field").into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

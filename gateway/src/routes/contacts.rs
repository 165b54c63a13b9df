use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    backend::{Contact, MessagingBackend},
    types::{AppError, Envelope, ValidatedJson},
};

#[derive(Debug, Deserialize, Serialize, JsonSchema, Validate)]
pub struct SearchContactsRequest {
    /// Search term matched against contact names or phone numbers
    #[validate(length(min = 1))]
    pub query: String,
}

/// Search contacts by name or phone number
///
/// Returns the matching contacts with their phone numbers, names and JIDs.
pub async fn search(
    Extension(backend): Extension<Arc<dyn MessagingBackend>>,
    ValidatedJson(payload): ValidatedJson<SearchContactsRequest>,
) -> Result<Json<Envelope<Vec<Contact>>>, AppError> {
    let contacts = backend.search_contacts(&payload.query).await?;

    Ok(Json(Envelope::new(contacts)))
}

// delicia_api/src/services/contact.rs
use tracing::{info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::ContactPayload;
use crate::store::{DocumentStore, NewDocument, CONTACT_SUBMISSIONS_COLLECTION};

pub const SUBMIT_CONTACT_FAILED: &str = "Failed to submit contact form.";

/// Validates and stores one contact form submission, returning its id.
#[instrument(name = "contact::submit_contact", skip(store, payload))]
pub async fn submit_contact(store: &dyn DocumentStore, payload: ContactPayload) -> AppResult<String> {
  let submission = payload.into_document()?;

  let document = NewDocument::from_serializable(&submission)
    .map_err(|e| AppError::store(SUBMIT_CONTACT_FAILED, e))?
    .with_server_timestamp("submittedAt");

  let written = store
    .add(CONTACT_SUBMISSIONS_COLLECTION, document)
    .await
    .map_err(|e| AppError::store(SUBMIT_CONTACT_FAILED, e))?;

  info!(submission_id = %written.id, subject = %submission.subject, "Contact submission stored.");
  Ok(written.id)
}

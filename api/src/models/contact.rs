// delicia_api/src/models/contact.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{non_blank, DEFAULT_SUBJECT};
use crate::errors::{AppError, Result};

pub const MISSING_CONTACT_FIELDS: &str = "Missing required fields: name, email, and message.";

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactPayload {
  pub name: Option<String>,
  pub email: Option<String>,
  pub subject: Option<String>,
  pub message: Option<String>,
}

impl ContactPayload {
  pub fn into_document(self) -> Result<ContactSubmissionDocument> {
    match (non_blank(self.name), non_blank(self.email), non_blank(self.message)) {
      (Some(name), Some(email), Some(message)) => Ok(ContactSubmissionDocument {
        name,
        email,
        subject: non_blank(self.subject).unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
        message,
        submitted_at: None,
      }),
      _ => Err(AppError::Validation(MISSING_CONTACT_FIELDS.to_string())),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmissionDocument {
  pub name: String,
  pub email: String,
  pub subject: String,
  pub message: String,
  #[serde(rename = "submittedAt", skip_serializing_if = "Option::is_none")]
  pub submitted_at: Option<DateTime<Utc>>,
}

// delicia_api/src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum AppError {
  /// Missing or malformed client input. Always a 400, never a server fault.
  #[error("Validation Error: {0}")]
  Validation(String),

  /// A document store failure. `message` is what the caller sees; `source`
  /// stays in the server logs.
  #[error("Store Error: {message}: {source}")]
  Store {
    message: &'static str,
    #[source]
    source: StoreError,
  },

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Seed Data Error: {0}")]
  Seed(String),
}

impl AppError {
  /// Wraps a store failure with the generic message returned to the client.
  pub fn store(message: &'static str, source: StoreError) -> Self {
    AppError::Store { message, source }
  }
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    match self {
      AppError::Validation(m) => {
        tracing::warn!(reason = %m, "Rejecting request with validation error");
        HttpResponse::BadRequest().json(json!({ "message": m }))
      }
      AppError::Store { message, source } => {
        tracing::error!(error = %source, "{}", message);
        HttpResponse::InternalServerError().json(json!({ "message": message }))
      }
      AppError::Config(m) | AppError::Seed(m) => {
        tracing::error!(application_error = %m, "Responding with internal error");
        HttpResponse::InternalServerError().json(json!({ "message": "An internal error occurred." }))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;

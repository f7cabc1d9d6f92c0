// delicia_api/src/web/handlers/contact_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::instrument;

use crate::errors::AppError;
use crate::models::ContactPayload;
use crate::services::contact;
use crate::state::AppState;

#[instrument(
  name = "handler::submit_contact",
  skip(app_state, req_payload),
  fields(req_email = ?req_payload.email)
)]
pub async fn submit_contact_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<ContactPayload>,
) -> Result<HttpResponse, AppError> {
  let id = contact::submit_contact(app_state.store.as_ref(), req_payload.into_inner()).await?;

  Ok(HttpResponse::Created().json(json!({
      "message": "Contact form submitted successfully!",
      "id": id,
  })))
}

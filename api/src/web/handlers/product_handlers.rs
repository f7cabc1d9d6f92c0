// delicia_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::CreateProductPayload;
use crate::services::catalog;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = catalog::list_products(app_state.store.as_ref()).await?;
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(
  name = "handler::create_product",
  skip(app_state, req_payload),
  fields(req_name = ?req_payload.name)
)]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  req_payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, AppError> {
  let created = catalog::create_product(app_state.store.as_ref(), req_payload.into_inner()).await?;
  info!("Product {} created.", created.id);

  Ok(HttpResponse::Created().json(json!({
      "message": "Product added successfully!",
      "id": created.id,
      "product": created.product,
  })))
}

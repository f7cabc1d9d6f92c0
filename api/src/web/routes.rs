// delicia_api/src/web/routes.rs

use actix_cors::Cors;
use actix_web::{web, HttpRequest, HttpResponse};

use crate::errors::AppError;
use crate::web::handlers::{contact_handlers, product_handlers};

pub const WELCOME_MESSAGE: &str = "Welcome to the Delicia Bakery API!";

async fn welcome_handler() -> HttpResponse {
  HttpResponse::Ok().json(serde_json::json!({ "message": WELCOME_MESSAGE }))
}

/// Cross-origin policy for every route: any origin, method and header.
pub fn cors() -> Cors {
  Cors::permissive()
}

/// Turns unparsable or mistyped JSON bodies into a 400 with a `{message}` body.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| {
    AppError::Validation(format!("Invalid JSON payload: {}", err)).into()
  })
}

pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .route("/", web::get().to(welcome_handler))
    .service(
      web::scope("/api")
        .service(
          web::resource("/products")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        .route("/contact", web::post().to(contact_handlers::submit_contact_handler)),
    );
}

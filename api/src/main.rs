// delicia_api/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use std::sync::Arc;

use delicia_api::config::AppConfig;
use delicia_api::state::AppState;
use delicia_api::store::PgDocumentStore;
use delicia_api::{telemetry, web};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  telemetry::init_tracing();
  tracing::info!("Starting Delicia Bakery API server...");

  let app_config = match AppConfig::from_env() {
    Ok(cfg) => cfg,
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
    }
  };

  let store = match PgDocumentStore::connect(&app_config.database_url, app_config.database_max_connections).await {
    Ok(store) => store,
    Err(e) => {
      tracing::error!(error = %e, "Failed to connect to the document store.");
      return Err(std::io::Error::new(std::io::ErrorKind::ConnectionRefused, e.to_string()));
    }
  };
  if let Err(e) = store.ensure_schema().await {
    tracing::error!(error = %e, "Failed to prepare the document store schema.");
    return Err(std::io::Error::other(e.to_string()));
  }

  let app_state = AppState::new(Arc::new(store));

  let server_address = app_config.bind_address();
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(web::cors())
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(web::configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

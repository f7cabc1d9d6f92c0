// delicia_api/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 5001;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

fn get_env(var_name: &str) -> Result<String> {
  env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,
  pub database_max_connections: u32,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    // SERVER_PORT wins; PORT is what most hosting platforms inject.
    let server_port = match get_env("SERVER_PORT").or_else(|_| get_env("PORT")) {
      Ok(raw) => raw
        .parse::<u16>()
        .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?,
      Err(_) => DEFAULT_PORT,
    };
    let database_url = get_env("DATABASE_URL")?;
    let database_max_connections = match get_env("DATABASE_MAX_CONNECTIONS") {
      Ok(raw) => raw
        .parse::<u32>()
        .map_err(|e| AppError::Config(format!("Invalid DATABASE_MAX_CONNECTIONS: {}", e)))?,
      Err(_) => DEFAULT_MAX_CONNECTIONS,
    };

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      database_max_connections,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}

/// Settings for the one-shot seed importer.
#[derive(Debug, Clone)]
pub struct ImportConfig {
  pub database_url: String,
  /// When unset the importer uses the seed list bundled into the binary.
  pub seed_products_file: Option<PathBuf>,
}

impl ImportConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let database_url = get_env("DATABASE_URL")?;
    let seed_products_file = get_env("SEED_PRODUCTS_FILE").ok().map(PathBuf::from);

    Ok(Self {
      database_url,
      seed_products_file,
    })
  }
}

// delicia_api/src/bin/import_products.rs

//! Loads the seed product list into the products collection once.
//!
//! Exits 0 when every record has been attempted, even if some were not
//! added. Exits 1 only when the run cannot start: bad configuration,
//! unreachable store, or an unreadable seed list.

use anyhow::Context;
use std::process::ExitCode;

use delicia_api::config::ImportConfig;
use delicia_api::services::importer;
use delicia_api::store::PgDocumentStore;
use delicia_api::telemetry;

async fn run() -> anyhow::Result<importer::ImportReport> {
  let config = ImportConfig::from_env()?;

  let store = PgDocumentStore::connect(&config.database_url, 1)
    .await
    .context("connecting to the document store")?;
  store.ensure_schema().await.context("preparing the document store schema")?;

  Ok(importer::run_import(&store, config.seed_products_file.as_deref()).await?)
}

#[tokio::main]
async fn main() -> ExitCode {
  telemetry::init_tracing();

  let outcome = run().await;
  match &outcome {
    Ok(report) if !report.failed.is_empty() => {
      tracing::warn!(failed = ?report.failed, "{} products could not be added.", report.failed.len());
    }
    Ok(_) => {}
    Err(e) => tracing::error!(error = ?e, "An unhandled error occurred during import."),
  }

  ExitCode::from(importer::exit_status(&outcome))
}

// delicia_api/src/services/importer.rs

//! One-shot load of the seed product list into the products collection.
//!
//! Records are converted and written one at a time, in order. A record that
//! cannot be converted or written is logged and counted, and the loop moves on
//! to the next one.

use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{LegacyProductRecord, SeedProductDocument};
use crate::store::{DocumentStore, NewDocument, StoreError, PRODUCTS_COLLECTION};

/// Seed list bundled with the importer binary.
pub const BUNDLED_SEED_PRODUCTS: &str = include_str!("../../seed/products.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
  pub successful: usize,
  /// Names of the records that were not added, in input order.
  pub failed: Vec<String>,
}

#[derive(Debug, Error)]
enum RecordError {
  #[error("Malformed seed record: {0}")]
  Malformed(serde_json::Error),

  #[error(transparent)]
  Store(#[from] StoreError),
}

/// Parses the seed list as a JSON array. Individual records are checked
/// later, one by one, during the import.
pub fn parse_seed_products(raw: &str) -> AppResult<Vec<Value>> {
  serde_json::from_str(raw).map_err(|e| AppError::Seed(format!("Invalid seed product list: {}", e)))
}

/// Reads the seed list from `path`, or the bundled list when `path` is `None`.
pub async fn load_seed_products(path: Option<&Path>) -> AppResult<Vec<Value>> {
  match path {
    Some(path) => {
      let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| AppError::Seed(format!("Cannot read seed file '{}': {}", path.display(), e)))?;
      parse_seed_products(&raw)
    }
    None => parse_seed_products(BUNDLED_SEED_PRODUCTS),
  }
}

fn record_name(record: &Value, index: usize) -> String {
  match record.get("name").and_then(Value::as_str) {
    Some(name) => name.to_string(),
    None => format!("record #{}", index + 1),
  }
}

async fn import_one(store: &dyn DocumentStore, record: Value) -> Result<String, RecordError> {
  let legacy: LegacyProductRecord = serde_json::from_value(record).map_err(RecordError::Malformed)?;
  let mapped = SeedProductDocument::from(legacy);
  let document = NewDocument::from_serializable(&mapped)?.with_server_timestamp("createdAt");
  Ok(store.add(PRODUCTS_COLLECTION, document).await?.id)
}

#[instrument(name = "importer::import_products", skip_all, fields(records = records.len()))]
pub async fn import_products(store: &dyn DocumentStore, records: Vec<Value>) -> ImportReport {
  info!("Starting product import.");
  let mut report = ImportReport::default();

  for (index, record) in records.into_iter().enumerate() {
    let name = record_name(&record, index);
    match import_one(store, record).await {
      Ok(id) => {
        report.successful += 1;
        info!(product_id = %id, "Successfully added: {}", name);
      }
      Err(e) => {
        error!(error = %e, "Failed to add {}", name);
        report.failed.push(name);
      }
    }
  }

  info!(
    successful = report.successful,
    failed = report.failed.len(),
    "Data import complete! {} products added.",
    report.successful
  );
  report
}

/// Loads the seed list and imports it into `store`. Only an unreadable list
/// is an error; per-record failures end up in the report.
pub async fn run_import(store: &dyn DocumentStore, seed_file: Option<&Path>) -> AppResult<ImportReport> {
  let records = load_seed_products(seed_file).await?;
  Ok(import_products(store, records).await)
}

/// Process exit status for an import run: 0 once the loop has completed,
/// whatever the per-record outcomes, and 1 when the run failed outright.
pub fn exit_status<E>(outcome: &Result<ImportReport, E>) -> u8 {
  match outcome {
    Ok(_) => 0,
    Err(_) => 1,
  }
}

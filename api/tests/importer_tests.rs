// tests/importer_tests.rs
mod common;
use common::*;

use delicia_api::errors::AppError;
use delicia_api::services::importer::{self, ImportReport};
use delicia_api::store::{DocumentStore, MemoryDocumentStore, PRODUCTS_COLLECTION};
use serde_json::{json, Value};
use serial_test::serial;
use std::io::Write;

fn three_records() -> Vec<Value> {
  importer::parse_seed_products(
    &json!([
      { "id": "1", "name": "Croissant", "imageUrl": "http://img/1.png", "tags": ["Pastry"] },
      { "id": "2", "name": "Baguette", "imageUrl": "http://img/2.png", "tags": ["Bread"] },
      { "id": "3", "name": "Macaron", "imageUrl": "http://img/3.png", "tags": [] }
    ])
    .to_string(),
  )
  .unwrap()
}

async fn written_names(store: &dyn DocumentStore) -> Vec<String> {
  store
    .get(PRODUCTS_COLLECTION)
    .await
    .unwrap()
    .iter()
    .map(|d| d.data["name"].as_str().unwrap().to_string())
    .collect()
}

#[tokio::test]
#[serial]
async fn test_import_continues_past_failed_record() {
  setup_tracing();
  let store = FlakyStore::failing_writes_for(&["Baguette"]);

  let report = importer::import_products(&store, three_records()).await;

  assert_eq!(
    report,
    ImportReport {
      successful: 2,
      failed: vec!["Baguette".to_string()],
    }
  );
  assert_eq!(store.add_attempts(), 3);
  assert_eq!(written_names(&store.inner).await, vec!["Croissant", "Macaron"]);
}

#[tokio::test]
#[serial]
async fn test_malformed_record_does_not_stop_import() {
  setup_tracing();
  let store = MemoryDocumentStore::new();
  let records = importer::parse_seed_products(
    &json!([
      { "id": "1", "name": "Croissant", "imageUrl": "http://img/1.png", "tags": ["Pastry"] },
      { "id": "2", "name": "Baguette", "imageUrl": "http://img/2.png", "tags": "Bread" },
      { "id": "3", "imageUrl": "http://img/3.png", "tags": ["Nameless"] },
      { "id": "4", "name": "Macaron", "imageUrl": "http://img/4.png", "tags": [] }
    ])
    .to_string(),
  )
  .unwrap();
  assert_eq!(records.len(), 4);

  let report = importer::import_products(&store, records).await;

  assert_eq!(
    report,
    ImportReport {
      successful: 2,
      failed: vec!["Baguette".to_string(), "record #3".to_string()],
    }
  );
  assert_eq!(written_names(&store).await, vec!["Croissant", "Macaron"]);
}

#[tokio::test]
#[serial]
async fn test_imported_document_shape() {
  setup_tracing();
  let store = MemoryDocumentStore::new();
  let records = importer::parse_seed_products(
    &json!([{ "id": "x", "name": "Croissant", "imageUrl": "http://img/1.png", "tags": ["Pastry", "Breakfast"] }])
      .to_string(),
  )
  .unwrap();

  let report = importer::import_products(&store, records).await;
  assert_eq!(report.successful, 1);
  assert!(report.failed.is_empty());

  let written = store.get(PRODUCTS_COLLECTION).await.unwrap();
  assert_eq!(written.len(), 1);
  let mut data = written[0].data.clone();
  assert_ne!(written[0].id, "x");

  let created_at = data.remove("createdAt").expect("createdAt should be stamped");
  assert!(created_at.is_string());
  assert_eq!(
    Value::Object(data),
    json!({
      "name": "Croissant",
      "product_images": ["http://img/1.png"],
      "category": "Pastry",
      "tags": ["Pastry", "Breakfast"]
    })
  );
}

#[tokio::test]
#[serial]
async fn test_bundled_seed_list_imports_fully() {
  setup_tracing();
  let store = MemoryDocumentStore::new();
  let records = importer::load_seed_products(None).await.unwrap();
  let expected = records.len();
  assert!(expected > 0);

  let report = importer::import_products(&store, records).await;
  assert_eq!(report.successful, expected);
  assert!(report.failed.is_empty());
  assert_eq!(store.len(PRODUCTS_COLLECTION), expected);

  let listed = delicia_api::services::catalog::list_products(&store).await.unwrap();
  assert_eq!(listed.len(), expected);
  assert!(listed.iter().all(|p| {
    p["id"].is_string() && p["product_images"].as_array().map(Vec::len) == Some(1) && p["createdAt"].is_string()
  }));
}

#[tokio::test]
#[serial]
async fn test_unreadable_seed_list_is_an_error() {
  setup_tracing();
  match importer::parse_seed_products("{\"name\": \"not a list\"}") {
    Err(AppError::Seed(_)) => {}
    other => panic!("Expected AppError::Seed, got {:?}", other),
  }

  let missing = std::path::Path::new("/definitely/not/here/products.json");
  match importer::load_seed_products(Some(missing)).await {
    Err(AppError::Seed(m)) => assert!(m.contains("products.json")),
    other => panic!("Expected AppError::Seed, got {:?}", other),
  }
}

#[tokio::test]
#[serial]
async fn test_run_import_exit_status() {
  setup_tracing();

  // Per-record failures still complete the run.
  let mut seed_file = std::env::temp_dir();
  seed_file.push(format!("delicia-seed-{}.json", uuid::Uuid::new_v4()));
  {
    let mut file = std::fs::File::create(&seed_file).unwrap();
    let records: Vec<Value> = three_records();
    file.write_all(Value::Array(records).to_string().as_bytes()).unwrap();
  }
  let store = FlakyStore::failing_writes_for(&["Baguette"]);
  let outcome = importer::run_import(&store, Some(seed_file.as_path())).await;
  std::fs::remove_file(&seed_file).ok();

  assert_eq!(importer::exit_status(&outcome), 0);
  let report = outcome.unwrap();
  assert_eq!(report.successful, 2);
  assert_eq!(report.failed, vec!["Baguette".to_string()]);

  // An unreadable list fails the run before any write.
  let store = FlakyStore::default();
  let outcome = importer::run_import(&store, Some(std::path::Path::new("/definitely/not/here/products.json"))).await;
  assert!(matches!(outcome, Err(AppError::Seed(_))));
  assert_eq!(importer::exit_status(&outcome), 1);
  assert_eq!(store.add_attempts(), 0);
}

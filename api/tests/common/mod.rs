// tests/common/mod.rs
#![allow(dead_code)] // Allow unused code in this common test module

use async_trait::async_trait;
use delicia_api::store::{DocumentStore, MemoryDocumentStore, NewDocument, StoreError, StoredDocument, WriteResult};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::Level;

// --- Helper for Tracing Setup ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

/// Memory store that fails writes for chosen document names, and optionally
/// every read.
#[derive(Debug, Default)]
pub struct FlakyStore {
  pub inner: MemoryDocumentStore,
  failing_names: Vec<String>,
  fail_all_writes: bool,
  fail_reads: bool,
  add_attempts: AtomicUsize,
}

impl FlakyStore {
  pub fn failing_writes_for(names: &[&str]) -> Self {
    Self {
      failing_names: names.iter().map(|n| n.to_string()).collect(),
      ..Self::default()
    }
  }

  pub fn failing_all_writes() -> Self {
    Self {
      fail_all_writes: true,
      ..Self::default()
    }
  }

  pub fn failing_reads() -> Self {
    Self {
      fail_reads: true,
      ..Self::default()
    }
  }

  pub fn add_attempts(&self) -> usize {
    self.add_attempts.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl DocumentStore for FlakyStore {
  async fn add(&self, collection: &str, document: NewDocument) -> Result<WriteResult, StoreError> {
    self.add_attempts.fetch_add(1, Ordering::SeqCst);
    let name = document.fields.get("name").and_then(Value::as_str).unwrap_or_default();
    if self.fail_all_writes || self.failing_names.iter().any(|n| n == name) {
      return Err(StoreError::Unavailable(format!("simulated write failure for '{}'", name)));
    }
    self.inner.add(collection, document).await
  }

  async fn get(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
    if self.fail_reads {
      return Err(StoreError::Unavailable("simulated read failure".to_string()));
    }
    self.inner.get(collection).await
  }
}

/// Builds the routed app over the given store for `actix_web::test` calls.
macro_rules! init_app {
  ($store:expr) => {
    actix_web::test::init_service(
      actix_web::App::new()
        .app_data(actix_web::web::Data::new(delicia_api::AppState::new($store)))
        .wrap(delicia_api::web::cors())
        .configure(delicia_api::web::configure_app_routes),
    )
    .await
  };
}

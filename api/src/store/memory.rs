// delicia_api/src/store/memory.rs

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

use super::{DocumentStore, NewDocument, StoreError, StoredDocument, WriteResult};

/// In-process document store. Collections keep insertion order.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
  collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn len(&self, collection: &str) -> usize {
    self.collections.read().get(collection).map_or(0, Vec::len)
  }

  pub fn is_empty(&self, collection: &str) -> bool {
    self.len(collection) == 0
  }

  pub fn find(&self, collection: &str, id: &str) -> Option<StoredDocument> {
    self
      .collections
      .read()
      .get(collection)
      .and_then(|docs| docs.iter().find(|doc| doc.id == id).cloned())
  }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
  async fn add(&self, collection: &str, document: NewDocument) -> Result<WriteResult, StoreError> {
    let id = Uuid::new_v4().to_string();
    let write_time = Utc::now();
    let data = document.resolve(write_time);

    self
      .collections
      .write()
      .entry(collection.to_string())
      .or_default()
      .push(StoredDocument { id: id.clone(), data });

    tracing::debug!(collection, %id, "Document added to memory store.");
    Ok(WriteResult { id, write_time })
  }

  async fn get(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
    Ok(self.collections.read().get(collection).cloned().unwrap_or_default())
  }
}

// delicia_api/src/store/mod.rs

//! Collection-oriented document store used by the services and the importer.
//!
//! The store owns identity and time: it assigns every new document an opaque
//! id and resolves server-timestamp fields with its own clock when the write
//! happens.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub mod memory;
pub mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::PgDocumentStore;

pub const PRODUCTS_COLLECTION: &str = "products";
pub const CONTACT_SUBMISSIONS_COLLECTION: &str = "contactSubmissions";

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Document serialization error: {0}")]
  Serialization(#[from] serde_json::Error),

  #[error("Document is not a JSON object")]
  NotAnObject,

  #[error("Store unavailable: {0}")]
  Unavailable(String),
}

/// A document about to be written: its fields plus the names of fields the
/// store must fill with its own clock at write time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDocument {
  pub fields: Map<String, Value>,
  pub server_timestamp_fields: Vec<String>,
}

impl NewDocument {
  /// Serializes `value`, which must produce a JSON object.
  pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self, StoreError> {
    match serde_json::to_value(value)? {
      Value::Object(fields) => Ok(Self {
        fields,
        server_timestamp_fields: Vec::new(),
      }),
      _ => Err(StoreError::NotAnObject),
    }
  }

  /// Marks `field` as a server timestamp sentinel.
  pub fn with_server_timestamp(mut self, field: impl Into<String>) -> Self {
    let field = field.into();
    self.fields.remove(&field);
    self.server_timestamp_fields.push(field);
    self
  }

  /// The fields as they end up stored once timestamps resolve to `write_time`.
  pub fn resolve(mut self, write_time: DateTime<Utc>) -> Map<String, Value> {
    for field in self.server_timestamp_fields.drain(..) {
      self.fields.insert(field, Value::String(write_time.to_rfc3339()));
    }
    self.fields
  }
}

/// Outcome of a successful `add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
  pub id: String,
  pub write_time: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
  pub id: String,
  pub data: Map<String, Value>,
}

impl StoredDocument {
  /// Flattens into `{id, ...fields}`; the store id wins over any `id` field.
  pub fn into_json(self) -> Map<String, Value> {
    let mut object = self.data;
    object.insert("id".to_string(), Value::String(self.id));
    object
  }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
  /// Writes one new document into `collection`.
  async fn add(&self, collection: &str, document: NewDocument) -> Result<WriteResult, StoreError>;

  /// Reads every document in `collection`, in store-native (insertion) order.
  async fn get(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError>;
}

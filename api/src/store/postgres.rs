// delicia_api/src/store/postgres.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::{error, info, instrument};
use uuid::Uuid;

use super::{DocumentStore, NewDocument, StoreError, StoredDocument, WriteResult};

const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
  seq BIGSERIAL PRIMARY KEY,
  id TEXT NOT NULL UNIQUE,
  collection TEXT NOT NULL,
  data JSONB NOT NULL,
  written_at TIMESTAMPTZ NOT NULL
)
"#;

const CREATE_COLLECTION_INDEX: &str =
  "CREATE INDEX IF NOT EXISTS documents_collection_seq_idx ON documents (collection, seq)";

// Every field named in $4 is set to the database clock. now() is fixed for the
// statement, so written_at and the stamped fields agree.
const INSERT_DOCUMENT: &str = r#"
INSERT INTO documents (id, collection, data, written_at)
VALUES (
  $1,
  $2,
  $3::jsonb || COALESCE(
    (SELECT jsonb_object_agg(field, to_jsonb(now())) FROM unnest($4::text[]) AS field),
    '{}'::jsonb
  ),
  now()
)
RETURNING written_at
"#;

const SELECT_COLLECTION: &str = "SELECT id, data FROM documents WHERE collection = $1 ORDER BY seq ASC";

/// Document store backed by a single JSONB table in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgDocumentStore {
  pool: PgPool,
}

impl PgDocumentStore {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
    let pool = PgPoolOptions::new()
      .max_connections(max_connections)
      .connect(database_url)
      .await?;
    info!("Successfully connected to the database.");
    Ok(Self::new(pool))
  }

  /// Creates the documents table when it does not exist yet.
  pub async fn ensure_schema(&self) -> Result<(), StoreError> {
    sqlx::query(CREATE_DOCUMENTS_TABLE).execute(&self.pool).await?;
    sqlx::query(CREATE_COLLECTION_INDEX).execute(&self.pool).await?;
    Ok(())
  }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
  #[instrument(name = "store::add", skip(self, document))]
  async fn add(&self, collection: &str, document: NewDocument) -> Result<WriteResult, StoreError> {
    let id = Uuid::new_v4().to_string();

    let write_time: DateTime<Utc> = sqlx::query_scalar(INSERT_DOCUMENT)
      .bind(&id)
      .bind(collection)
      .bind(Json(Value::Object(document.fields)))
      .bind(document.server_timestamp_fields)
      .fetch_one(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to insert document into '{}': {}", collection, e);
        StoreError::Database(e)
      })?;

    Ok(WriteResult { id, write_time })
  }

  #[instrument(name = "store::get", skip(self))]
  async fn get(&self, collection: &str) -> Result<Vec<StoredDocument>, StoreError> {
    let rows: Vec<(String, Json<Map<String, Value>>)> = sqlx::query_as(SELECT_COLLECTION)
      .bind(collection)
      .fetch_all(&self.pool)
      .await
      .map_err(|e| {
        error!("Failed to read collection '{}': {}", collection, e);
        StoreError::Database(e)
      })?;

    Ok(
      rows
        .into_iter()
        .map(|(id, Json(data))| StoredDocument { id, data })
        .collect(),
    )
  }
}

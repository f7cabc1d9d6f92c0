// delicia_api/src/services/catalog.rs
use serde_json::{Map, Value};
use tracing::{info, instrument};

use crate::errors::{AppError, Result as AppResult};
use crate::models::{CreateProductPayload, ProductDocument};
use crate::store::{DocumentStore, NewDocument, StoredDocument, PRODUCTS_COLLECTION};

pub const FETCH_PRODUCTS_FAILED: &str = "Failed to fetch products from database.";
pub const ADD_PRODUCT_FAILED: &str = "Failed to add product to database.";

/// A product that was just written, echoed back without a re-read.
#[derive(Debug, Clone)]
pub struct CreatedProduct {
  pub id: String,
  pub product: ProductDocument,
}

/// Returns every product in store order as `{id, ...fields}`, exactly as
/// stored. No paging or filtering.
#[instrument(name = "catalog::list_products", skip(store))]
pub async fn list_products(store: &dyn DocumentStore) -> AppResult<Vec<Map<String, Value>>> {
  let products: Vec<_> = store
    .get(PRODUCTS_COLLECTION)
    .await
    .map_err(|e| AppError::store(FETCH_PRODUCTS_FAILED, e))?
    .into_iter()
    .map(StoredDocument::into_json)
    .collect();

  info!("Fetched {} products.", products.len());
  Ok(products)
}

/// Validates the payload and writes one product document.
#[instrument(name = "catalog::create_product", skip(store, payload))]
pub async fn create_product(store: &dyn DocumentStore, payload: CreateProductPayload) -> AppResult<CreatedProduct> {
  let mut product = payload.into_document()?;

  let document = NewDocument::from_serializable(&product)
    .map_err(|e| AppError::store(ADD_PRODUCT_FAILED, e))?
    .with_server_timestamp("createdAt");

  let written = store
    .add(PRODUCTS_COLLECTION, document)
    .await
    .map_err(|e| AppError::store(ADD_PRODUCT_FAILED, e))?;

  product.created_at = Some(written.write_time);
  info!(product_id = %written.id, name = %product.name, "Product added.");

  Ok(CreatedProduct {
    id: written.id,
    product,
  })
}

// delicia_api/src/models/seed.rs

//! Legacy seed records and their mapping onto the product document shape.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DEFAULT_CATEGORY;

/// A product as it appears in the seed list. Only `name` is required; every
/// field not named here is carried over to the written document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LegacyProductRecord {
  /// Placeholder id from the seed list; never written.
  #[serde(default)]
  pub id: Option<Value>,
  pub name: String,
  #[serde(rename = "imageUrl", default)]
  pub image_url: Option<String>,
  #[serde(default)]
  pub tags: Option<Vec<String>>,
  /// Replaced by the first tag on import.
  #[serde(default)]
  pub category: Option<Value>,
  #[serde(flatten)]
  pub rest: Map<String, Value>,
}

/// The product document written for a legacy record, before the store adds
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedProductDocument {
  pub name: String,
  pub product_images: Vec<String>,
  pub category: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
  #[serde(flatten)]
  pub rest: Map<String, Value>,
}

impl From<LegacyProductRecord> for SeedProductDocument {
  fn from(record: LegacyProductRecord) -> Self {
    let LegacyProductRecord {
      id: _,
      name,
      image_url,
      tags,
      category: _,
      mut rest,
    } = record;

    // These are owned by the mapping and the store.
    rest.remove("product_images");
    rest.remove("createdAt");

    let category = tags
      .as_ref()
      .and_then(|t| t.first())
      .cloned()
      .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

    SeedProductDocument {
      name,
      product_images: image_url.into_iter().collect(),
      category,
      tags,
      rest,
    }
  }
}

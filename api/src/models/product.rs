// delicia_api/src/models/product.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{non_blank, DEFAULT_CATEGORY};
use crate::errors::{AppError, Result};

pub const MISSING_PRODUCT_FIELDS: &str =
  "Missing required product fields: name, price, description, or product_images (must be an array of image URLs).";

/// Body of `POST /api/products`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductPayload {
  pub name: Option<String>,
  pub price: Option<Number>,
  pub category: Option<String>,
  pub description: Option<String>,
  pub product_images: Option<Vec<String>>,
}

impl CreateProductPayload {
  /// Checks required fields and applies defaults. A price of zero counts as
  /// missing. An empty image list is accepted.
  pub fn into_document(self) -> Result<ProductDocument> {
    let name = non_blank(self.name);
    let price = self.price.filter(|p| p.as_f64().map_or(true, |v| v != 0.0));
    let description = non_blank(self.description);

    match (name, price, description, self.product_images) {
      (Some(name), Some(price), Some(description), Some(product_images)) => Ok(ProductDocument {
        name,
        price,
        category: non_blank(self.category).unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        description,
        product_images,
        created_at: None,
      }),
      _ => Err(AppError::Validation(MISSING_PRODUCT_FIELDS.to_string())),
    }
  }
}

/// A product as written by the API route. `created_at` is left empty when
/// writing; the store stamps it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDocument {
  pub name: String,
  pub price: Number,
  pub category: String,
  pub description: String,
  pub product_images: Vec<String>,
  #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn full_payload() -> CreateProductPayload {
    CreateProductPayload {
      name: Some("Sourdough".to_string()),
      price: Some(Number::from(7)),
      category: Some("Bread".to_string()),
      description: Some("Slow fermented loaf".to_string()),
      product_images: Some(vec!["http://img/sourdough.png".to_string()]),
    }
  }

  #[test]
  fn valid_payload_keeps_submitted_fields() {
    let doc = full_payload().into_document().unwrap();
    assert_eq!(doc.name, "Sourdough");
    assert_eq!(doc.price, Number::from(7));
    assert_eq!(doc.category, "Bread");
    assert_eq!(doc.product_images, vec!["http://img/sourdough.png".to_string()]);
    assert!(doc.created_at.is_none());
  }

  #[test]
  fn blank_or_missing_category_defaults() {
    let mut payload = full_payload();
    payload.category = None;
    assert_eq!(payload.into_document().unwrap().category, "Uncategorized");

    let mut payload = full_payload();
    payload.category = Some(String::new());
    assert_eq!(payload.into_document().unwrap().category, "Uncategorized");
  }

  #[test]
  fn missing_required_fields_are_rejected() {
    let cases: Vec<fn(&mut CreateProductPayload)> = vec![
      |p: &mut CreateProductPayload| p.name = None,
      |p: &mut CreateProductPayload| p.name = Some(String::new()),
      |p: &mut CreateProductPayload| p.price = None,
      |p: &mut CreateProductPayload| p.description = None,
      |p: &mut CreateProductPayload| p.description = Some(String::new()),
      |p: &mut CreateProductPayload| p.product_images = None,
    ];
    for mutate in cases {
      let mut payload = full_payload();
      mutate(&mut payload);
      match payload.into_document() {
        Err(AppError::Validation(m)) => assert_eq!(m, MISSING_PRODUCT_FIELDS),
        other => panic!("Expected validation error, got {:?}", other),
      }
    }
  }

  #[test]
  fn zero_price_counts_as_missing() {
    let mut payload = full_payload();
    payload.price = serde_json::from_value(json!(0.0)).unwrap();
    assert!(matches!(payload.into_document(), Err(AppError::Validation(_))));

    let mut payload = full_payload();
    payload.price = Some(Number::from(0));
    assert!(matches!(payload.into_document(), Err(AppError::Validation(_))));
  }

  #[test]
  fn empty_image_list_is_accepted() {
    let mut payload = full_payload();
    payload.product_images = Some(Vec::new());
    assert!(payload.into_document().unwrap().product_images.is_empty());
  }
}

// delicia_api/src/models/mod.rs

//! Document shapes read from and written to the store, plus the request
//! payloads that produce them.

pub mod contact;
pub mod product;
pub mod seed;

pub use contact::{ContactPayload, ContactSubmissionDocument};
pub use product::{CreateProductPayload, ProductDocument};
pub use seed::{LegacyProductRecord, SeedProductDocument};

/// Category assigned to products that arrive without one.
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Subject assigned to contact submissions that arrive without one.
pub const DEFAULT_SUBJECT: &str = "General Inquiry";

/// Treats `None` and empty strings alike, as a blank form field.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
  value.filter(|v| !v.is_empty())
}

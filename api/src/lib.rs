// delicia_api/src/lib.rs

//! Backend for the Delicia Bakery site: product catalog and contact form
//! endpoints over a document store, plus the seed product importer.

pub mod config;
pub mod errors;
pub mod models;
pub mod services;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod web;

pub use errors::{AppError, Result};
pub use state::AppState;

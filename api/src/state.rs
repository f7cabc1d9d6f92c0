// delicia_api/src/state.rs
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn DocumentStore>,
}

impl AppState {
  pub fn new(store: Arc<dyn DocumentStore>) -> Self {
    Self { store }
  }
}

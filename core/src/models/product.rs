// furncart/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A catalogue item as returned by the backend. Never mutated client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub id: String,
  pub name: String,
  pub price: f64,
  pub image_url: String,
  pub description: String,
  pub category: String,
}

impl Product {
  /// Reason this product cannot be trusted, if any.
  pub(crate) fn defect(&self) -> Option<String> {
    if self.id.trim().is_empty() {
      return Some(format!("product '{}' has an empty id", self.name));
    }
    if !self.price.is_finite() || self.price < 0.0 {
      return Some(format!("product '{}' has invalid price {}", self.id, self.price));
    }
    None
  }
}

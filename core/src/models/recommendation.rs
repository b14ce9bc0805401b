// furncart/src/models/recommendation.rs

use super::Product;
use serde::{Deserialize, Serialize};

/// Wire body of `POST /recommend`. Unset image keys are omitted entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendRequest {
  pub room_type: String,
  pub style: String,
  pub size: String,
  pub budget: u32,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_data: Option<String>,
}

/// The bundle returned for one submission.
///
/// `total_price` is whatever the server computed; the client does not
/// recompute it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
  pub products: Vec<Product>,
  pub total_price: f64,
}

impl RecommendationResponse {
  /// Checks the decoded bundle for values the client cannot work with.
  pub fn validate(&self) -> Result<(), String> {
    if !self.total_price.is_finite() || self.total_price < 0.0 {
      return Err(format!("invalid total_price {}", self.total_price));
    }
    match self.products.iter().find_map(Product::defect) {
      Some(defect) => Err(defect),
      None => Ok(()),
    }
  }

  pub fn find(&self, product_id: &str) -> Option<&Product> {
    self.products.iter().find(|p| p.id == product_id)
  }

  pub fn is_empty(&self) -> bool {
    self.products.is_empty()
  }
}

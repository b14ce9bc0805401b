// furncart/src/models/cart_item.rs

use super::Product;
use serde::Serialize;

/// A product in the cart together with how many of it were picked.
/// `quantity` is at least 1 for as long as the item exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartItem {
  pub product: Product,
  pub quantity: u32,
}

impl CartItem {
  pub(crate) fn new(product: Product) -> Self {
    Self { product, quantity: 1 }
  }

  pub fn id(&self) -> &str {
    &self.product.id
  }

  pub fn subtotal(&self) -> f64 {
    self.product.price * f64::from(self.quantity)
  }
}

// furncart/src/cart.rs

//! In-memory shopping cart.
//!
//! Entries keep insertion order and are unique by product id. Totals are
//! derived on every call rather than cached.

use crate::models::{CartItem, Product};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
  items: Vec<CartItem>,
}

impl Cart {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds one unit of `product`, merging with an existing entry of the same id.
  /// Returns the entry's quantity afterwards.
  pub fn add(&mut self, product: &Product) -> u32 {
    if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
      item.quantity = item.quantity.saturating_add(1);
      debug!(product_id = %product.id, quantity = item.quantity, "Cart: incremented existing item.");
      return item.quantity;
    }
    self.items.push(CartItem::new(product.clone()));
    info!(product_id = %product.id, "Cart: added new item.");
    1
  }

  /// Adds one unit of every product, in order.
  pub fn add_all<'a>(&mut self, products: impl IntoIterator<Item = &'a Product>) {
    for product in products {
      self.add(product);
    }
  }

  /// Removes the entry for `product_id`. Returns whether anything was removed.
  pub fn remove(&mut self, product_id: &str) -> bool {
    let before = self.items.len();
    self.items.retain(|i| i.product.id != product_id);
    let removed = self.items.len() != before;
    if removed {
      info!(%product_id, "Cart: removed item.");
    }
    removed
  }

  /// Sets the quantity of an existing entry; `quantity <= 0` removes it.
  /// Unknown ids are ignored. Quantities above `u32::MAX` are capped.
  pub fn set_quantity(&mut self, product_id: &str, quantity: i64) {
    if quantity <= 0 {
      self.remove(product_id);
      return;
    }
    let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
    if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
      item.quantity = quantity;
      debug!(%product_id, quantity, "Cart: quantity updated.");
    }
  }

  /// The `+` control.
  pub fn increment(&mut self, product_id: &str) {
    if let Some(current) = self.quantity_of(product_id) {
      self.set_quantity(product_id, i64::from(current) + 1);
    }
  }

  /// The `-` control. Dropping below one removes the entry.
  pub fn decrement(&mut self, product_id: &str) {
    if let Some(current) = self.quantity_of(product_id) {
      self.set_quantity(product_id, i64::from(current) - 1);
    }
  }

  pub fn clear(&mut self) {
    self.items.clear();
  }

  pub fn get(&self, product_id: &str) -> Option<&CartItem> {
    self.items.iter().find(|i| i.product.id == product_id)
  }

  pub fn quantity_of(&self, product_id: &str) -> Option<u32> {
    self.get(product_id).map(|i| i.quantity)
  }

  pub fn items(&self) -> &[CartItem] {
    &self.items
  }

  pub fn len(&self) -> usize {
    self.items.len()
  }

  pub fn is_empty(&self) -> bool {
    self.items.is_empty()
  }

  /// Sum of price × quantity over all entries.
  pub fn total(&self) -> f64 {
    self.items.iter().map(CartItem::subtotal).sum()
  }

  /// Sum of quantities; what the header badge shows. Saturates at `u32::MAX`.
  pub fn item_count(&self) -> u32 {
    self.items.iter().fold(0u32, |acc, i| acc.saturating_add(i.quantity))
  }
}

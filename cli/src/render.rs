// furncart_cli/src/render.rs

//! Plain-text views of the session: header badge, form, bundle and cart.

use furncart::{Cart, PreferenceForm, RecommendationResponse};

pub fn money(amount: f64) -> String {
  format!("${:.2}", amount)
}

pub fn header(cart_item_count: u32) -> String {
  if cart_item_count > 0 {
    format!("FurnCart - Furniture Recommender | Cart ({})", cart_item_count)
  } else {
    "FurnCart - Furniture Recommender | Cart".to_string()
  }
}

pub fn preferences(form: &PreferenceForm) -> String {
  let range = form.budget_range();
  let image = match form.image() {
    None => "none".to_string(),
    Some(furncart::ImageSource::Url(url)) => format!("url {}", url),
    Some(furncart::ImageSource::LocalFile(path)) => format!("file {}", path.display()),
    Some(furncart::ImageSource::Inline(data)) => format!("inline ({} chars)", data.len()),
  };
  format!(
    "Room Type:  {}\nStyle:      {}\nRoom Size:  {}\nBudget:     {} (range {} - {})\nRoom Image: {}",
    form.room_type.label(),
    form.style.label(),
    form.size.label(),
    money(f64::from(form.budget())),
    money(f64::from(range.min)),
    money(f64::from(range.max)),
    image
  )
}

pub fn bundle(bundle: &RecommendationResponse) -> String {
  if bundle.is_empty() {
    return "No products found matching your criteria. Try adjusting your preferences.".to_string();
  }
  let mut lines = Vec::with_capacity(bundle.products.len() + 1);
  for p in &bundle.products {
    lines.push(format!("[{}] {} ({}) {}", p.id, p.name, p.category, money(p.price)));
    if !p.description.is_empty() {
      lines.push(format!("    {}", p.description));
    }
  }
  lines.push(format!("Total Bundle Price: {}", money(bundle.total_price)));
  lines.join("\n")
}

pub fn cart(cart: &Cart) -> String {
  if cart.is_empty() {
    return "Your cart is empty.".to_string();
  }
  let mut lines = vec![format!(
    "{:<12} {:<28} {:>10} {:>5} {:>11}",
    "ID", "Product", "Price", "Qty", "Total"
  )];
  lines.extend(cart.items().iter().map(|item| {
    format!(
      "{:<12} {:<28} {:>10} {:>5} {:>11}",
      item.id(),
      item.product.name,
      money(item.product.price),
      item.quantity,
      money(item.subtotal())
    )
  }));
  lines.push(format!("Cart Total: {}", money(cart.total())));
  lines.join("\n")
}

#[cfg(test)]
mod tests {
  use super::*;
  use furncart::Product;

  fn product(id: &str, price: f64) -> Product {
    Product {
      id: id.to_string(),
      name: format!("Item {id}"),
      price,
      image_url: String::new(),
      description: String::new(),
      category: "Misc".to_string(),
    }
  }

  #[test]
  fn header_shows_badge_only_when_cart_has_items() {
    assert!(!header(0).contains('('));
    assert!(header(3).ends_with("Cart (3)"));
  }

  #[test]
  fn empty_bundle_has_hint() {
    let empty = RecommendationResponse {
      products: vec![],
      total_price: 0.0,
    };
    assert!(bundle(&empty).starts_with("No products found"));
  }

  #[test]
  fn bundle_lists_one_line_per_product_then_total() {
    let mut sofa = product("s1", 499.0);
    sofa.description = "Three seats".to_string();
    let response = RecommendationResponse {
      products: vec![sofa, product("r1", 80.5)],
      total_price: 579.5,
    };
    let text = bundle(&response);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
      lines,
      vec![
        "[s1] Item s1 (Misc) $499.00",
        "    Three seats",
        "[r1] Item r1 (Misc) $80.50",
        "Total Bundle Price: $579.50",
      ]
    );
  }

  #[test]
  fn cart_lists_items_and_total() {
    let mut c = Cart::new();
    c.add(&product("a", 10.0));
    c.add(&product("a", 10.0));
    c.add(&product("b", 5.0));
    let text = cart(&c);
    assert_eq!(text.lines().count(), 4);
    assert!(text.contains("$20.00"));
    assert!(text.ends_with("Cart Total: $25.00"));
  }

  #[test]
  fn preferences_use_labels() {
    let text = preferences(&PreferenceForm::default());
    assert!(text.contains("Living Room"));
    assert!(text.contains("$1500.00"));
  }
}

// src/models/cart_line.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// One cart entry, keyed by product id. At most one line exists per product.
///
/// The `price`/`title`/`image` fields are a snapshot captured at add-time and
/// may be absent when the product lookup failed; such lines display
/// generically until `hydrate` backfills them. This is the one canonical
/// stored schema (field name `quantity`, never `qty`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
  pub id: u64,
  pub quantity: u32,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<Decimal>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

impl CartLine {
  /// A line created from an id alone, before any product details are known.
  pub fn bare(id: u64, quantity: u32) -> Self {
    Self {
      id,
      quantity,
      price: None,
      title: None,
      image: None,
    }
  }

  /// A line with its snapshot captured from a known product.
  pub fn from_product(product: &Product, quantity: u32) -> Self {
    Self {
      id: product.id,
      quantity,
      price: Some(product.price),
      title: Some(product.title.clone()),
      image: Some(product.image.clone()),
    }
  }

  /// Whether the display snapshot still needs a product lookup.
  pub fn needs_hydration(&self) -> bool {
    self.price.is_none() || self.title.is_none()
  }

  pub fn fill_from(&mut self, product: &Product) {
    self.price = Some(product.price);
    self.title = Some(product.title.clone());
    self.image = Some(product.image.clone());
  }
}

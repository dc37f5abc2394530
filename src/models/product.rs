// src/models/product.rs

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Average review score (0-5) and review count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
  pub rate: Decimal,
  pub count: u32,
}

/// One catalog entry. Products are created at process start (or received
/// verbatim from the upstream API) and are immutable for the session.
///
/// The wire shape matches the upstream product API; `original_price` and
/// `stock` are local extensions and default when the upstream omits them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: u64,
  pub title: String,
  pub price: Decimal,
  pub category: String,
  pub image: String,
  pub description: String,
  pub rating: Rating,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub original_price: Option<Decimal>,
  #[serde(default)]
  pub stock: u32,
}

impl Product {
  /// Generic stand-in shown when a single-product fetch fails. Carries the
  /// requested id so the UI can still label the entry; the price is a fixed
  /// non-representative zero.
  pub fn placeholder(id: u64) -> Self {
    let title = format!("Product {}", id);
    Self {
      id,
      image: svg_data_uri(&title),
      title,
      price: Decimal::ZERO,
      category: "unknown".to_string(),
      description: "Product details are currently unavailable.".to_string(),
      rating: Rating {
        rate: Decimal::ZERO,
        count: 0,
      },
      original_price: None,
      stock: 0,
    }
  }
}

/// Renders a 600x400 dark card with the title centered, as a base64
/// `data:` URI, so placeholder entries never issue an image request.
pub fn svg_data_uri(title: &str) -> String {
  let safe = escape_xml(title);
  let svg = format!(
    "<svg xmlns='http://www.w3.org/2000/svg' width='600' height='400'>\
     <rect width='100%' height='100%' fill='#1a1a2e'/>\
     <text x='50%' y='50%' font-size='28' fill='#ffffff' dominant-baseline='middle' \
     text-anchor='middle' font-family='Inter, Arial, sans-serif'>{}</text></svg>",
    safe
  );
  format!("data:image/svg+xml;base64,{}", BASE64.encode(svg))
}

fn escape_xml(input: &str) -> String {
  let mut out = String::with_capacity(input.len());
  for ch in input.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&apos;"),
      _ => out.push(ch),
    }
  }
  out
}

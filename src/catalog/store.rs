// src/catalog/store.rs

use rust_decimal::Decimal;

use crate::errors::{AppError, Result};
use crate::models::{Product, Rating};

/// In-memory catalog. Built once at process start from the sample dataset
/// (or any fixed list) and read-only thereafter.
#[derive(Debug, Clone)]
pub struct CatalogStore {
  products: Vec<Product>,
}

impl CatalogStore {
  pub fn new(products: Vec<Product>) -> Self {
    Self { products }
  }

  /// The built-in demo catalog, which doubles as the gateway's fallback
  /// dataset.
  pub fn with_sample_data() -> Self {
    Self::new(sample_products())
  }

  pub fn list(&self) -> &[Product] {
    &self.products
  }

  pub fn get(&self, id: u64) -> Result<&Product> {
    self
      .products
      .iter()
      .find(|p| p.id == id)
      .ok_or_else(|| AppError::NotFound(format!("Product with ID {} not found.", id)))
  }

  /// Exact category match, case-insensitive.
  pub fn list_by_category(&self, category: &str) -> Vec<Product> {
    self
      .products
      .iter()
      .filter(|p| p.category.eq_ignore_ascii_case(category))
      .cloned()
      .collect()
  }

  /// Distinct category names in first-seen order.
  pub fn categories(&self) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for p in &self.products {
      if !seen.iter().any(|c| c.eq_ignore_ascii_case(&p.category)) {
        seen.push(p.category.clone());
      }
    }
    seen
  }
}

/// The fixed demo dataset: 21 products across 4 categories. Substituted by
/// the gateway whenever the primary catalog source fails.
pub fn sample_products() -> Vec<Product> {
  fn usd(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
  }

  #[allow(clippy::too_many_arguments)]
  fn entry(
    id: u64,
    title: &str,
    price_cents: i64,
    category: &str,
    image: &str,
    description: &str,
    rate_tenths: i64,
    count: u32,
    original_cents: Option<i64>,
    stock: u32,
  ) -> Product {
    Product {
      id,
      title: title.to_string(),
      price: usd(price_cents),
      category: category.to_string(),
      image: image.to_string(),
      description: description.to_string(),
      rating: Rating {
        rate: Decimal::new(rate_tenths, 1),
        count,
      },
      original_price: original_cents.map(usd),
      stock,
    }
  }

  vec![
    // Electronics
    entry(
      1,
      "Premium Wireless Headphones",
      29999,
      "electronics",
      "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=500&h=500&fit=crop&auto=format",
      "High-quality wireless headphones with active noise cancellation, premium sound quality, and 30-hour battery life. Perfect for music lovers and professionals.",
      48,
      245,
      Some(39999),
      15,
    ),
    entry(
      2,
      "4K Smart TV 55 inch",
      79999,
      "electronics",
      "https://images.unsplash.com/photo-1593359677879-a4bb92f829d1?w=500&h=500&fit=crop&auto=format",
      "Ultra-HD 4K Smart TV with HDR, built-in streaming apps, and voice control. Crystal clear picture quality for the ultimate viewing experience.",
      46,
      189,
      Some(99999),
      8,
    ),
    entry(
      3,
      "Gaming Laptop Pro",
      129999,
      "electronics",
      "https://images.unsplash.com/photo-1603302576837-37561b2e2302?w=500&h=500&fit=crop&auto=format",
      "High-performance gaming laptop with RTX graphics, 16GB RAM, and 1TB SSD. Built for gaming enthusiasts and content creators.",
      47,
      156,
      Some(159999),
      5,
    ),
    entry(
      4,
      "Wireless Charging Pad",
      4999,
      "electronics",
      "https://images.unsplash.com/photo-1586953208448-b95a79798f07?w=500&h=500&fit=crop&auto=format",
      "Fast wireless charging pad compatible with all Qi-enabled devices. Sleek design with LED indicators and overcharge protection.",
      43,
      92,
      Some(6999),
      25,
    ),
    entry(
      5,
      "Bluetooth Speaker Waterproof",
      8999,
      "electronics",
      "https://images.unsplash.com/photo-1608043152269-423dbba4e7e1?w=500&h=500&fit=crop&auto=format",
      "Portable waterproof Bluetooth speaker with 360-degree sound, 12-hour battery life, and rugged design for outdoor adventures.",
      45,
      134,
      None,
      18,
    ),
    // Women's Clothing
    entry(
      6,
      "Elegant Summer Maxi Dress",
      8999,
      "women's clothing",
      "https://images.unsplash.com/photo-1515372039744-b8f02a3ae446?w=500&h=500&fit=crop&auto=format",
      "Beautiful floral maxi dress perfect for summer occasions. Lightweight fabric with adjustable straps and flowing silhouette.",
      44,
      87,
      Some(12999),
      12,
    ),
    entry(
      7,
      "Professional Blazer",
      14999,
      "women's clothing",
      "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?w=500&h=500&fit=crop&auto=format",
      "Tailored blazer perfect for office wear. Premium fabric with classic cut and versatile styling options for professional women.",
      46,
      203,
      Some(19999),
      9,
    ),
    entry(
      8,
      "Cozy Winter Sweater",
      6999,
      "women's clothing",
      "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=500&h=500&fit=crop&auto=format",
      "Soft cashmere blend sweater with ribbed texture. Available in multiple colors, perfect for layering during cold seasons.",
      47,
      156,
      None,
      20,
    ),
    entry(
      9,
      "High-Waisted Jeans",
      7999,
      "women's clothing",
      "https://images.unsplash.com/photo-1541099649105-f69ad21f3246?w=500&h=500&fit=crop&auto=format",
      "Comfortable high-waisted jeans with stretch fabric. Classic straight-leg cut that flatters all body types.",
      42,
      178,
      Some(9999),
      16,
    ),
    // Men's Clothing
    entry(
      10,
      "Classic Denim Jacket",
      9999,
      "men's clothing",
      "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=500&h=500&fit=crop&auto=format",
      "Timeless denim jacket with vintage wash and comfortable fit. A wardrobe essential for casual and smart-casual looks.",
      45,
      123,
      Some(13999),
      14,
    ),
    entry(
      11,
      "Business Dress Shirt",
      5999,
      "men's clothing",
      "https://images.unsplash.com/photo-1602810318383-e386cc2a3ccf?w=500&h=500&fit=crop&auto=format",
      "Crisp white dress shirt made from premium cotton. Perfect for business meetings and formal occasions.",
      43,
      201,
      None,
      22,
    ),
    entry(
      12,
      "Casual Polo Shirt",
      3999,
      "men's clothing",
      "https://images.unsplash.com/photo-1586790170083-2f9ceadc732d?w=500&h=500&fit=crop&auto=format",
      "Comfortable polo shirt in premium cotton pique. Available in various colors, perfect for weekend casual wear.",
      41,
      145,
      Some(5999),
      28,
    ),
    entry(
      13,
      "Winter Wool Coat",
      24999,
      "men's clothing",
      "https://images.unsplash.com/photo-1551488831-00ddcb6c6bd3?w=500&h=500&fit=crop&auto=format",
      "Premium wool coat with classic tailoring and warm lining. Perfect for cold weather with sophisticated style.",
      48,
      89,
      Some(34999),
      7,
    ),
    // Jewelry
    entry(
      14,
      "Classic Men's Watch",
      19999,
      "jewelery",
      "https://images.unsplash.com/photo-1524592094714-0f0654e20314?w=500&h=500&fit=crop&auto=format",
      "Elegant timepiece with leather strap and water resistance up to 100m. Swiss movement with classic design.",
      47,
      234,
      Some(29999),
      11,
    ),
    entry(
      15,
      "Diamond Stud Earrings",
      59999,
      "jewelery",
      "https://images.unsplash.com/photo-1515562141207-7a88fb7ce338?w=500&h=500&fit=crop&auto=format",
      "Brilliant cut diamond stud earrings set in 14k white gold. Perfect for everyday elegance or special occasions.",
      49,
      156,
      Some(79999),
      6,
    ),
    entry(
      16,
      "Gold Chain Necklace",
      29999,
      "jewelery",
      "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f?w=500&h=500&fit=crop&auto=format",
      "18k gold plated chain necklace with adjustable length. Hypoallergenic and perfect for layering with other jewelry.",
      45,
      178,
      None,
      13,
    ),
    entry(
      17,
      "Silver Bracelet Set",
      8999,
      "jewelery",
      "https://images.unsplash.com/photo-1611591437281-460bfbe1220a?w=500&h=500&fit=crop&auto=format",
      "Set of three sterling silver bracelets with different textures. Can be worn together or separately.",
      43,
      92,
      Some(12999),
      18,
    ),
    entry(
      18,
      "Vintage Ring Collection",
      14999,
      "jewelery",
      "https://images.unsplash.com/photo-1605100804763-247f67b3557e?w=500&h=500&fit=crop&auto=format",
      "Set of vintage-inspired rings with antique finish. Includes 3 different designs in various sizes.",
      46,
      134,
      Some(19999),
      15,
    ),
    // Additional Electronics
    entry(
      19,
      "Smart Fitness Tracker",
      12999,
      "electronics",
      "https://images.unsplash.com/photo-1575311373937-040b8e1fd5b6?w=500&h=500&fit=crop&auto=format",
      "Advanced fitness tracker with heart rate monitoring, GPS, and 7-day battery life. Track your health and fitness goals.",
      44,
      287,
      Some(17999),
      21,
    ),
    entry(
      20,
      "Wireless Mouse & Keyboard Set",
      7999,
      "electronics",
      "https://images.unsplash.com/photo-1587829741301-dc798b83add3?w=500&h=500&fit=crop&auto=format",
      "Ergonomic wireless mouse and keyboard set with long battery life. Perfect for office or home use.",
      42,
      165,
      None,
      16,
    ),
    // More Women's Clothing
    entry(
      21,
      "Leather Handbag",
      19999,
      "women's clothing",
      "https://images.unsplash.com/photo-1553062407-98eeb64c6a62?w=500&h=500&fit=crop&auto=format",
      "Genuine leather handbag with multiple compartments. Spacious and stylish for everyday use.",
      47,
      145,
      Some(29999),
      8,
    ),
  ]
}

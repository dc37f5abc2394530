// src/catalog/gateway.rs

use std::sync::Arc;

use crate::catalog::source::ProductSource;
use crate::catalog::store::CatalogStore;
use crate::errors::Result;
use crate::models::Product;

/// Catalog data plus an out-of-band marker for whether the fixed fallback
/// dataset was substituted for a failed primary source.
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
  pub data: T,
  pub used_fallback: bool,
}

impl<T> Fetched<T> {
  fn primary(data: T) -> Self {
    Self {
      data,
      used_fallback: false,
    }
  }

  fn fallback(data: T) -> Self {
    Self {
      data,
      used_fallback: true,
    }
  }
}

/// Wraps a catalog source and absorbs every failure: the catalog page must
/// never show a hard error, only a "showing sample data" notice. Failures
/// of the list operations substitute the sample dataset and raise the
/// `used_fallback` flag; single-product lookups propagate their error so
/// the caller can substitute a placeholder instead.
pub struct CatalogGateway {
  source: Arc<dyn ProductSource>,
  fallback: CatalogStore,
}

impl CatalogGateway {
  pub fn new(source: Arc<dyn ProductSource>) -> Self {
    Self {
      source,
      fallback: CatalogStore::with_sample_data(),
    }
  }

  pub async fn products(&self) -> Fetched<Vec<Product>> {
    match self.source.products().await {
      Ok(products) => Fetched::primary(products),
      Err(e) => {
        tracing::warn!(error = %e, "Product list fetch failed; serving fallback dataset.");
        Fetched::fallback(self.fallback.list().to_vec())
      }
    }
  }

  pub async fn products_by_category(&self, category: &str) -> Fetched<Vec<Product>> {
    match self.source.products_by_category(category).await {
      Ok(products) => Fetched::primary(products),
      Err(e) => {
        tracing::warn!(error = %e, category, "Category fetch failed; serving fallback dataset.");
        Fetched::fallback(self.fallback.list_by_category(category))
      }
    }
  }

  /// On failure the categories are derived from the fallback products, so
  /// the filter dropdown is never left empty even when the primary category
  /// list fails independently of the product list.
  pub async fn categories(&self) -> Fetched<Vec<String>> {
    match self.source.categories().await {
      Ok(categories) => Fetched::primary(categories),
      Err(e) => {
        tracing::warn!(error = %e, "Category list fetch failed; deriving from fallback dataset.");
        Fetched::fallback(self.fallback.categories())
      }
    }
  }

  /// Single-product lookup. Unlike the list operations this propagates the
  /// failure; callers substitute `Product::placeholder` per their contract.
  pub async fn product(&self, id: u64) -> Result<Product> {
    self.source.product(id).await
  }
}

// src/catalog/page.rs

use std::sync::Arc;

use serde::Serialize;

use crate::catalog::gateway::CatalogGateway;
use crate::models::Product;

/// Fixed number of product cards per catalog page.
pub const PAGE_SIZE: usize = 10;

/// Query parameters for one catalog page view. Ephemeral, never persisted.
#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
  pub category: Option<String>,
  pub search: Option<String>,
  /// 1-based; 0 and 1 both mean the first page.
  pub page: u32,
}

/// Everything the catalog page template needs for one render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogView {
  pub items: Vec<Product>,
  pub categories: Vec<String>,
  pub selected_category: Option<String>,
  pub search: Option<String>,
  pub total_count: usize,
  pub page: u32,
  pub total_pages: u32,
  pub used_fallback: bool,
}

/// Builds catalog page view models: category filter at the source, search
/// filter here, then pagination. No error escapes this type; source
/// failures degrade to fallback data per the gateway contract.
pub struct CatalogPage {
  gateway: Arc<CatalogGateway>,
}

impl CatalogPage {
  pub fn new(gateway: Arc<CatalogGateway>) -> Self {
    Self { gateway }
  }

  pub async fn render(&self, query: &CatalogQuery) -> CatalogView {
    let category = trimmed(query.category.as_deref());
    let search = trimmed(query.search.as_deref());

    let fetched = match category {
      Some(c) => self.gateway.products_by_category(c).await,
      None => self.gateway.products().await,
    };
    let mut products = fetched.data;

    if let Some(s) = search {
      let needle = s.to_lowercase();
      products.retain(|p| matches_search(p, &needle));
    }

    // Count before slicing so the pager reflects the whole filtered set.
    let total_count = products.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE) as u32;

    let page = query.page.max(1);
    let start = (page as usize - 1).saturating_mul(PAGE_SIZE);
    let items = if start >= total_count {
      // Out-of-range pages yield an empty slice, not an error.
      Vec::new()
    } else {
      products[start..(start + PAGE_SIZE).min(total_count)].to_vec()
    };

    let categories = self.gateway.categories().await;

    CatalogView {
      items,
      used_fallback: fetched.used_fallback || categories.used_fallback,
      categories: categories.data,
      selected_category: category.map(str::to_string),
      search: search.map(str::to_string),
      total_count,
      page,
      total_pages,
    }
  }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|v| !v.is_empty())
}

/// Case-insensitive substring match over title, description, and category.
pub fn matches_search(product: &Product, needle_lower: &str) -> bool {
  product.title.to_lowercase().contains(needle_lower)
    || product.description.to_lowercase().contains(needle_lower)
    || product.category.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::catalog::source::ProductSource;
  use crate::catalog::store::{sample_products, CatalogStore};
  use crate::errors::{AppError, Result};
  use async_trait::async_trait;

  /// Source whose every operation fails, standing in for an unreachable
  /// upstream API.
  struct FailingSource;

  #[async_trait]
  impl ProductSource for FailingSource {
    async fn products(&self) -> Result<Vec<Product>> {
      Err(AppError::Internal("connection refused".into()))
    }
    async fn product(&self, _id: u64) -> Result<Product> {
      Err(AppError::Internal("connection refused".into()))
    }
    async fn products_by_category(&self, _category: &str) -> Result<Vec<Product>> {
      Err(AppError::Internal("connection refused".into()))
    }
    async fn categories(&self) -> Result<Vec<String>> {
      Err(AppError::Internal("connection refused".into()))
    }
  }

  fn local_page() -> CatalogPage {
    let store = Arc::new(CatalogStore::with_sample_data());
    CatalogPage::new(Arc::new(CatalogGateway::new(store)))
  }

  fn query(category: Option<&str>, search: Option<&str>, page: u32) -> CatalogQuery {
    CatalogQuery {
      category: category.map(str::to_string),
      search: search.map(str::to_string),
      page,
    }
  }

  #[tokio::test]
  async fn unfiltered_pages_slice_the_catalog_in_order() {
    let page = local_page();

    let first = page.render(&query(None, None, 1)).await;
    assert_eq!(first.total_count, 21);
    assert_eq!(first.total_pages, 3);
    assert_eq!(first.items.iter().map(|p| p.id).collect::<Vec<_>>(), (1..=10).collect::<Vec<u64>>());

    let third = page.render(&query(None, None, 3)).await;
    assert_eq!(third.items.iter().map(|p| p.id).collect::<Vec<_>>(), vec![21]);

    let fourth = page.render(&query(None, None, 4)).await;
    assert!(fourth.items.is_empty());
    assert_eq!(fourth.total_pages, 3);
  }

  #[tokio::test]
  async fn concatenated_pages_reproduce_the_filtered_set_exactly_once() {
    let page = local_page();
    let full = page.render(&query(None, None, 1)).await;

    let mut collected = Vec::new();
    for n in 1..=full.total_pages {
      collected.extend(page.render(&query(None, None, n)).await.items);
    }
    assert_eq!(collected, sample_products());
  }

  #[tokio::test]
  async fn search_matches_title_as_case_insensitive_substring() {
    let page = local_page();
    let view = page.render(&query(None, Some("WATCH"), 1)).await;
    assert_eq!(view.total_count, 1);
    assert_eq!(view.items[0].title, "Classic Men's Watch");
    assert_eq!(view.search.as_deref(), Some("WATCH"));
  }

  #[tokio::test]
  async fn category_filter_applies_at_the_source() {
    let page = local_page();
    let view = page.render(&query(Some("Electronics"), None, 1)).await;
    assert_eq!(view.total_count, 7);
    assert!(view.items.iter().all(|p| p.category == "electronics"));
    assert_eq!(view.selected_category.as_deref(), Some("Electronics"));
  }

  #[tokio::test]
  async fn blank_filters_are_treated_as_absent() {
    let page = local_page();
    let view = page.render(&query(Some("  "), Some(""), 1)).await;
    assert_eq!(view.total_count, 21);
    assert_eq!(view.selected_category, None);
    assert_eq!(view.search, None);
  }

  #[tokio::test]
  async fn failing_source_degrades_to_fallback_with_its_categories() {
    let gateway = Arc::new(CatalogGateway::new(Arc::new(FailingSource)));
    let page = CatalogPage::new(gateway);

    let view = page.render(&query(None, None, 1)).await;
    assert!(view.used_fallback);
    assert_eq!(view.total_count, 21);
    assert_eq!(
      view.categories,
      vec!["electronics", "women's clothing", "men's clothing", "jewelery"]
    );
  }

  #[test]
  fn search_filtering_is_idempotent() {
    let products = sample_products();
    let once: Vec<_> = products.iter().filter(|p| matches_search(p, "wireless")).cloned().collect();
    let twice: Vec<_> = once.iter().filter(|p| matches_search(p, "wireless")).cloned().collect();
    assert!(!once.is_empty());
    assert_eq!(once, twice);
  }
}

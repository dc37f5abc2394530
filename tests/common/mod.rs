// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use vervida_web::cart::{CartStore, MemoryStorage};
use vervida_web::catalog::{CatalogGateway, CatalogPage, CatalogStore, ProductSource};
use vervida_web::config::AppConfig;
use vervida_web::errors::{AppError, Result};
use vervida_web::models::Product;
use vervida_web::state::AppState;

/// Stand-in for an unreachable upstream product API: every operation fails.
pub struct FailingSource;

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

pub fn test_config() -> AppConfig {
  AppConfig {
    server_host: "127.0.0.1".to_string(),
    server_port: 0,
    product_api_base_url: None,
    cart_storage_path: "unused.json".into(),
  }
}

/// App state wired to the given catalog source, with an in-memory cart.
pub fn state_with_source(source: Arc<dyn ProductSource>) -> AppState {
  let catalog = Arc::new(CatalogStore::with_sample_data());
  let gateway = Arc::new(CatalogGateway::new(source.clone()));
  let page = Arc::new(CatalogPage::new(gateway.clone()));
  let cart = Arc::new(Mutex::new(CartStore::new(Arc::new(MemoryStorage::new()), source)));
  AppState {
    config: Arc::new(test_config()),
    catalog,
    gateway,
    page,
    cart,
  }
}

/// State whose catalog source is the in-memory sample store.
pub fn local_state() -> AppState {
  let store = Arc::new(CatalogStore::with_sample_data());
  state_with_source(store)
}

/// State whose catalog source always fails, forcing fallback behavior.
pub fn failing_state() -> AppState {
  state_with_source(Arc::new(FailingSource))
}

/// State whose cart storage already holds the given raw JSON document,
/// with a live in-memory catalog behind the detail fetcher.
pub fn state_with_seeded_cart(raw: &str) -> AppState {
  let store = Arc::new(CatalogStore::with_sample_data());
  let gateway = Arc::new(CatalogGateway::new(store.clone()));
  let page = Arc::new(CatalogPage::new(gateway.clone()));
  let cart = Arc::new(Mutex::new(CartStore::new(
    Arc::new(MemoryStorage::with_raw(raw)),
    store.clone(),
  )));
  AppState {
    config: Arc::new(test_config()),
    catalog: store,
    gateway,
    page,
    cart,
  }
}

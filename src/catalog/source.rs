// src/catalog/source.rs

use async_trait::async_trait;

use crate::catalog::store::CatalogStore;
use crate::errors::Result;
use crate::models::Product;

/// The four catalog read operations, implemented both by the in-memory
/// store and by the upstream REST client so the gateway can wrap either.
#[async_trait]
pub trait ProductSource: Send + Sync {
  async fn products(&self) -> Result<Vec<Product>>;
  async fn product(&self, id: u64) -> Result<Product>;
  async fn products_by_category(&self, category: &str) -> Result<Vec<Product>>;
  async fn categories(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl ProductSource for CatalogStore {
  async fn products(&self) -> Result<Vec<Product>> {
    Ok(self.list().to_vec())
  }

  async fn product(&self, id: u64) -> Result<Product> {
    self.get(id).cloned()
  }

  async fn products_by_category(&self, category: &str) -> Result<Vec<Product>> {
    Ok(self.list_by_category(category))
  }

  async fn categories(&self) -> Result<Vec<String>> {
    Ok(CatalogStore::categories(self))
  }
}

/// Typed pass-through client for an upstream product API
/// (fakestoreapi-compatible paths). Exactly one attempt per call; no
/// retries, no timeout policy beyond reqwest's defaults.
pub struct RemoteProductApi {
  client: reqwest::Client,
  base_url: String,
}

impl RemoteProductApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
    let url = format!("{}{}", self.base_url, path);
    let value = self
      .client
      .get(&url)
      .send()
      .await?
      .error_for_status()?
      .json::<T>()
      .await?;
    Ok(value)
  }
}

#[async_trait]
impl ProductSource for RemoteProductApi {
  async fn products(&self) -> Result<Vec<Product>> {
    self.get_json("/products").await
  }

  async fn product(&self, id: u64) -> Result<Product> {
    self.get_json(&format!("/products/{}", id)).await
  }

  async fn products_by_category(&self, category: &str) -> Result<Vec<Product>> {
    self.get_json(&format!("/products/category/{}", category)).await
  }

  async fn categories(&self) -> Result<Vec<String>> {
    self.get_json("/products/categories").await
  }
}

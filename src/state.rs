// src/state.rs

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::cart::CartStore;
use crate::catalog::{CatalogGateway, CatalogPage, CatalogStore};
use crate::config::AppConfig;

/// Shared application state handed to every handler.
///
/// The cart sits behind an async mutex: mutations are inherently sequential
/// for this single-session demo, and hydration awaits product fetches while
/// holding the lock.
#[derive(Clone)]
pub struct AppState {
  pub config: Arc<AppConfig>,
  pub catalog: Arc<CatalogStore>,
  pub gateway: Arc<CatalogGateway>,
  pub page: Arc<CatalogPage>,
  pub cart: Arc<Mutex<CartStore>>,
}

// src/config.rs

use crate::cart::CART_STORAGE_KEY;
use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,

  /// Base URL of the upstream product API (e.g. "https://fakestoreapi.com").
  /// When unset, the catalog is served from the built-in sample dataset.
  pub product_api_base_url: Option<String>,

  /// Where the cart collection is persisted between sessions.
  pub cart_storage_path: PathBuf,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let server_host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = env::var("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let product_api_base_url = env::var("PRODUCT_API_BASE_URL")
      .ok()
      .map(|url| url.trim_end_matches('/').to_string())
      .filter(|url| !url.is_empty());

    let cart_storage_path = env::var("CART_STORAGE_PATH")
      .map(PathBuf::from)
      .unwrap_or_else(|_| PathBuf::from(format!("{}.json", CART_STORAGE_KEY)));

    tracing::info!(
      remote_catalog = product_api_base_url.is_some(),
      "Application configuration loaded successfully."
    );

    Ok(Self {
      server_host,
      server_port,
      product_api_base_url,
      cart_storage_path,
    })
  }
}

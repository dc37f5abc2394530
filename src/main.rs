// src/main.rs

use std::sync::Arc;

use actix_web::{web as actix_data, App, HttpServer};
use tokio::sync::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use vervida_web::cart::{CartStore, JsonFileStorage};
use vervida_web::catalog::{CatalogGateway, CatalogPage, CatalogStore, ProductSource, RemoteProductApi};
use vervida_web::config::AppConfig;
use vervida_web::state::AppState;
use vervida_web::web::configure_app_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize tracing subscriber for logging
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO) // Default level
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env()) // Allow RUST_LOG override
    .with_span_events(FmtSpan::CLOSE) // Log when spans close, showing duration
    .init();

  tracing::info!("Starting Vervida storefront server...");

  // Load application configuration
  let app_config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load application configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  // The in-memory catalog always exists: it backs the local API surface and
  // is the gateway's fallback dataset either way.
  let catalog = Arc::new(CatalogStore::with_sample_data());

  // The catalog source is either the upstream API or the local store.
  let source: Arc<dyn ProductSource> = match &app_config.product_api_base_url {
    Some(base_url) => {
      tracing::info!(base_url, "Catalog served from the upstream product API.");
      Arc::new(RemoteProductApi::new(base_url.clone()))
    }
    None => {
      tracing::info!("Catalog served from the built-in sample dataset.");
      catalog.clone()
    }
  };

  let gateway = Arc::new(CatalogGateway::new(source.clone()));
  let page = Arc::new(CatalogPage::new(gateway.clone()));

  let cart_storage = Arc::new(JsonFileStorage::new(app_config.cart_storage_path.clone()));
  let cart = Arc::new(Mutex::new(CartStore::new(cart_storage, source)));

  let app_state = AppState {
    config: app_config.clone(),
    catalog,
    gateway,
    page,
    cart,
  };

  // Configure and start the Actix Web server
  let server_address = format!("{}:{}", app_config.server_host, app_config.server_port);
  tracing::info!("Attempting to bind server to {}...", server_address);

  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone())) // Share AppState with handlers
      .wrap(tracing_actix_web::TracingLogger::default()) // Actix middleware for tracing requests
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}

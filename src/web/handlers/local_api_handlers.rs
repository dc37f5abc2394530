// src/web/handlers/local_api_handlers.rs

//! Self-hosted product API serving the in-memory catalog. Response bodies
//! match the upstream product API shapes so either can back the gateway.

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::local_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state.catalog.list();
  info!("Serving {} products from the local catalog.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::local_product", skip(app_state))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<u64>,
) -> Result<HttpResponse, AppError> {
  let product_id = path.into_inner();
  match app_state.catalog.get(product_id) {
    Ok(product) => Ok(HttpResponse::Ok().json(product)),
    Err(e) => {
      warn!("Product with ID {} not found in the local catalog.", product_id);
      Err(e)
    }
  }
}

#[instrument(name = "handler::local_products_by_category", skip(app_state))]
pub async fn list_by_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let category = path.into_inner();
  let products = app_state.catalog.list_by_category(&category);
  info!("Serving {} products for category '{}'.", products.len(), category);
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::local_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  Ok(HttpResponse::Ok().json(app_state.catalog.categories()))
}

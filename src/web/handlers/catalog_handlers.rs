// src/web/handlers/catalog_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tracing::{info, instrument, warn};

use crate::catalog::CatalogQuery;
use crate::models::Product;
use crate::state::AppState;

#[derive(Deserialize, Debug)]
pub struct CatalogPageParams {
  pub category: Option<String>,
  pub search: Option<String>,
  pub page: Option<u32>,
}

/// The catalog page view model: filtered, searched, and paginated. Never an
/// error response; a failed source renders as fallback data with the
/// `usedFallback` flag raised for the "showing sample data" banner.
#[instrument(name = "handler::catalog_page", skip(app_state, params), fields(category = ?params.category, search = ?params.search, page = ?params.page))]
pub async fn catalog_page_handler(
  app_state: web::Data<AppState>,
  params: web::Query<CatalogPageParams>,
) -> HttpResponse {
  let params = params.into_inner();
  let query = CatalogQuery {
    category: params.category,
    search: params.search,
    page: params.page.unwrap_or(1),
  };
  let view = app_state.page.render(&query).await;
  info!(
    total_count = view.total_count,
    used_fallback = view.used_fallback,
    "Catalog page rendered."
  );
  HttpResponse::Ok().json(view)
}

/// Product detail for the modal. A failed lookup substitutes a generic
/// placeholder product rather than surfacing an error.
#[instrument(name = "handler::product_details", skip(app_state))]
pub async fn product_details_handler(app_state: web::Data<AppState>, path: web::Path<u64>) -> HttpResponse {
  let product_id = path.into_inner();
  let product = match app_state.gateway.product(product_id).await {
    Ok(product) => product,
    Err(e) => {
      warn!(product_id, error = %e, "Product detail fetch failed; substituting a placeholder.");
      Product::placeholder(product_id)
    }
  };
  HttpResponse::Ok().json(product)
}

// src/web/routes.rs

use actix_web::web;

async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// This function is called in `main.rs` (and by integration tests) to
// configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    // Health Check Route
    .route("/health", web::get().to(health_check_handler))
    // Self-hosted product API over the in-memory catalog
    .service(
      web::scope("/api/local/products")
        .route(
          "",
          web::get().to(crate::web::handlers::local_api_handlers::list_products_handler),
        )
        .route(
          "/categories",
          web::get().to(crate::web::handlers::local_api_handlers::list_categories_handler),
        )
        .route(
          "/category/{category}",
          web::get().to(crate::web::handlers::local_api_handlers::list_by_category_handler),
        )
        .route(
          "/{product_id}",
          web::get().to(crate::web::handlers::local_api_handlers::get_product_handler),
        ),
    )
    // Catalog page + product detail (modal)
    .service(
      web::scope("/products")
        .route(
          "",
          web::get().to(crate::web::handlers::catalog_handlers::catalog_page_handler),
        )
        .route(
          "/{product_id}",
          web::get().to(crate::web::handlers::catalog_handlers::product_details_handler),
        ),
    )
    // Cart Routes
    .service(
      web::scope("/cart")
        .route("", web::get().to(crate::web::handlers::cart_handlers::view_cart_handler))
        .route(
          "/add",
          web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
        )
        .route(
          "/remove",
          web::post().to(crate::web::handlers::cart_handlers::remove_from_cart_handler),
        )
        .route(
          "/update",
          web::post().to(crate::web::handlers::cart_handlers::update_quantity_handler),
        )
        .route(
          "/clear",
          web::post().to(crate::web::handlers::cart_handlers::clear_cart_handler),
        ),
    );
}

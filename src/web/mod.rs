// src/web/mod.rs

pub mod handlers;
pub mod routes;

// Re-export so main.rs and tests can configure the Actix app directly.
pub use routes::configure_app_routes;

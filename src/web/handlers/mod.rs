// src/web/handlers/mod.rs

pub mod cart_handlers;
pub mod catalog_handlers;
pub mod local_api_handlers;

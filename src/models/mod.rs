// src/models/mod.rs

//! Data structures shared across the catalog and cart modules.

pub mod cart_line;
pub mod product;

// Re-export the model structs for convenient access
pub use cart_line::CartLine;
pub use product::{Product, Rating};

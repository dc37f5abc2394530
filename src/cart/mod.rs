// src/cart/mod.rs

//! The shopping cart: one owned module, one schema, one storage key.

pub mod storage;
pub mod store;

pub use storage::{CartStorage, JsonFileStorage, MemoryStorage, CART_STORAGE_KEY};
pub use store::{CartLineView, CartStore, CartView};

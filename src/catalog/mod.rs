// src/catalog/mod.rs

//! Product catalog: the in-memory store, the upstream API client, the
//! fallback-substituting gateway, and the page view-model builder.

pub mod gateway;
pub mod page;
pub mod source;
pub mod store;

pub use gateway::{CatalogGateway, Fetched};
pub use page::{CatalogPage, CatalogQuery, CatalogView, PAGE_SIZE};
pub use source::{ProductSource, RemoteProductApi};
pub use store::{sample_products, CatalogStore};

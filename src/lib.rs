// src/lib.rs

//! Vervida storefront service: a demo e-commerce catalog with a
//! fallback-substituting gateway over either an in-memory product list or
//! an upstream REST API, plus a single-session shopping cart persisted as
//! one JSON document.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod models;
pub mod state;
pub mod web;

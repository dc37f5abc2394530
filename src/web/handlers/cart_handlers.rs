// src/web/handlers/cart_handlers.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, instrument};

use crate::state::AppState;

// --- Request DTOs ---

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartPayload {
  pub product_id: u64,
  #[serde(default = "default_quantity")]
  pub quantity: u32,
}

fn default_quantity() -> u32 {
  1
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartPayload {
  pub product_id: u64,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityPayload {
  pub product_id: u64,
  pub delta: i64,
}

// --- Handlers ---
// Every mutation responds with the refreshed cart view, which is what the
// cart sidebar re-renders from.

#[instrument(name = "handler::view_cart", skip(app_state))]
pub async fn view_cart_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let mut cart = app_state.cart.lock().await;
  // Backfill any line added by id alone before rendering.
  cart.hydrate().await;
  HttpResponse::Ok().json(cart.view())
}

#[instrument(name = "handler::add_to_cart", skip(app_state, payload), fields(product_id = %payload.product_id, quantity = %payload.quantity))]
pub async fn add_to_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<AddToCartPayload>,
) -> HttpResponse {
  let mut cart = app_state.cart.lock().await;
  cart.add(payload.product_id, payload.quantity).await;
  info!(item_count = cart.item_count(), "Item added to cart.");
  HttpResponse::Ok().json(json!({
      "message": "Item added to cart.",
      "cart": cart.view()
  }))
}

#[instrument(name = "handler::remove_from_cart", skip(app_state, payload), fields(product_id = %payload.product_id))]
pub async fn remove_from_cart_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<RemoveFromCartPayload>,
) -> HttpResponse {
  let mut cart = app_state.cart.lock().await;
  cart.remove(payload.product_id);
  HttpResponse::Ok().json(json!({
      "message": "Item removed from cart.",
      "cart": cart.view()
  }))
}

#[instrument(name = "handler::update_cart_quantity", skip(app_state, payload), fields(product_id = %payload.product_id, delta = %payload.delta))]
pub async fn update_quantity_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<UpdateQuantityPayload>,
) -> HttpResponse {
  let mut cart = app_state.cart.lock().await;
  cart.update_quantity(payload.product_id, payload.delta);
  HttpResponse::Ok().json(json!({
      "message": "Cart quantity updated.",
      "cart": cart.view()
  }))
}

#[instrument(name = "handler::clear_cart", skip(app_state))]
pub async fn clear_cart_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let mut cart = app_state.cart.lock().await;
  cart.clear();
  HttpResponse::Ok().json(json!({
      "message": "Cart cleared.",
      "cart": cart.view()
  }))
}

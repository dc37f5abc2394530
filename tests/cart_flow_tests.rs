// tests/cart_flow_tests.rs
mod common;

use actix_web::{test, web, App};
use common::*;
use serde_json::{json, Value};

use vervida_web::web::configure_app_routes;

macro_rules! test_app {
  ($state:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new($state))
        .configure(configure_app_routes),
    )
    .await
  };
}

macro_rules! post_json {
  ($app:expr, $uri:expr, $body:expr) => {{
    let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
    let value: Value = test::call_and_read_body_json(&$app, req).await;
    value
  }};
}

macro_rules! cart_view {
  ($app:expr) => {{
    let req = test::TestRequest::get().uri("/cart").to_request();
    let value: Value = test::call_and_read_body_json(&$app, req).await;
    value
  }};
}

#[actix_web::test]
async fn adding_the_same_product_twice_merges_into_one_line() {
  let app = test_app!(local_state());

  post_json!(app, "/cart/add", &json!({"productId": 14, "quantity": 2}));
  let body = post_json!(app, "/cart/add", &json!({"productId": 14, "quantity": 3}));

  let cart = &body["cart"];
  assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
  assert_eq!(cart["lines"][0]["quantity"], 5);
  assert_eq!(cart["itemCount"], 5);
}

#[actix_web::test]
async fn add_defaults_to_quantity_one_and_snapshots_the_product() {
  let app = test_app!(local_state());

  let body = post_json!(app, "/cart/add", &json!({"productId": 4}));
  let line = &body["cart"]["lines"][0];
  assert_eq!(line["quantity"], 1);
  assert_eq!(line["title"], "Wireless Charging Pad");
  assert_eq!(line["unitPrice"], 49.99);
  assert_eq!(body["cart"]["total"], 49.99);
}

#[actix_web::test]
async fn cart_total_sums_quantity_times_price_across_lines() {
  let app = test_app!(local_state());

  post_json!(app, "/cart/add", &json!({"productId": 14, "quantity": 2})); // 2 x 199.99
  post_json!(app, "/cart/add", &json!({"productId": 4, "quantity": 1})); // 1 x 49.99

  let view = cart_view!(app);
  assert_eq!(view["total"], 449.97);
  assert_eq!(view["itemCount"], 3);
}

#[actix_web::test]
async fn updating_quantity_to_zero_removes_the_line() {
  let app = test_app!(local_state());

  post_json!(app, "/cart/add", &json!({"productId": 1, "quantity": 3}));
  let body = post_json!(app, "/cart/update", &json!({"productId": 1, "delta": -3}));
  assert!(body["cart"]["lines"].as_array().unwrap().is_empty());
  assert_eq!(body["cart"]["itemCount"], 0);
}

#[actix_web::test]
async fn removing_or_updating_an_absent_line_is_a_silent_no_op() {
  let app = test_app!(local_state());

  let removed = post_json!(app, "/cart/remove", &json!({"productId": 7}));
  assert!(removed["cart"]["lines"].as_array().unwrap().is_empty());

  let updated = post_json!(app, "/cart/update", &json!({"productId": 7, "delta": 2}));
  assert!(updated["cart"]["lines"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn clear_empties_the_cart() {
  let app = test_app!(local_state());

  post_json!(app, "/cart/add", &json!({"productId": 1, "quantity": 2}));
  post_json!(app, "/cart/add", &json!({"productId": 2, "quantity": 1}));
  let body = post_json!(app, "/cart/clear", &json!({}));

  assert!(body["cart"]["lines"].as_array().unwrap().is_empty());
  assert_eq!(body["cart"]["total"], 0.0);
}

#[actix_web::test]
async fn unhydratable_lines_display_generically_and_contribute_zero() {
  // Every product lookup fails, so added lines never get a snapshot.
  let app = test_app!(failing_state());

  post_json!(app, "/cart/add", &json!({"productId": 14, "quantity": 2}));
  let view = cart_view!(app);

  assert_eq!(view["lines"][0]["title"], "Product 14");
  assert_eq!(view["lines"][0]["unitPrice"], 0.0);
  assert_eq!(view["lines"][0]["quantity"], 2);
  assert_eq!(view["total"], 0.0);
}

#[actix_web::test]
async fn viewing_the_cart_hydrates_lines_persisted_without_a_snapshot() {
  // A previous session stored lines with only ids and quantities.
  let app = test_app!(state_with_seeded_cart(r#"[{"id":14,"quantity":2},{"id":4,"quantity":1}]"#));

  let view = cart_view!(app);
  assert_eq!(view["lines"][0]["title"], "Classic Men's Watch");
  assert_eq!(view["lines"][0]["unitPrice"], 199.99);
  assert_eq!(view["lines"][1]["title"], "Wireless Charging Pad");
  assert_eq!(view["total"], 449.97);
}

#[actix_web::test]
async fn malformed_persisted_cart_loads_as_empty() {
  let app = test_app!(state_with_seeded_cart("{definitely not json"));
  let view = cart_view!(app);
  assert!(view["lines"].as_array().unwrap().is_empty());
  assert_eq!(view["itemCount"], 0);
}

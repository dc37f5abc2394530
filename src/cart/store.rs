// src/cart/store.rs

use std::sync::Arc;

use futures_util::future::join_all;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::storage::CartStorage;
use crate::catalog::source::ProductSource;
use crate::models::{CartLine, Product};

/// Rendered cart summary: one entry per line plus the totals the cart badge
/// and the summary footer display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
  pub lines: Vec<CartLineView>,
  pub total: Decimal,
  pub item_count: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
  pub id: u64,
  pub title: String,
  pub quantity: u32,
  pub unit_price: Decimal,
  pub line_total: Decimal,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
}

/// The shopping cart: a collection of lines keyed by product id, with at
/// most one line per product. Every mutation persists the whole collection
/// through the storage backend; quantities never persist at 0 or below (a
/// line is removed instead).
///
/// A stale id with no matching product is tolerated: the line keeps an
/// empty snapshot and displays generically until hydration succeeds.
pub struct CartStore {
  lines: Vec<CartLine>,
  storage: Arc<dyn CartStorage>,
  fetcher: Arc<dyn ProductSource>,
}

impl CartStore {
  /// Loads whatever the storage backend holds; malformed data comes back as
  /// an empty cart per the storage contract.
  pub fn new(storage: Arc<dyn CartStorage>, fetcher: Arc<dyn ProductSource>) -> Self {
    let lines = storage.load();
    Self {
      lines,
      storage,
      fetcher,
    }
  }

  pub fn lines(&self) -> &[CartLine] {
    &self.lines
  }

  /// Sum of all line quantities, for the cart badge.
  pub fn item_count(&self) -> u64 {
    self.lines.iter().map(|l| u64::from(l.quantity)).sum()
  }

  /// Adds `quantity` of a product by id. An existing line has its quantity
  /// increased; a new line captures its display snapshot via the detail
  /// fetcher, tolerating fetch failure by starting with a bare line.
  pub async fn add(&mut self, product_id: u64, quantity: u32) {
    if quantity == 0 {
      return;
    }
    if let Some(line) = self.lines.iter_mut().find(|l| l.id == product_id) {
      // Saturate rather than overflow: quantities stay >= 1 no matter what
      // the request asks for.
      line.quantity = line.quantity.saturating_add(quantity);
    } else {
      let line = match self.fetcher.product(product_id).await {
        Ok(product) => CartLine::from_product(&product, quantity),
        Err(e) => {
          tracing::warn!(product_id, error = %e, "Product lookup failed on add; cart line starts without a snapshot.");
          CartLine::bare(product_id, quantity)
        }
      };
      self.lines.push(line);
    }
    self.persist();
  }

  /// Adds a product the caller already holds, capturing the snapshot
  /// directly instead of re-fetching.
  pub fn add_product(&mut self, product: &Product, quantity: u32) {
    if quantity == 0 {
      return;
    }
    if let Some(line) = self.lines.iter_mut().find(|l| l.id == product.id) {
      line.quantity = line.quantity.saturating_add(quantity);
      line.fill_from(product);
    } else {
      self.lines.push(CartLine::from_product(product, quantity));
    }
    self.persist();
  }

  /// Deletes the line if present; silent no-op otherwise.
  pub fn remove(&mut self, product_id: u64) {
    self.lines.retain(|l| l.id != product_id);
    self.persist();
  }

  /// Applies a signed quantity delta. A resulting quantity of 0 or below
  /// deletes the line. Silent no-op for an absent line.
  pub fn update_quantity(&mut self, product_id: u64, delta: i64) {
    let Some(line) = self.lines.iter_mut().find(|l| l.id == product_id) else {
      return;
    };
    let updated = i64::from(line.quantity).saturating_add(delta);
    if updated <= 0 {
      self.lines.retain(|l| l.id != product_id);
    } else {
      // Deltas beyond the representable range clamp instead of truncating.
      line.quantity = u32::try_from(updated).unwrap_or(u32::MAX);
    }
    self.persist();
  }

  pub fn clear(&mut self) {
    self.lines.clear();
    self.persist();
  }

  /// Sum over all lines of quantity x cached price. A line whose price has
  /// not been hydrated contributes 0, which understates the total; the
  /// warning makes that visible in the logs.
  pub fn total(&self) -> Decimal {
    self
      .lines
      .iter()
      .map(|l| {
        let price = match l.price {
          Some(p) => p,
          None => {
            tracing::warn!(product_id = l.id, "Cart line has no cached price; it contributes 0 to the total.");
            Decimal::ZERO
          }
        };
        Decimal::from(l.quantity) * price
      })
      .sum()
  }

  /// Backfills missing price/title snapshots via the detail fetcher. The
  /// per-line fetches run concurrently and independently; a failed fetch
  /// leaves that line incomplete instead of aborting the rest.
  pub async fn hydrate(&mut self) {
    let pending: Vec<u64> = self
      .lines
      .iter()
      .filter(|l| l.needs_hydration())
      .map(|l| l.id)
      .collect();
    if pending.is_empty() {
      return;
    }

    let fetcher = Arc::clone(&self.fetcher);
    let results = join_all(pending.into_iter().map(|id| {
      let fetcher = Arc::clone(&fetcher);
      async move { (id, fetcher.product(id).await) }
    }))
    .await;

    let mut changed = false;
    for (id, result) in results {
      match result {
        Ok(product) => {
          if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.fill_from(&product);
            changed = true;
          }
        }
        Err(e) => {
          tracing::warn!(product_id = id, error = %e, "Hydration fetch failed; leaving the line's snapshot incomplete.");
        }
      }
    }
    if changed {
      self.persist();
    }
  }

  /// Renders the cart for display. Lines without a snapshot show the
  /// product id as their label and a price of 0.
  pub fn view(&self) -> CartView {
    let lines = self
      .lines
      .iter()
      .map(|l| {
        let unit_price = l.price.unwrap_or(Decimal::ZERO);
        CartLineView {
          id: l.id,
          title: l.title.clone().unwrap_or_else(|| format!("Product {}", l.id)),
          quantity: l.quantity,
          unit_price,
          line_total: Decimal::from(l.quantity) * unit_price,
          image: l.image.clone(),
        }
      })
      .collect();
    CartView {
      lines,
      total: self.total(),
      item_count: self.item_count(),
    }
  }

  fn persist(&self) {
    // Storage failure is logged, not surfaced; the in-memory cart stays
    // authoritative for the session, matching localStorage semantics.
    if let Err(e) = self.storage.save(&self.lines) {
      tracing::error!(error = %e, "Failed to persist cart collection.");
    }
  }
}

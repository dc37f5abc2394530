// src/cart/storage.rs

use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::errors::{AppError, Result};
use crate::models::CartLine;

/// Canonical storage key for the cart document.
pub const CART_STORAGE_KEY: &str = "vervida_cart";

/// Persistence backend for the cart: the whole line collection is written
/// and read as one JSON array, last write wins. Malformed or missing stored
/// data loads as an empty cart; a parse failure is never an error.
pub trait CartStorage: Send + Sync {
  fn load(&self) -> Vec<CartLine>;
  fn save(&self, lines: &[CartLine]) -> Result<()>;
}

fn parse_lines(raw: &str) -> Vec<CartLine> {
  match serde_json::from_str(raw) {
    Ok(lines) => lines,
    Err(e) => {
      tracing::debug!(error = %e, "Stored cart data is malformed; starting with an empty cart.");
      Vec::new()
    }
  }
}

/// File-backed storage, the server-side analogue of the browser's
/// localStorage entry.
pub struct JsonFileStorage {
  path: PathBuf,
}

impl JsonFileStorage {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl CartStorage for JsonFileStorage {
  fn load(&self) -> Vec<CartLine> {
    match fs::read_to_string(&self.path) {
      Ok(raw) => parse_lines(&raw),
      Err(_) => Vec::new(),
    }
  }

  fn save(&self, lines: &[CartLine]) -> Result<()> {
    let raw = serde_json::to_string(lines).map_err(|e| AppError::Storage(e.to_string()))?;
    fs::write(&self.path, raw).map_err(|e| AppError::Storage(e.to_string()))
  }
}

/// In-memory storage holding the raw JSON document, used by tests. Keeping
/// the serialized form (rather than the parsed lines) exercises the same
/// parse path the file backend uses.
#[derive(Default)]
pub struct MemoryStorage {
  document: Mutex<Option<String>>,
}

impl MemoryStorage {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-seeds the stored document, valid JSON or not.
  pub fn with_raw(raw: impl Into<String>) -> Self {
    Self {
      document: Mutex::new(Some(raw.into())),
    }
  }

  pub fn raw(&self) -> Option<String> {
    self.document.lock().expect("storage mutex poisoned").clone()
  }
}

impl CartStorage for MemoryStorage {
  fn load(&self) -> Vec<CartLine> {
    match self.document.lock().expect("storage mutex poisoned").as_deref() {
      Some(raw) => parse_lines(raw),
      None => Vec::new(),
    }
  }

  fn save(&self, lines: &[CartLine]) -> Result<()> {
    let raw = serde_json::to_string(lines).map_err(|e| AppError::Storage(e.to_string()))?;
    *self.document.lock().expect("storage mutex poisoned") = Some(raw);
    Ok(())
  }
}

//! The mutable cart store.
//!
//! The store owns the ordered sequence of cart lines for one session. It is
//! loaded once at session start from the [`storage::keys::CART`] key and
//! every mutation synchronously re-serializes the full sequence back, so
//! the persisted cart is never more than one mutation behind the live one.
//! Malformed persisted data degrades to an empty cart; no cart operation
//! raises an error of its own, only the storage write can fail.

use std::sync::Arc;

use tracing::debug;

use clover_market_core::{ProductId, format_amount};

use crate::models::{CartLine, CatalogItem};
use crate::storage::{self, KeyValueStore, StorageError, keys};

/// Ordered collection of cart lines, keyed by product id.
///
/// Invariants: at most one line per id (adding an existing id merges
/// quantities, preserving the line's position) and every line's quantity is
/// ≥ 1 ([`CartStore::update_quantity`] removes a line rather than leaving
/// it at zero).
pub struct CartStore {
    lines: Vec<CartLine>,
    store: Arc<dyn KeyValueStore>,
}

impl CartStore {
    /// Load the cart persisted under [`keys::CART`], falling back to an
    /// empty cart if the key is absent or unparsable.
    #[must_use]
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let lines: Vec<CartLine> = storage::load_json(store.as_ref(), keys::CART);
        debug!(lines = lines.len(), "cart loaded");
        Self { lines, store }
    }

    fn persist(&self) -> Result<(), StorageError> {
        storage::store_json(self.store.as_ref(), keys::CART, &self.lines)
    }

    /// Add `quantity` of a catalog item to the cart.
    ///
    /// If a line with the same id already exists its quantity is
    /// incremented in place; otherwise a new line is appended. The order of
    /// other lines is preserved either way.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the cart fails.
    pub fn add_to_cart(&mut self, item: CatalogItem, quantity: u32) -> Result<(), StorageError> {
        debug!(id = %item.id, quantity, "add to cart");
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::from_item(item, quantity)),
        }
        self.persist()
    }

    /// Remove the line for `id`. A no-op (not an error) if `id` is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the cart fails.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), StorageError> {
        debug!(id = %id, "remove from cart");
        self.lines.retain(|l| l.id != id);
        self.persist()
    }

    /// Set the quantity of the line for `id` directly.
    ///
    /// The store enforces the ≥ 1 invariant itself: a quantity of zero
    /// removes the line instead of leaving it at zero. A no-op if `id` is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the cart fails.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<(), StorageError> {
        debug!(id = %id, quantity, "update quantity");
        if quantity == 0 {
            self.lines.retain(|l| l.id != id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| l.id == id) {
            line.quantity = quantity;
        }
        self.persist()
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if re-persisting the cart fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        debug!("clear cart");
        self.lines.clear();
        self.persist()
    }

    /// The live cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals, formatted to exactly two decimal places.
    #[must_use]
    pub fn total_price(&self) -> String {
        let total: f64 = self.lines.iter().map(CartLine::line_total).sum();
        format_amount(total)
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

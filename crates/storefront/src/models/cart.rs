//! Cart line and catalog item types.

use serde::{Deserialize, Serialize};

use clover_market_core::{ProductId, parse_amount};

/// A price as it arrives from catalog data: either a display string
/// (`"$35.00"`) or a bare number.
///
/// Kept in its original shape so persisted carts round-trip byte-for-byte;
/// [`PriceInput::amount`] derives the numeric value on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Text(String),
    Number(f64),
}

impl PriceInput {
    /// Numeric amount, soft-failing to `NaN` for unparsable text.
    #[must_use]
    pub fn amount(&self) -> f64 {
        match self {
            Self::Text(s) => parse_amount(s),
            Self::Number(n) => *n,
        }
    }
}

impl From<&str> for PriceInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for PriceInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// A catalog item as consumed by `add_to_cart`.
///
/// Catalog data itself is an external collaborator; this is only the shape
/// the cart needs from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ProductId,
    pub name: String,
    pub price: PriceInput,
    pub image_src: String,
}

/// One cart line: a catalog item plus a quantity.
///
/// Invariants (maintained by the cart store): at most one line per `id` in
/// a cart, and `quantity` is always ≥ 1 - a decrement to zero removes the
/// line, never leaves it at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: PriceInput,
    pub image_src: String,
    pub quantity: u32,
}

impl CartLine {
    /// Build a fresh line from a catalog item.
    #[must_use]
    pub fn from_item(item: CatalogItem, quantity: u32) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            image_src: item.image_src,
            quantity,
        }
    }

    /// Line total: unit price times quantity (`NaN` propagates).
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price.amount() * f64::from(self.quantity)
    }
}

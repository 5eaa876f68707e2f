//! Pure price derivation: subtotal → tax → shipping → discount → total.
//!
//! Nothing here is cached or persisted: every evaluation recomputes the
//! whole breakdown from the live cart and the current promo entry, so the
//! total is always a function of current cart + current promo state. That
//! also makes promo application idempotent - the discount is derived, not
//! accumulated, so re-applying the same code cannot double it.

use clover_market_core::parse_amount;

use crate::cart::CartStore;

/// Tax rate used by the cart summary panel.
///
/// The cart page and the checkout page historically use different literal
/// rates. The divergence is preserved per call site rather than unified;
/// see DESIGN.md.
pub const CART_SUMMARY_TAX_RATE: f64 = 0.08;

/// Tax rate used by the checkout summary panel.
pub const CHECKOUT_TAX_RATE: f64 = 0.10;

/// Orders above this subtotal ship free.
pub const FREE_SHIPPING_THRESHOLD: f64 = 100.0;

/// Flat shipping charge below the free-shipping threshold.
pub const FLAT_SHIPPING: f64 = 10.0;

/// Discount rate applied when a recognized promo code is entered.
pub const PROMO_DISCOUNT_RATE: f64 = 0.10;

/// Recognized promo codes (compared case-insensitively).
const PROMO_CODES: &[&str] = &["discount10"];

/// Whether `code` is a recognized promo code.
#[must_use]
pub fn promo_applies(code: &str) -> bool {
    PROMO_CODES.iter().any(|known| known.eq_ignore_ascii_case(code))
}

/// One evaluation of the price pipeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBreakdown {
    pub subtotal: f64,
    pub tax: f64,
    pub shipping: f64,
    pub discount: f64,
    pub total: f64,
}

impl PriceBreakdown {
    /// Derive the breakdown from the live cart.
    ///
    /// `tax_rate` is supplied by the call site ([`CART_SUMMARY_TAX_RATE`]
    /// or [`CHECKOUT_TAX_RATE`]); `promo_code` is whatever the user has
    /// currently entered, if anything.
    #[must_use]
    pub fn compute(cart: &CartStore, tax_rate: f64, promo_code: Option<&str>) -> Self {
        let subtotal = parse_amount(&cart.total_price());
        let tax = subtotal * tax_rate;
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING
        };
        let discount = match promo_code {
            Some(code) if promo_applies(code) => subtotal * PROMO_DISCOUNT_RATE,
            _ => 0.0,
        };

        Self {
            subtotal,
            tax,
            shipping,
            discount,
            total: subtotal + tax + shipping - discount,
        }
    }
}

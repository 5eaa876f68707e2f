//! Checkout: price derivation and the order submission pipeline.

pub mod pricing;
pub mod submit;

pub use pricing::{
    CART_SUMMARY_TAX_RATE, CHECKOUT_TAX_RATE, PriceBreakdown, promo_applies,
};
pub use submit::{Checkout, CheckoutError, CheckoutState};

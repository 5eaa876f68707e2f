//! Domain models for the storefront core.
//!
//! These types mirror the persisted JSON shapes (camelCase keys) so that a
//! session can read back data written by earlier sessions unchanged.

pub mod cart;
pub mod checkout;
pub mod order;

pub use cart::{CartLine, CatalogItem, PriceInput};
pub use checkout::{CheckoutForm, FieldError, UserProfile, ValidationErrors};
pub use order::{Order, ShippingAddress};

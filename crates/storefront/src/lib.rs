//! Clover Market Storefront - the cart-to-order lifecycle.
//!
//! This crate implements the storefront core: a mutable shopping cart, the
//! price-derivation pipeline (subtotal → tax → shipping → discount → total),
//! the checkout validation/submission flow, and the persisted order records
//! read back and filtered by the order-history view.
//!
//! # Architecture
//!
//! - State is session-scoped and single-threaded; every cart mutation
//!   synchronously re-persists the full cart through an injectable
//!   key-value [`storage`] port.
//! - Pricing is a pure derivation recomputed on every read; nothing about
//!   it is cached or persisted independently of the cart.
//! - Orders are append-only snapshots written by the checkout pipeline via
//!   whole-collection read-modify-write. Two concurrent writers can lose an
//!   update (last writer wins); see [`storage`] for the limitation note.
//!
//! # Modules
//!
//! - [`storage`] - Key-value storage port with file and in-memory backends
//! - [`models`] - Cart lines, checkout form, and order records
//! - [`cart`] - The mutable cart store
//! - [`checkout`] - Pricing engine and order submission pipeline
//! - [`orders`] - Order-history loading and filtering
//! - [`state`] - Session state wiring the pieces together

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod models;
pub mod orders;
pub mod state;
pub mod storage;

pub use cart::CartStore;
pub use checkout::{CheckoutError, PriceBreakdown};
pub use models::{CartLine, CatalogItem, CheckoutForm, Order, UserProfile};
pub use orders::{DateRange, OrderFilter, PriceRange};
pub use state::Session;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

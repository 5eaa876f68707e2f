//! Clover Market Core - Shared types library.
//!
//! This crate provides common types used across all Clover Market components:
//! - `storefront` - The cart, checkout, and order-history subsystem
//! - `cli` - Command-line storefront session driver
//!
//! # Architecture
//!
//! The core crate contains only types and small pure helpers - no I/O, no
//! storage access. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money parsing helpers,
//!   and order/payment status enums

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

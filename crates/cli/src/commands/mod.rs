//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod orders;

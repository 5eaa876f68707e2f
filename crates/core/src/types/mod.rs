//! Core types for Clover Market.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod status;

pub use id::*;
pub use money::{format_amount, parse_amount};
pub use status::{OrderStatus, PaymentMethod, PaymentMethodError};

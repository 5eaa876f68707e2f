//! Integration tests for Clover Market.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p clover-market-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart → checkout → persisted order round trips
//! - `order_history` - Persisted orders read back and filtered
//!
//! The tests in `tests/` drive the storefront through [`test_session`]
//! against either backend.

use std::sync::Arc;

use clover_market_storefront::{MemoryStore, Session};

/// A session over a fresh in-memory store.
#[must_use]
pub fn test_session() -> Session {
    Session::new(Arc::new(MemoryStore::new()))
}

//! The order submission pipeline.
//!
//! One checkout attempt is a small state machine:
//!
//! ```text
//! Editing → Validating → Processing → Complete
//!              └── back to Editing on validation failure
//! ```
//!
//! There is no failed or cancelled terminal state: processing is simulated
//! with a fixed delay and always succeeds, so the only recoverable failure
//! is client-side validation (plus storage I/O on the file backend, which
//! the browser original has no analogue for).

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use thiserror::Error;
use tracing::info;

use clover_market_core::{OrderId, OrderStatus, format_amount};

use crate::cart::CartStore;
use crate::checkout::pricing::{CHECKOUT_TAX_RATE, PriceBreakdown};
use crate::models::{CheckoutForm, Order, ValidationErrors};
use crate::storage::{self, KeyValueStore, StorageError, keys};

/// Simulated payment-processing delay; there is no real gateway call and
/// the delay is not cancellable once started.
pub const PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// Where a checkout attempt currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutState {
    Editing,
    Validating,
    Processing,
    Complete,
}

/// Why a checkout attempt did not produce an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout is unreachable with nothing to buy; callers should
    /// navigate away.
    #[error("cart is empty")]
    EmptyCart,

    /// Required fields are missing; the attempt is back in `Editing` and
    /// can be resubmitted after correction (no retry limit).
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Persisting the order or the cleared cart failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One checkout attempt over the session cart.
pub struct Checkout<'a> {
    cart: &'a mut CartStore,
    store: Arc<dyn KeyValueStore>,
    state: CheckoutState,
}

impl<'a> Checkout<'a> {
    /// Entry guard: begin a checkout attempt.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when the cart is empty -
    /// checkout is unreachable with nothing to buy, and callers should
    /// redirect away.
    pub fn begin(
        cart: &'a mut CartStore,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        Ok(Self {
            cart,
            store,
            state: CheckoutState::Editing,
        })
    }

    /// Current pipeline state.
    #[must_use]
    pub fn state(&self) -> CheckoutState {
        self.state
    }

    /// Submit the form: validate, simulate processing, persist the order,
    /// and clear the cart.
    ///
    /// On success the attempt is `Complete`, the returned [`Order`] has
    /// been appended to the persisted collection, and the cart is empty.
    /// The order id is a uniformly random six-digit number; collisions
    /// against existing orders are not checked.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::Validation`] when required fields are missing;
    ///   the attempt drops back to `Editing` and no state is touched.
    /// - [`CheckoutError::EmptyCart`] when the attempt already completed
    ///   (the cart is gone; further navigation is the only exit).
    /// - [`CheckoutError::Storage`] when a persistence write fails.
    pub async fn submit(&mut self, form: &CheckoutForm) -> Result<Order, CheckoutError> {
        if self.state == CheckoutState::Complete {
            return Err(CheckoutError::EmptyCart);
        }

        self.state = CheckoutState::Validating;
        let errors = form.validate();
        if !errors.is_empty() {
            self.state = CheckoutState::Editing;
            return Err(CheckoutError::Validation(errors));
        }

        self.state = CheckoutState::Processing;
        tokio::time::sleep(PROCESSING_DELAY).await;

        let breakdown = PriceBreakdown::compute(self.cart, CHECKOUT_TAX_RATE, form.promo_code.as_deref());
        let order = Order {
            id: generate_order_id(),
            date: Utc::now(),
            items: self.cart.lines().to_vec(),
            total: format_amount(breakdown.total),
            status: OrderStatus::Processing,
            shipping_address: form.shipping_address(),
            payment_method: form.payment_method,
        };

        // Whole-collection read-modify-write; a concurrent writer between
        // the load and the store loses its append (see storage module).
        let mut orders: Vec<Order> = storage::load_json(self.store.as_ref(), keys::ORDERS);
        orders.push(order.clone());
        storage::store_json(self.store.as_ref(), keys::ORDERS, &orders)?;

        self.cart.clear()?;
        self.state = CheckoutState::Complete;
        info!(id = %order.id, total = %order.total, "order submitted");

        Ok(order)
    }
}

/// Uniformly random six-digit numeric order id.
fn generate_order_id() -> OrderId {
    let n: u32 = rand::rng().random_range(100_000..=999_999);
    OrderId::new(n.to_string())
}

//! Session state shared across storefront operations.

use std::sync::Arc;

use crate::cart::CartStore;
use crate::checkout::{Checkout, CheckoutError};
use crate::models::{Order, UserProfile};
use crate::orders::{self, OrderFilter};
use crate::storage::KeyValueStore;

/// One browser-session equivalent: the storage handle, the live cart, and
/// the optional signed-in user.
///
/// Lifecycle mirrors the original context objects: initialized at session
/// start (loading the persisted cart once), persisted on every mutation by
/// the stores themselves, no teardown. All state is single-session,
/// best-effort persisted.
pub struct Session {
    store: Arc<dyn KeyValueStore>,
    cart: CartStore,
    user: Option<UserProfile>,
}

impl Session {
    /// Start a session over the given store, loading any persisted cart.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        let cart = CartStore::load(store.clone());
        Self {
            store,
            cart,
            user: None,
        }
    }

    /// Attach the signed-in user (supplied by the external auth subsystem).
    pub fn set_user(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// The underlying storage handle.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }

    /// Begin a checkout attempt over the session cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] when there is nothing to buy.
    pub fn begin_checkout(&mut self) -> Result<Checkout<'_>, CheckoutError> {
        Checkout::begin(&mut self.cart, self.store.clone())
    }

    /// Load and filter the persisted order history.
    #[must_use]
    pub fn order_history(&self, filter: &OrderFilter) -> Vec<Order> {
        let all = orders::load_orders(self.store.as_ref());
        orders::filter_orders(&all, filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CatalogItem;
    use crate::storage::MemoryStore;
    use clover_market_core::ProductId;

    #[test]
    fn test_session_reloads_persisted_cart() {
        let store = Arc::new(MemoryStore::new());

        let mut session = Session::new(store.clone());
        session
            .cart_mut()
            .add_to_cart(
                CatalogItem {
                    id: ProductId::new(1),
                    name: "Mug".to_string(),
                    price: "$14.00".into(),
                    image_src: "/images/1.jpg".to_string(),
                },
                2,
            )
            .unwrap();
        drop(session);

        let next = Session::new(store);
        assert_eq!(next.cart().count(), 2);
    }

    #[test]
    fn test_empty_session_has_no_history() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        assert!(session.order_history(&OrderFilter::default()).is_empty());
        assert!(session.user().is_none());
    }
}

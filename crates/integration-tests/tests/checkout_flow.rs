//! End-to-end cart → checkout → order round trips.

use std::sync::Arc;

use clover_market_core::{PaymentMethod, ProductId};
use clover_market_storefront::models::CheckoutForm;
use clover_market_storefront::{
    CartLine, CatalogItem, CheckoutError, FileStore, KeyValueStore, OrderFilter, Session,
};

fn organizer() -> CatalogItem {
    CatalogItem {
        id: ProductId::new(1),
        name: "Walnut Desk Organizer".to_string(),
        price: "$35.00".into(),
        image_src: "/images/desk-organizer.jpg".to_string(),
    }
}

fn filled_form() -> CheckoutForm {
    CheckoutForm {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        address: "12 Elm Street".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97201".to_string(),
        country: "United States".to_string(),
        payment_method: PaymentMethod::PayPal,
        ..CheckoutForm::default()
    }
}

#[tokio::test(start_paused = true)]
async fn cart_to_order_round_trip() {
    let mut session = clover_market_integration_tests::test_session();
    session.cart_mut().add_to_cart(organizer(), 2).unwrap();
    assert_eq!(session.cart().total_price(), "70.00");

    let submitted = {
        let mut checkout = session.begin_checkout().unwrap();
        checkout.submit(&filled_form()).await.unwrap()
    };

    // Subtotal 70.00, checkout tax 7.00, shipping 10.00
    assert_eq!(submitted.total, "87.00");
    assert!(session.cart().is_empty());

    // The persisted collection is camelCase JSON under the orders key
    let raw = session.store().get("orders").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["id"], submitted.id.as_str());
    assert_eq!(json[0]["total"], "87.00");
    assert_eq!(json[0]["status"], "Processing");
    assert_eq!(json[0]["paymentMethod"], "PayPal");
    assert_eq!(json[0]["items"][0]["imageSrc"], "/images/desk-organizer.jpg");

    // Read back through the history view model: field-for-field equal
    let history = session.order_history(&OrderFilter::default());
    assert_eq!(history, vec![submitted]);
}

#[tokio::test(start_paused = true)]
async fn blocked_submission_leaves_everything_untouched() {
    let mut session = clover_market_integration_tests::test_session();
    session.cart_mut().add_to_cart(organizer(), 1).unwrap();

    let mut form = filled_form();
    form.address = String::new();

    {
        let mut checkout = session.begin_checkout().unwrap();
        let err = checkout.submit(&form).await.unwrap_err();
        match err {
            CheckoutError::Validation(errors) => {
                assert_eq!(errors.get("address"), Some("Address is required"));
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    assert_eq!(session.cart().count(), 1);
    assert!(session.order_history(&OrderFilter::default()).is_empty());
}

#[tokio::test(start_paused = true)]
async fn checkout_entry_guard_redirects_on_empty_cart() {
    let mut session = clover_market_integration_tests::test_session();
    assert!(matches!(
        session.begin_checkout(),
        Err(CheckoutError::EmptyCart)
    ));
}

#[tokio::test(start_paused = true)]
async fn orders_survive_session_restart_on_file_store() {
    let tmp = tempfile::tempdir().unwrap();
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(tmp.path()).unwrap());

    let submitted = {
        let mut session = Session::new(store.clone());
        session.cart_mut().add_to_cart(organizer(), 2).unwrap();
        let mut checkout = session.begin_checkout().unwrap();
        checkout.submit(&filled_form()).await.unwrap()
    };

    // A fresh session over the same directory sees the order and the
    // cleared cart
    let next = Session::new(store);
    assert!(next.cart().is_empty());
    assert_eq!(next.order_history(&OrderFilter::default()), vec![submitted]);
}

#[tokio::test(start_paused = true)]
async fn order_items_are_snapshots_not_live_references() {
    let mut session = clover_market_integration_tests::test_session();
    session.cart_mut().add_to_cart(organizer(), 2).unwrap();

    let order = {
        let mut checkout = session.begin_checkout().unwrap();
        checkout.submit(&filled_form()).await.unwrap()
    };

    // Mutating the (now empty) cart afterwards cannot touch the order
    session.cart_mut().add_to_cart(organizer(), 5).unwrap();
    let history = session.order_history(&OrderFilter::default());
    assert_eq!(
        history[0].items,
        vec![CartLine::from_item(organizer(), 2)]
    );
    assert_eq!(history[0].items, order.items);
}

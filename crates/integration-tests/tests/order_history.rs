//! Order history filtering over submitted orders.

use clover_market_core::{PaymentMethod, ProductId};
use clover_market_storefront::models::CheckoutForm;
use clover_market_storefront::{
    CatalogItem, DateRange, OrderFilter, PriceRange, Session,
};

async fn submit_order(session: &mut Session, item: CatalogItem, quantity: u32) -> String {
    session.cart_mut().add_to_cart(item, quantity).unwrap();
    let mut checkout = session.begin_checkout().unwrap();
    let order = checkout
        .submit(&CheckoutForm {
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
        })
        .await
        .unwrap();
    order.id.to_string()
}

fn item(id: i64, name: &str, price: &str) -> CatalogItem {
    CatalogItem {
        id: ProductId::new(id),
        name: name.to_string(),
        price: price.into(),
        image_src: format!("/images/{id}.jpg"),
    }
}

#[tokio::test(start_paused = true)]
async fn query_filter_finds_order_by_item_name() {
    let mut session = clover_market_integration_tests::test_session();
    submit_order(&mut session, item(1, "Walnut Desk Organizer", "$35.00"), 1).await;
    submit_order(&mut session, item(2, "Ceramic Mug", "$14.00"), 1).await;

    let filter = OrderFilter {
        query: "ceramic".to_string(),
        ..OrderFilter::default()
    };
    let matched = session.order_history(&filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].items[0].name, "Ceramic Mug");
}

#[tokio::test(start_paused = true)]
async fn query_filter_finds_order_by_id() {
    let mut session = clover_market_integration_tests::test_session();
    let id = submit_order(&mut session, item(1, "Ceramic Mug", "$14.00"), 1).await;
    submit_order(&mut session, item(2, "Oak Bookshelf", "$80.00"), 1).await;

    let filter = OrderFilter {
        query: id.clone(),
        ..OrderFilter::default()
    };
    let matched = session.order_history(&filter);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id.as_str(), id);
}

#[tokio::test(start_paused = true)]
async fn price_bands_partition_submitted_orders() {
    let mut session = clover_market_integration_tests::test_session();
    // 14 + 1.40 + 10 = 25.40 → under50
    submit_order(&mut session, item(1, "Ceramic Mug", "$14.00"), 1).await;
    // 240 + 24 + 0 = 264.00 → over200
    submit_order(&mut session, item(2, "Oak Bookshelf", "$80.00"), 3).await;

    let under = session.order_history(&OrderFilter {
        price_range: PriceRange::Under50,
        ..OrderFilter::default()
    });
    assert_eq!(under.len(), 1);
    assert_eq!(under[0].total, "25.40");

    let over = session.order_history(&OrderFilter {
        price_range: PriceRange::Over200,
        ..OrderFilter::default()
    });
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].total, "264.00");
}

#[tokio::test(start_paused = true)]
async fn fresh_orders_fall_inside_every_date_range() {
    let mut session = clover_market_integration_tests::test_session();
    submit_order(&mut session, item(1, "Ceramic Mug", "$14.00"), 1).await;

    for range in [
        DateRange::All,
        DateRange::Last30Days,
        DateRange::Last3Months,
        DateRange::Last6Months,
    ] {
        let matched = session.order_history(&OrderFilter {
            date_range: range,
            ..OrderFilter::default()
        });
        assert_eq!(matched.len(), 1, "range {range:?} should match");
    }
}

#[tokio::test(start_paused = true)]
async fn status_filter_matches_newly_submitted_orders() {
    let mut session = clover_market_integration_tests::test_session();
    submit_order(&mut session, item(1, "Ceramic Mug", "$14.00"), 1).await;

    // New orders are Processing; a shipped filter excludes them
    let processing = session.order_history(&OrderFilter {
        status: Some("PROCESSING".to_string()),
        ..OrderFilter::default()
    });
    assert_eq!(processing.len(), 1);

    let shipped = session.order_history(&OrderFilter {
        status: Some("Shipped".to_string()),
        ..OrderFilter::default()
    });
    assert!(shipped.is_empty());
}

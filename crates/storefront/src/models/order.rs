//! Persisted order records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clover_market_core::{OrderId, OrderStatus, PaymentMethod};

use super::cart::CartLine;

/// Shipping destination captured at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

/// The durable artifact of a successful checkout.
///
/// Created exactly once per submission and immutable thereafter: `items` is
/// a snapshot of the cart lines at submission time, not a live reference,
/// and `total` is the grand total formatted to two decimals. Orders are
/// appended to the persisted collection and never deleted by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub date: DateTime<Utc>,
    pub items: Vec<CartLine>,
    pub total: String,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
}

impl Order {
    /// Grand total as a number (`NaN` if the persisted string is corrupt).
    #[must_use]
    pub fn total_amount(&self) -> f64 {
        clover_market_core::parse_amount(&self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clover_market_core::ProductId;

    fn sample_order() -> Order {
        Order {
            id: OrderId::new("123456".to_string()),
            date: "2026-08-01T10:30:00Z".parse().unwrap(),
            items: vec![CartLine {
                id: ProductId::new(1),
                name: "Walnut Desk Organizer".to_string(),
                price: "$35.00".into(),
                image_src: "/images/desk-organizer.jpg".to_string(),
                quantity: 2,
            }],
            total: "87.00".to_string(),
            status: OrderStatus::Processing,
            shipping_address: ShippingAddress {
                address: "12 Elm Street".to_string(),
                city: "Portland".to_string(),
                state: "OR".to_string(),
                zip: "97201".to_string(),
                country: "US".to_string(),
            },
            payment_method: PaymentMethod::CreditCard,
        }
    }

    #[test]
    fn test_order_serde_shape() {
        let json = serde_json::to_value(sample_order()).unwrap();
        assert_eq!(json["id"], "123456");
        assert_eq!(json["status"], "Processing");
        assert_eq!(json["paymentMethod"], "Credit Card");
        assert_eq!(json["shippingAddress"]["zip"], "97201");
        // ISO-8601 timestamp
        assert!(json["date"].as_str().unwrap().starts_with("2026-08-01T10:30:00"));
    }

    #[test]
    fn test_order_json_round_trip() {
        let order = sample_order();
        let raw = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_total_amount() {
        assert_eq!(sample_order().total_amount(), 87.0);
    }
}

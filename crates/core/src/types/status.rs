//! Status enums for orders and payment methods.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Order fulfillment status.
///
/// Orders are created as [`OrderStatus::Processing`] and are immutable in
/// this system; the later statuses exist only as display labels read back
/// from persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// Display label, matching the persisted JSON value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Processing => "Processing",
            Self::Shipped => "Shipped",
            Self::Delivered => "Delivered",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Error parsing a payment method tag.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown payment method tag: {0}")]
pub struct PaymentMethodError(String);

/// How an order was paid.
///
/// Serializes as the display label (`"Credit Card"` / `"PayPal"`) because
/// that is what persisted orders carry; checkout forms use the kebab-case
/// tags `credit-card` / `paypal`, parsed via [`PaymentMethod::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "PayPal")]
    PayPal,
}

impl PaymentMethod {
    /// Parse the form-facing tag.
    ///
    /// # Errors
    ///
    /// Returns [`PaymentMethodError`] when the tag is neither
    /// `credit-card` nor `paypal`.
    pub fn from_tag(tag: &str) -> Result<Self, PaymentMethodError> {
        match tag {
            "credit-card" => Ok(Self::CreditCard),
            "paypal" => Ok(Self::PayPal),
            other => Err(PaymentMethodError(other.to_string())),
        }
    }

    /// The form-facing tag for this method.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::CreditCard => "credit-card",
            Self::PayPal => "paypal",
        }
    }

    /// Display label, matching the persisted JSON value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Processing.label(), "Processing");
        assert_eq!(OrderStatus::Shipped.to_string(), "Shipped");
    }

    #[test]
    fn test_order_status_serde_label() {
        let json = serde_json::to_string(&OrderStatus::Processing).unwrap();
        assert_eq!(json, "\"Processing\"");
        let back: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(back, OrderStatus::Delivered);
    }

    #[test]
    fn test_payment_method_from_tag() {
        assert_eq!(
            PaymentMethod::from_tag("credit-card"),
            Ok(PaymentMethod::CreditCard)
        );
        assert_eq!(PaymentMethod::from_tag("paypal"), Ok(PaymentMethod::PayPal));
        assert!(PaymentMethod::from_tag("bitcoin").is_err());
    }

    #[test]
    fn test_payment_method_serde_label() {
        let json = serde_json::to_string(&PaymentMethod::CreditCard).unwrap();
        assert_eq!(json, "\"Credit Card\"");
        let back: PaymentMethod = serde_json::from_str("\"PayPal\"").unwrap();
        assert_eq!(back, PaymentMethod::PayPal);
    }
}

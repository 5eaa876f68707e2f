//! Checkout form state and validation.

use serde::{Deserialize, Serialize};

use clover_market_core::PaymentMethod;

use super::order::ShippingAddress;

/// Contact identity supplied by the (external) authentication subsystem,
/// used only to pre-fill the checkout contact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// One validation failure, keyed by the form field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Ordered field → message map produced by validation.
///
/// Order follows the form layout so "the first error" is well-defined for
/// surfacing to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Message for a specific field, if that field failed.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// The first error in form order.
    #[must_use]
    pub fn first(&self) -> Option<&FieldError> {
        self.0.first()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over all errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.first() {
            Some(e) => write!(f, "{} ({} field(s) invalid)", e.message, self.len()),
            None => f.write_str("no validation errors"),
        }
    }
}

/// Mutable checkout form state for one checkout session.
///
/// Empty strings mean "not filled in". Card fields are mandatory only when
/// the payment method is credit card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckoutForm {
    // Contact
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    // Shipping address
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    // Payment
    pub payment_method: PaymentMethod,
    pub card_number: String,
    pub card_name: String,
    pub card_expiry: String,
    pub card_cvv: String,
    /// Promo code entered on the summary panel; lifetime is this form only.
    pub promo_code: Option<String>,
}

impl CheckoutForm {
    /// Pre-fill the contact fields from the signed-in user, if any.
    pub fn prefill(&mut self, profile: &UserProfile) {
        self.first_name = profile.first_name.clone();
        self.last_name = profile.last_name.clone();
        self.email = profile.email.clone();
    }

    /// Required-field presence check.
    ///
    /// Returns the empty map when the form is submittable. Validation never
    /// rejects a value for its format, only for its absence.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        let required: &[(&'static str, &str, &str)] = &[
            ("firstName", &self.first_name, "First name is required"),
            ("lastName", &self.last_name, "Last name is required"),
            ("email", &self.email, "Email is required"),
            ("address", &self.address, "Address is required"),
            ("city", &self.city, "City is required"),
            ("state", &self.state, "State is required"),
            ("zip", &self.zip, "ZIP code is required"),
            ("country", &self.country, "Country is required"),
        ];
        for &(field, value, message) in required {
            if value.trim().is_empty() {
                errors.push(field, message);
            }
        }

        if self.payment_method == PaymentMethod::CreditCard {
            let card: &[(&'static str, &str, &str)] = &[
                ("cardNumber", &self.card_number, "Card number is required"),
                ("cardName", &self.card_name, "Name on card is required"),
                ("cardExpiry", &self.card_expiry, "Expiry date is required"),
                ("cardCvv", &self.card_cvv, "CVV is required"),
            ];
            for &(field, value, message) in card {
                if value.trim().is_empty() {
                    errors.push(field, message);
                }
            }
        }

        errors
    }

    /// The shipping address as captured on the order record.
    #[must_use]
    pub fn shipping_address(&self) -> ShippingAddress {
        ShippingAddress {
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip: self.zip.clone(),
            country: self.country.clone(),
        }
    }
}

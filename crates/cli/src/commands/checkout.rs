//! Checkout subcommand: validate the form and submit the order.

use clap::Args;
use thiserror::Error;

use clover_market_core::{PaymentMethod, PaymentMethodError};
use clover_market_storefront::models::CheckoutForm;
use clover_market_storefront::{CheckoutError, Session};

#[derive(Args)]
pub struct CheckoutArgs {
    // Contact
    #[arg(long, default_value = "")]
    pub first_name: String,
    #[arg(long, default_value = "")]
    pub last_name: String,
    #[arg(long, default_value = "")]
    pub email: String,

    // Shipping address
    #[arg(long, default_value = "")]
    pub address: String,
    #[arg(long, default_value = "")]
    pub city: String,
    #[arg(long, default_value = "")]
    pub state: String,
    #[arg(long, default_value = "")]
    pub zip: String,
    #[arg(long, default_value = "United States")]
    pub country: String,

    // Payment
    /// Payment method tag (`credit-card` or `paypal`)
    #[arg(long, default_value = PaymentMethod::CreditCard.tag())]
    pub payment: String,
    #[arg(long, default_value = "")]
    pub card_number: String,
    #[arg(long, default_value = "")]
    pub card_name: String,
    #[arg(long, default_value = "")]
    pub card_expiry: String,
    #[arg(long, default_value = "")]
    pub card_cvv: String,

    /// Promo code to apply to the order total
    #[arg(long)]
    pub promo: Option<String>,
}

impl CheckoutArgs {
    fn into_form(self, payment_method: PaymentMethod) -> CheckoutForm {
        CheckoutForm {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            address: self.address,
            city: self.city,
            state: self.state,
            zip: self.zip,
            country: self.country,
            payment_method,
            card_number: self.card_number,
            card_name: self.card_name,
            card_expiry: self.card_expiry,
            card_cvv: self.card_cvv,
            promo_code: self.promo,
        }
    }
}

/// Checkout failure as reported to the terminal.
#[derive(Debug, Error)]
pub enum CheckoutCommandError {
    /// The empty-cart redirect, surfaced as a message
    #[error("your cart is empty - add something before checking out")]
    NothingToBuy,
    #[error(transparent)]
    UnknownPayment(#[from] PaymentMethodError),
    #[error("{0}")]
    Other(String),
}

pub async fn run(mut session: Session, args: CheckoutArgs) -> Result<(), CheckoutCommandError> {
    let payment_method = PaymentMethod::from_tag(&args.payment)?;
    let form = args.into_form(payment_method);

    let mut checkout = session.begin_checkout().map_err(|e| match e {
        CheckoutError::EmptyCart => CheckoutCommandError::NothingToBuy,
        other => CheckoutCommandError::Other(other.to_string()),
    })?;

    println!("Processing your order...");
    match checkout.submit(&form).await {
        Ok(order) => {
            println!("Order confirmed!");
            println!("  Order number: {}", order.id);
            println!("  Total: ${}", order.total);
            println!("  Status: {}", order.status);
            Ok(())
        }
        Err(CheckoutError::Validation(errors)) => {
            for error in errors.iter() {
                println!("  {}: {}", error.field, error.message);
            }
            Err(CheckoutCommandError::Other(format!(
                "{} field(s) need attention",
                errors.len()
            )))
        }
        Err(CheckoutError::EmptyCart) => Err(CheckoutCommandError::NothingToBuy),
        Err(CheckoutError::Storage(e)) => Err(CheckoutCommandError::Other(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(payment: &str) -> CheckoutArgs {
        CheckoutArgs {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            address: "12 Elm Street".to_string(),
            city: "Portland".to_string(),
            state: "OR".to_string(),
            zip: "97201".to_string(),
            country: "United States".to_string(),
            payment: payment.to_string(),
            card_number: String::new(),
            card_name: String::new(),
            card_expiry: String::new(),
            card_cvv: String::new(),
            promo: None,
        }
    }

    #[test]
    fn test_payment_tag_maps_through_from_tag() {
        let a = args("paypal");
        let method = PaymentMethod::from_tag(&a.payment).unwrap();
        let form = a.into_form(method);
        assert_eq!(form.payment_method, PaymentMethod::PayPal);
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_unknown_payment_tag_is_rejected() {
        let a = args("bitcoin");
        assert!(PaymentMethod::from_tag(&a.payment).is_err());
    }

    #[test]
    fn test_default_payment_tag_round_trips() {
        // The clap default is the credit-card tag
        assert_eq!(
            PaymentMethod::from_tag(PaymentMethod::CreditCard.tag()),
            Ok(PaymentMethod::CreditCard)
        );
    }
}

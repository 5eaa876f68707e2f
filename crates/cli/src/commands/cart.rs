//! Cart subcommands: add, remove, update, show, clear.

use clap::Subcommand;

use clover_market_core::ProductId;
use clover_market_storefront::checkout::pricing::CART_SUMMARY_TAX_RATE;
use clover_market_storefront::models::CatalogItem;
use clover_market_storefront::{PriceBreakdown, Session, StorageError};

#[derive(Subcommand)]
pub enum CartCommand {
    /// Add a catalog item to the cart
    Add {
        /// Catalog item id
        #[arg(long)]
        id: i64,

        /// Item name
        #[arg(long)]
        name: String,

        /// Item price (e.g., "$35.00")
        #[arg(long)]
        price: String,

        /// Item image path
        #[arg(long, default_value = "")]
        image: String,

        /// Units to add
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a line from the cart
    Remove {
        /// Catalog item id
        #[arg(long)]
        id: i64,
    },
    /// Set a line's quantity directly (0 removes the line)
    Update {
        /// Catalog item id
        #[arg(long)]
        id: i64,

        /// New quantity
        #[arg(long)]
        quantity: u32,
    },
    /// Print the cart with the cart-page summary
    Show {
        /// Promo code to apply to the summary
        #[arg(long)]
        promo: Option<String>,
    },
    /// Empty the cart
    Clear,
}

pub fn run(mut session: Session, command: &CartCommand) -> Result<(), StorageError> {
    match command {
        CartCommand::Add {
            id,
            name,
            price,
            image,
            quantity,
        } => {
            let item = CatalogItem {
                id: ProductId::new(*id),
                name: name.clone(),
                price: price.as_str().into(),
                image_src: image.clone(),
            };
            session.cart_mut().add_to_cart(item, *quantity)?;
            println!("Added {quantity} x {name}");
        }
        CartCommand::Remove { id } => {
            session.cart_mut().remove_from_cart(ProductId::new(*id))?;
            println!("Removed item {id}");
        }
        CartCommand::Update { id, quantity } => {
            session
                .cart_mut()
                .update_quantity(ProductId::new(*id), *quantity)?;
            println!("Set item {id} quantity to {quantity}");
        }
        CartCommand::Show { promo } => show(&session, promo.as_deref()),
        CartCommand::Clear => {
            session.cart_mut().clear()?;
            println!("Cart cleared");
        }
    }
    Ok(())
}

fn show(session: &Session, promo: Option<&str>) {
    let cart = session.cart();
    if cart.is_empty() {
        println!("Your cart is empty");
        return;
    }

    for line in cart.lines() {
        println!(
            "  [{}] {} x{}  ${:.2}",
            line.id,
            line.name,
            line.quantity,
            line.line_total()
        );
    }

    // Cart-page summary uses the 8% rate
    let p = PriceBreakdown::compute(cart, CART_SUMMARY_TAX_RATE, promo);
    println!("  {} item(s)", cart.count());
    println!("  Subtotal: ${:.2}", p.subtotal);
    println!("  Tax:      ${:.2}", p.tax);
    println!("  Shipping: ${:.2}", p.shipping);
    if p.discount > 0.0 {
        println!("  Discount: -${:.2}", p.discount);
    }
    println!("  Total:    ${:.2}", p.total);
}

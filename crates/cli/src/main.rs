//! Clover Market CLI - drives a storefront session from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two of a catalog item to the cart
//! clover cart add --id 1 --name "Walnut Desk Organizer" --price "$35.00" \
//!     --image /images/desk-organizer.jpg --quantity 2
//!
//! # Show the cart with the cart-page summary (8% tax)
//! clover cart show --promo discount10
//!
//! # Check out
//! clover checkout --first-name Ada --last-name Lovelace --email ada@example.com \
//!     --address "12 Elm Street" --city Portland --state OR --zip 97201 \
//!     --payment paypal
//!
//! # Browse order history
//! clover orders --status processing --date last30days
//! ```
//!
//! # Environment Variables
//!
//! - `CLOVER_DATA_DIR` - Session data directory (default `.clover-market`)
//!
//! # Commands
//!
//! - `cart` - Add, remove, update, show, and clear cart lines
//! - `checkout` - Validate and submit an order from the current cart
//! - `orders` - List persisted orders with compound filters

#![cfg_attr(not(test), forbid(unsafe_code))]
// Terminal output is this binary's purpose
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use commands::{cart::CartCommand, checkout::CheckoutArgs, orders::OrdersArgs};

#[derive(Parser)]
#[command(name = "clover")]
#[command(author, version, about = "Clover Market storefront CLI")]
struct Cli {
    /// Session data directory (overrides CLOVER_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartCommand,
    },
    /// Check out the current cart
    Checkout(Box<CheckoutArgs>),
    /// List order history
    Orders(OrdersArgs),
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let session = config::open_session(cli.data_dir)?;

    match cli.command {
        Commands::Cart { action } => commands::cart::run(session, &action)?,
        Commands::Checkout(args) => commands::checkout::run(session, *args).await?,
        Commands::Orders(args) => commands::orders::run(&session, &args),
    }

    Ok(())
}

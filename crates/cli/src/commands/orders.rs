//! Orders subcommand: list and filter order history.

use clap::{Args, ValueEnum};

use clover_market_storefront::{DateRange, OrderFilter, PriceRange, Session};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DateArg {
    All,
    Last30days,
    Last3months,
    Last6months,
}

impl From<DateArg> for DateRange {
    fn from(arg: DateArg) -> Self {
        match arg {
            DateArg::All => Self::All,
            DateArg::Last30days => Self::Last30Days,
            DateArg::Last3months => Self::Last3Months,
            DateArg::Last6months => Self::Last6Months,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriceArg {
    All,
    Under50,
    #[value(name = "50to100")]
    FiftyTo100,
    #[value(name = "100to200")]
    HundredTo200,
    Over200,
}

impl From<PriceArg> for PriceRange {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::All => Self::All,
            PriceArg::Under50 => Self::Under50,
            PriceArg::FiftyTo100 => Self::From50To100,
            PriceArg::HundredTo200 => Self::From100To200,
            PriceArg::Over200 => Self::Over200,
        }
    }
}

#[derive(Args)]
pub struct OrdersArgs {
    /// Status to match (case-insensitive; "all" matches everything)
    #[arg(long, default_value = "all")]
    pub status: String,

    /// Free text matched against order numbers and item names
    #[arg(long, default_value = "")]
    pub query: String,

    /// How far back to look
    #[arg(long, value_enum, default_value_t = DateArg::All)]
    pub date: DateArg,

    /// Total-price band
    #[arg(long, value_enum, default_value_t = PriceArg::All)]
    pub price: PriceArg,
}

pub fn run(session: &Session, args: &OrdersArgs) {
    let filter = OrderFilter {
        status: Some(args.status.clone()),
        query: args.query.clone(),
        date_range: args.date.into(),
        price_range: args.price.into(),
    };

    let orders = session.order_history(&filter);
    if orders.is_empty() {
        println!("No orders found");
        return;
    }

    for order in &orders {
        println!(
            "Order #{}  {}  {}  ${}",
            order.id,
            order.date.format("%Y-%m-%d"),
            order.status,
            order.total
        );
        for item in &order.items {
            println!("    {} x{}", item.name, item.quantity);
        }
    }
    println!("{} order(s)", orders.len());
}

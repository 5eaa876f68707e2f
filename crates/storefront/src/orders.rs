//! Order-history loading and filtering.
//!
//! The view model reads the persisted order collection (most recent first)
//! and applies a conjunctive filter over status, free text, date range, and
//! price range. Filtering is a pure function of `(orders, filter)`: the
//! date ranges are evaluated against the clock at filter time, never
//! cached, so "last 30 days" is always relative to now.

use chrono::{Duration, Months, Utc};
use tracing::debug;

use crate::models::Order;
use crate::storage::{self, KeyValueStore, keys};

/// How far back an order's date may lie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    #[default]
    All,
    Last30Days,
    Last3Months,
    Last6Months,
}

/// Which band an order's grand total must fall in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    All,
    Under50,
    From50To100,
    From100To200,
    Over200,
}

impl PriceRange {
    fn matches(self, total: f64) -> bool {
        match self {
            Self::All => true,
            Self::Under50 => total < 50.0,
            Self::From50To100 => (50.0..=100.0).contains(&total),
            Self::From100To200 => total > 100.0 && total <= 200.0,
            Self::Over200 => total > 200.0,
        }
    }
}

/// Compound filter state for the order-history view.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive exact status match; `None` means "all".
    pub status: Option<String>,
    /// Free text matched against the order id and item names.
    pub query: String,
    pub date_range: DateRange,
    pub price_range: PriceRange,
}

/// Load all persisted orders, most recent first.
///
/// Fails soft: an absent or unparsable collection yields an empty list.
#[must_use]
pub fn load_orders(store: &dyn KeyValueStore) -> Vec<Order> {
    let mut orders: Vec<Order> = storage::load_json(store, keys::ORDERS);
    orders.sort_by(|a, b| b.date.cmp(&a.date));
    debug!(orders = orders.len(), "order history loaded");
    orders
}

/// Apply the compound filter: every active criterion must match (AND).
///
/// Pure and idempotent for a fixed instant; re-evaluating with the same
/// inputs yields the same result.
#[must_use]
pub fn filter_orders(orders: &[Order], filter: &OrderFilter) -> Vec<Order> {
    let now = Utc::now();
    orders
        .iter()
        .filter(|order| {
            matches_status(order, filter.status.as_deref())
                && matches_query(order, &filter.query)
                && matches_date(order, filter.date_range, now)
                && filter.price_range.matches(order.total_amount())
        })
        .cloned()
        .collect()
}

fn matches_status(order: &Order, status: Option<&str>) -> bool {
    match status {
        None => true,
        Some(s) if s.eq_ignore_ascii_case("all") => true,
        Some(s) => order.status.label().eq_ignore_ascii_case(s),
    }
}

fn matches_query(order: &Order, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    // The id match is a plain substring test; only item names are
    // compared case-insensitively.
    if order.id.as_str().contains(query) {
        return true;
    }
    let query = query.to_lowercase();
    order
        .items
        .iter()
        .any(|item| item.name.to_lowercase().contains(&query))
}

fn matches_date(order: &Order, range: DateRange, now: chrono::DateTime<Utc>) -> bool {
    let cutoff = match range {
        DateRange::All => return true,
        DateRange::Last30Days => now - Duration::days(30),
        DateRange::Last3Months => now
            .checked_sub_months(Months::new(3))
            .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC),
        DateRange::Last6Months => now
            .checked_sub_months(Months::new(6))
            .unwrap_or(chrono::DateTime::<Utc>::MIN_UTC),
    };
    order.date >= cutoff
}

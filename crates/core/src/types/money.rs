//! Price parsing and formatting helpers.
//!
//! Catalog prices arrive as display strings (e.g., `"$35.00"`) or bare
//! numbers, so amounts are handled as `f64` with soft-failing parses rather
//! than a strict decimal type: input that is not a price parses to `NaN`,
//! and callers must not assume a valid number.

/// Parse a human-readable price into a numeric amount.
///
/// Strips every character that is not an ASCII digit or `.`, then parses
/// the remainder as a decimal. Returns `f64::NAN` when nothing numeric
/// survives the stripping (never panics, never errors).
///
/// # Example
///
/// ```rust
/// # use clover_market_core::parse_amount;
/// assert_eq!(parse_amount("$35.00"), 35.0);
/// assert_eq!(parse_amount("1,299.99"), 1299.99);
/// assert!(parse_amount("free").is_nan());
/// ```
#[must_use]
pub fn parse_amount(price_like: &str) -> f64 {
    let stripped: String = price_like
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    stripped.parse::<f64>().unwrap_or(f64::NAN)
}

/// Format an amount with exactly two decimal places (no currency symbol).
#[must_use]
pub fn format_amount(amount: f64) -> String {
    format!("{amount:.2}")
}

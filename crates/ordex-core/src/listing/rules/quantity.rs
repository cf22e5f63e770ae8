//! Quantity parsing.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a quantity token such as `4.00` or `1,000.00`. Commas are thousand separators.
pub fn parse_quantity(token: &str) -> Option<Decimal> {
    let cleaned = token.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    Decimal::from_str(&cleaned).ok()
}

/// First token that parses as a quantity. Scanning stops at the first success.
pub fn first_quantity(tokens: &[&str]) -> Option<Decimal> {
    tokens.iter().find_map(|t| parse_quantity(t))
}

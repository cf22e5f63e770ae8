//! Regex patterns for the atomic tokens of an order listing.
//!
//! Digits are matched as `[0-9]` so that every match parses as an ASCII number.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Order number anywhere in text, e.g. "SO-35312"
    pub static ref ORDER_NUMBER: Regex = Regex::new(
        r"\bSO-[0-9]+\b"
    ).unwrap();

    // Order header line: "SO-35312 TRENDCELL SDN BHD - DC1"
    pub static ref ORDER_HEADER: Regex = Regex::new(
        r"^(SO-[0-9]+)\s+(\S.*)$"
    ).unwrap();

    // Destination code as a whole token, e.g. "AVINA14"
    pub static ref DESTINATION_TOKEN: Regex = Regex::new(
        r"^AVINA[0-9]{2,3}$"
    ).unwrap();

    // Day-first date as a whole token: DD/MM/YY or DD/MM/YYYY
    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{2,4})$"
    ).unwrap();

    // Printed line number at the start of a line
    pub static ref SEQUENCE_START: Regex = Regex::new(
        r"^[0-9]+\s+"
    ).unwrap();
}

/// True if `token` is a destination code.
pub fn is_destination_token(token: &str) -> bool {
    DESTINATION_TOKEN.is_match(token)
}

/// True if `token` is a date.
pub fn is_date_token(token: &str) -> bool {
    DATE_TOKEN.is_match(token)
}

/// True if `line` begins with a sequence number followed by whitespace.
pub fn starts_with_sequence(line: &str) -> bool {
    SEQUENCE_START.is_match(line)
}

/// Printed line number. Numbers too large to represent saturate instead of rejecting the line.
pub fn parse_sequence(token: &str) -> Option<u64> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(token.parse().unwrap_or(u64::MAX))
}

/// Split an order header line into its order number and trailing text.
pub fn match_order_header(line: &str) -> Option<(&str, &str)> {
    let caps = ORDER_HEADER.captures(line)?;
    let order = caps.get(1)?.as_str();
    let rest = caps.get(2)?.as_str().trim();
    Some((order, rest))
}

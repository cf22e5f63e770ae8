//! Day-first delivery date parsing.

use chrono::{Datelike, NaiveDate, Utc};

use super::patterns::DATE_TOKEN;

/// Parse a `D/M/YY` or `D/M/YYYY` token, always reading the first number as the day.
///
/// Two-digit years land within fifty years of the current year.
pub fn parse_day_first(token: &str) -> Option<NaiveDate> {
    parse_day_first_near(token, Utc::now().year())
}

/// Like [`parse_day_first`], with two-digit years resolved around `reference_year`.
pub fn parse_day_first_near(token: &str, reference_year: i32) -> Option<NaiveDate> {
    let caps = DATE_TOKEN.captures(token)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year = parse_year(&caps[3], reference_year)?;

    NaiveDate::from_ymd_opt(year, month, day)
}

/// Convert a date token to `YYYY-MM-DD`, or hand the token back unchanged.
pub fn normalize_date(token: &str) -> String {
    match parse_day_first(token) {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => token.to_string(),
    }
}

/// First token on a line that is a date, normalized.
pub fn find_delivery_date(tokens: &[&str]) -> Option<String> {
    tokens
        .iter()
        .find(|t| DATE_TOKEN.is_match(t))
        .map(|t| normalize_date(t))
}

fn parse_year(s: &str, reference_year: i32) -> Option<i32> {
    let year: i32 = s.parse().ok()?;
    match s.len() {
        2 => Some(expand_two_digit_year(year, reference_year)),
        4 => Some(year),
        _ => None,
    }
}

/// Year in `[reference - 50, reference + 50)` ending in `yy`.
fn expand_two_digit_year(yy: i32, reference_year: i32) -> i32 {
    let year = reference_year - reference_year.rem_euclid(100) + yy;
    if year >= reference_year + 50 {
        year - 100
    } else if year < reference_year - 50 {
        year + 100
    } else {
        year
    }
}

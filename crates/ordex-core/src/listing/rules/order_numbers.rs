//! Document-wide order number and customer discovery.

use super::patterns::{match_order_header, ORDER_NUMBER};
use super::FieldExtractor;

/// Finds order numbers anywhere in the text.
pub struct OrderNumberExtractor;

impl OrderNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OrderNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderNumberExtractor {
    type Output = String;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ORDER_NUMBER.find(text).map(|m| m.as_str().to_string())
    }

    /// Unique order numbers in first-seen order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results: Vec<String> = Vec::new();

        for m in ORDER_NUMBER.find_iter(text) {
            // Skip if already found
            if results.iter().any(|r| r == m.as_str()) {
                continue;
            }
            results.push(m.as_str().to_string());
        }

        results
    }
}

/// Trailing text of the first order header line, or empty.
pub fn find_customer_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find_map(match_order_header)
        .map(|(_, customer)| customer.to_string())
        .unwrap_or_default()
}

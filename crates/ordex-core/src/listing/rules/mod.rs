//! Rule-based token matchers for order listings.

pub mod dates;
pub mod order_numbers;
pub mod patterns;
pub mod quantity;
pub mod suffix;

pub use dates::{find_delivery_date, normalize_date, parse_day_first, parse_day_first_near};
pub use order_numbers::{find_customer_name, OrderNumberExtractor};
pub use patterns::*;
pub use quantity::{first_quantity, parse_quantity};
pub use suffix::{repair_item_code, MatchStrategy, SuffixRepairer};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

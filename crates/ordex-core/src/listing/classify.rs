//! Physical line classification.

use super::rules::patterns::{is_destination_token, match_order_header, starts_with_sequence};

/// What a single trimmed line of listing text looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `SO-35312 CUSTOMER NAME`: switches the order context.
    OrderHeader { order_ref: &'a str, trailing: &'a str },
    /// Starts with a sequence number: a whole record, or the second half of a split one.
    ItemLine,
    /// Has a destination code but no sequence number: first half of a split record.
    DescriptionLine,
    /// Anything else.
    Noise,
}

/// Classify one trimmed, non-blank line.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some((order_ref, trailing)) = match_order_header(line) {
        return LineKind::OrderHeader { order_ref, trailing };
    }
    if starts_with_sequence(line) {
        return LineKind::ItemLine;
    }
    if line.split_whitespace().any(is_destination_token) {
        return LineKind::DescriptionLine;
    }
    LineKind::Noise
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(
            classify("SO-35312 TRENDCELL SDN BHD - DC1"),
            LineKind::OrderHeader {
                order_ref: "SO-35312",
                trailing: "TRENDCELL SDN BHD - DC1"
            }
        );
    }

    #[test]
    fn test_item_line() {
        assert_eq!(
            classify("1 D221-THAI-25KG/BAG PULUT HITAM THAI 25KG AVINA14 4.00 12/01/26 4.00"),
            LineKind::ItemLine
        );
        assert_eq!(classify("1  A999-01-20KG/BAG  1,000.00"), LineKind::ItemLine);
    }

    #[test]
    fn test_description_line() {
        assert_eq!(
            classify("U02.5-UNCLE BOB TEPUNG UBI KAYU 5KG X 4PKT  AVINA15  1,000.00"),
            LineKind::DescriptionLine
        );
    }

    #[test]
    fn test_noise() {
        assert_eq!(classify("Outstanding Sales Order Listing"), LineKind::Noise);
        assert_eq!(classify("Page 1 of 2"), LineKind::Noise);
        assert_eq!(classify("SO-35312"), LineKind::Noise);
    }
}

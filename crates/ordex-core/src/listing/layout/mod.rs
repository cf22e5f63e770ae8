//! Line item layouts.
//!
//! Layouts are tried in order over the whole document. The first one that
//! yields any record wins; later layouts are never mixed in, so a document
//! combining both arrangements keeps only the records of the first.

pub mod single_line;
pub mod split_line;

use tracing::{debug, trace};

use crate::listing::rules::SuffixRepairer;
use crate::models::order::{Layout, OrderLineRecord};

/// State shared by every layout pass over one document.
#[derive(Debug, Clone, Copy)]
pub struct ScanContext<'a> {
    /// Order number used until the first header line is seen.
    pub default_order_ref: &'a str,
    /// Item code repairer.
    pub repairer: &'a SuffixRepairer,
}

/// A whole-document line item extractor.
pub type LayoutExtractor = fn(&[&str], &ScanContext<'_>) -> Vec<OrderLineRecord>;

/// Layouts in the order they are attempted.
pub const LAYOUTS: [(Layout, LayoutExtractor); 2] = [
    (Layout::SingleLine, single_line::extract),
    (Layout::SplitLine, split_line::extract),
];

/// Run the layouts in order over trimmed, non-blank lines.
pub fn extract_line_items(
    lines: &[&str],
    ctx: &ScanContext<'_>,
) -> (Option<Layout>, Vec<OrderLineRecord>) {
    for (layout, extract) in LAYOUTS {
        let items = extract(lines, ctx);
        if !items.is_empty() {
            debug!("{} layout yielded {} records", layout.name(), items.len());
            return (Some(layout), items);
        }
        trace!("{} layout yielded nothing", layout.name());
    }
    (None, Vec::new())
}

/// Description tokens with any date token removed, joined by single spaces.
fn join_description(tokens: &[&str]) -> String {
    tokens
        .iter()
        .filter(|t| !crate::listing::rules::is_date_token(t))
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_preferred() {
        let repairer = SuffixRepairer::new();
        let ctx = ScanContext {
            default_order_ref: "SO-1",
            repairer: &repairer,
        };
        let lines = [
            "1 A1/BAG RICE AVINA14 2.00 12/01/26",
            "SUGAR 1KG AVINA15 3.00",
            "2 B2/PKT 3.00",
        ];

        let (layout, items) = extract_line_items(&lines, &ctx);
        assert_eq!(layout, Some(Layout::SingleLine));
        // The split-line record is lost: layouts are never mixed.
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].item_code, "A1/BAG");
    }

    #[test]
    fn test_falls_back_to_split_line() {
        let repairer = SuffixRepairer::new();
        let ctx = ScanContext {
            default_order_ref: "SO-1",
            repairer: &repairer,
        };
        let lines = ["SUGAR 1KG AVINA15 3.00", "2 B2/PKT 3.00"];

        let (layout, items) = extract_line_items(&lines, &ctx);
        assert_eq!(layout, Some(Layout::SplitLine));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_nothing_found() {
        let repairer = SuffixRepairer::new();
        let ctx = ScanContext {
            default_order_ref: "",
            repairer: &repairer,
        };
        let (layout, items) = extract_line_items(&["just", "noise"], &ctx);
        assert_eq!(layout, None);
        assert!(items.is_empty());
    }

    #[test]
    fn test_join_description_drops_dates() {
        assert_eq!(
            join_description(&["12/01/26", "PULUT", "HITAM", "1/2/2026"]),
            "PULUT HITAM"
        );
        assert_eq!(join_description(&[]), "");
    }
}

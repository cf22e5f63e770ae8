//! Document assembler: page text in, `ExtractionResult` out.

use tracing::{debug, info};

use crate::models::config::OrdexConfig;
use crate::models::order::ExtractionResult;

use super::layout::{extract_line_items, ScanContext};
use super::rules::{find_customer_name, FieldExtractor, OrderNumberExtractor, SuffixRepairer};

/// Diagnostic raised when the text has no order number at all.
pub const NO_ORDER_NUMBERS_FOUND: &str = "no order numbers found";

/// Diagnostic raised when neither layout produced a record.
pub const NO_LINE_ITEMS_FOUND: &str = "no line items extracted";

/// Trait for order listing parsing.
///
/// Parsing never fails. Problems are reported in `ExtractionResult::diagnostics`.
pub trait ListingParser {
    /// Parse already-concatenated listing text.
    fn parse(&self, text: &str) -> ExtractionResult;

    /// Parse per-page text, joining the pages first.
    fn parse_pages(&self, pages: &[String]) -> ExtractionResult;
}

/// Parser for "Outstanding Sales Order Listing" style documents.
#[derive(Debug, Clone)]
pub struct SalesOrderListingParser {
    repairer: SuffixRepairer,
    page_separator: String,
}

impl SalesOrderListingParser {
    /// Create a parser with default unit suffixes.
    pub fn new() -> Self {
        Self {
            repairer: SuffixRepairer::new(),
            page_separator: "\n".to_string(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &OrdexConfig) -> Self {
        Self::new()
            .with_repairer(SuffixRepairer::from_config(&config.extraction))
            .with_page_separator(config.pdf.page_separator.clone())
    }

    /// Use a custom item code repairer.
    pub fn with_repairer(mut self, repairer: SuffixRepairer) -> Self {
        self.repairer = repairer;
        self
    }

    /// Set the separator placed between pages.
    pub fn with_page_separator(mut self, separator: impl Into<String>) -> Self {
        self.page_separator = separator.into();
        self
    }

    /// The item code repairer in use.
    pub fn repairer(&self) -> &SuffixRepairer {
        &self.repairer
    }
}

impl Default for SalesOrderListingParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingParser for SalesOrderListingParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        let mut diagnostics = Vec::new();

        info!("Parsing order listing from {} characters of text", text.len());

        // Order numbers and customer come from the whole text, independent of items.
        let order_numbers = OrderNumberExtractor::new().extract_all(text);
        if order_numbers.is_empty() {
            diagnostics.push(NO_ORDER_NUMBERS_FOUND.to_string());
        }
        let customer_name_raw = find_customer_name(text);

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let ctx = ScanContext {
            default_order_ref: order_numbers.first().map(String::as_str).unwrap_or(""),
            repairer: &self.repairer,
        };
        let (layout, items) = extract_line_items(&lines, &ctx);

        if items.is_empty() {
            diagnostics.push(NO_LINE_ITEMS_FOUND.to_string());
        }

        let (summary_delivery_date, summary_destination) = items
            .first()
            .map(|first| {
                (
                    first.delivery_date.clone().unwrap_or_default(),
                    first.destination_code.clone(),
                )
            })
            .unwrap_or_default();

        debug!(
            "Extracted {} items for {} orders from {} lines ({} diagnostics)",
            items.len(),
            order_numbers.len(),
            lines.len(),
            diagnostics.len()
        );

        ExtractionResult {
            order_numbers,
            customer_name_raw,
            items,
            diagnostics,
            summary_delivery_date,
            summary_destination,
            layout,
            raw_text: text.to_string(),
        }
    }

    fn parse_pages(&self, pages: &[String]) -> ExtractionResult {
        debug!("Joining {} pages", pages.len());
        self.parse(&pages.join(&self.page_separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::Layout;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    const SINGLE_LINE_LISTING: &str = r#"
        SEM105 Outstanding Sales Order Listing
        SO No.   Customer
        SO-35312 TRENDCELL SDN BHD - DC1
        No Item Code Description Location Qty Date Balance
        1 D221-THAI-25KG/BAG PULUT HITAM THAI 25KG AVINA14 4.00 12/01/26 4.00
        2 TCD029-20PKT/BAGTRENDCELL SAGU 20PKT AVINA14 10.00 12/01/26 10.00
        SO-35313 TRENDCELL SDN BHD - DC2
        1 D221-THAI-25KG/PBUALGUT PULUT HITAM THAI 25KG AVINA15 2.00 15/01/26 2.00

        Total 16.00
    "#;

    #[test]
    fn test_parse_single_line_listing() {
        let result = SalesOrderListingParser::new().parse(SINGLE_LINE_LISTING);

        assert_eq!(result.order_numbers, vec!["SO-35312", "SO-35313"]);
        assert_eq!(result.customer_name_raw, "TRENDCELL SDN BHD - DC1");
        assert_eq!(result.layout, Some(Layout::SingleLine));
        assert!(result.diagnostics.is_empty());

        let codes: Vec<&str> = result.items.iter().map(|i| i.item_code.as_str()).collect();
        assert_eq!(
            codes,
            vec!["D221-THAI-25KG/BAG", "TCD029-20PKT/BAG", "D221-THAI-25KG/BAG"]
        );

        let refs: Vec<&str> = result.items.iter().map(|i| i.source_order_ref.as_str()).collect();
        assert_eq!(refs, vec!["SO-35312", "SO-35312", "SO-35313"]);

        assert_eq!(result.summary_delivery_date, "2026-01-12");
        assert_eq!(result.summary_destination, "AVINA14");
    }

    #[test]
    fn test_parse_split_line_listing() {
        let text = "SO-40001 KEDAI RUNCIT ALI\n\
                    U02.5-UNCLE BOB TEPUNG UBI KAYU 5KG X 4PKT  AVINA15  1,000.00\n\
                    1  A999-01-20KG/BAG  1,000.00\n";

        let result = SalesOrderListingParser::new().parse(text);

        assert_eq!(result.layout, Some(Layout::SplitLine));
        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.destination_code, "AVINA15");
        assert_eq!(item.quantity, Decimal::new(100000, 2));
        assert_eq!(item.item_code, "A999-01-20KG/BAG");
        assert_eq!(item.source_order_ref, "SO-40001");
        // No date on a split record: summary date stays empty.
        assert_eq!(result.summary_delivery_date, "");
        assert_eq!(result.summary_destination, "AVINA15");
    }

    #[test]
    fn test_no_order_numbers_still_extracts_items() {
        let text = "1 D221-THAI-25KG/BAG PULUT HITAM AVINA14 4.00 12/01/26";

        let result = SalesOrderListingParser::new().parse(text);

        assert!(result.order_numbers.is_empty());
        assert_eq!(result.diagnostics, vec![NO_ORDER_NUMBERS_FOUND.to_string()]);
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].source_order_ref, "");
    }

    #[test]
    fn test_empty_text() {
        let result = SalesOrderListingParser::new().parse("");

        assert!(result.items.is_empty());
        assert_eq!(
            result.diagnostics,
            vec![
                NO_ORDER_NUMBERS_FOUND.to_string(),
                NO_LINE_ITEMS_FOUND.to_string()
            ]
        );
        assert_eq!(result.summary_delivery_date, "");
        assert_eq!(result.summary_destination, "");
        assert_eq!(result.layout, None);
    }

    #[test]
    fn test_header_only_document() {
        let result = SalesOrderListingParser::new().parse("SO-1 CUSTOMER\nnothing else");
        assert_eq!(result.order_numbers, vec!["SO-1"]);
        assert_eq!(result.diagnostics, vec![NO_LINE_ITEMS_FOUND.to_string()]);
    }

    #[test]
    fn test_items_before_first_header_use_first_order_number() {
        let text = "1 A1/BAG RICE AVINA14 2.00 12/01/26\nSO-7 LATE HEADER\n2 B1/BAG RICE AVINA14 2.00 12/01/26";
        let result = SalesOrderListingParser::new().parse(text);

        let refs: Vec<&str> = result.items.iter().map(|i| i.source_order_ref.as_str()).collect();
        assert_eq!(refs, vec!["SO-7", "SO-7"]);
    }

    #[test]
    fn test_parse_pages_joins_pages() {
        let pages = vec![
            "SO-35312 TRENDCELL SDN BHD - DC1\n1 A1/BAG RICE AVINA14 2.00 12/01/26".to_string(),
            "2 B1/BAG RICE AVINA14 3.00 12/01/26".to_string(),
        ];

        let result = SalesOrderListingParser::new().parse_pages(&pages);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[1].sequence, 2);
        assert_eq!(result.raw_text, pages.join("\n"));
    }

    #[test]
    fn test_quantity_never_zero() {
        let text = "SO-1 C\n\
                    1 A1/BAG RICE AVINA14 0.00 12/01/26\n\
                    2 A2/BAG RICE AVINA14 0 12/01/26\n\
                    3 A3/BAG RICE AVINA14 1.00 12/01/26\n";
        let result = SalesOrderListingParser::new().parse(text);

        assert_eq!(result.items.len(), 1);
        assert!(result.items.iter().all(|i| !i.quantity.is_zero()));
    }

    #[test]
    fn test_degenerate_input_never_panics() {
        let parser = SalesOrderListingParser::new();
        for text in [
            "\n\n\n",
            "SO-",
            "SO-1",
            "1",
            "1 /",
            "AVINA14",
            "AVINA14\n1",
            "x AVINA14\n1 /",
            "99999999999 A/B C AVINA14 1 1/1/1",
            "1 Ünï/çødé AVINA123 -5 12/13/26",
            "\u{0c}\u{0c}SO-9 X\u{0c}",
        ] {
            let result = parser.parse(text);
            assert!(result.items.iter().all(|i| i.quantity > Decimal::ZERO));
        }
    }

    #[test]
    fn test_custom_suffixes_from_config() {
        let mut config = OrdexConfig::default();
        config.extraction.unit_suffixes = vec!["DRUM".to_string()];

        let parser = SalesOrderListingParser::from_config(&config);
        let result = parser.parse("1 OIL-200L/MURDOIL ENGINE OIL AVINA14 1.00 12/01/26");
        assert_eq!(result.items[0].item_code, "OIL-200L/DRUM");
    }
}

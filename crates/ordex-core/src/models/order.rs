//! Order listing data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One recovered line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineRecord {
    /// Line number as printed on the document. Display aid only.
    pub sequence: u64,

    /// Order number in effect when this line was encountered.
    pub source_order_ref: String,

    /// Canonical item code, unit suffix repaired.
    pub item_code: String,

    /// Free text between the item code and the destination code.
    pub description: String,

    /// Destination (warehouse/location) code.
    pub destination_code: String,

    /// Ordered quantity. Never zero.
    pub quantity: Decimal,

    /// Delivery date as `YYYY-MM-DD`, or the raw token when it did not parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,

    /// Filled in by destination routing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routed_destination: Option<String>,
}

/// Which physical arrangement the line items were recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// All fields of a record on one line.
    SingleLine,
    /// Description line followed by a sequence/item-code line.
    SplitLine,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Layout::SingleLine => "single_line",
            Layout::SplitLine => "split_line",
        }
    }
}

/// Output of one document parse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Unique order numbers, first-seen order.
    pub order_numbers: Vec<String>,

    /// Trailing text of the first order header line, or empty.
    pub customer_name_raw: String,

    /// Line items in document order.
    pub items: Vec<OrderLineRecord>,

    /// Non-fatal problems found while parsing. Empty means a clean parse.
    pub diagnostics: Vec<String>,

    /// Delivery date of the first item, or empty.
    pub summary_delivery_date: String,

    /// Destination code of the first item, or empty.
    pub summary_destination: String,

    /// Layout the items were recovered from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,

    /// Concatenated page text the result was extracted from.
    #[serde(skip_serializing, default)]
    pub raw_text: String,
}

impl ExtractionResult {
    /// True when no diagnostics were raised.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> Decimal {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

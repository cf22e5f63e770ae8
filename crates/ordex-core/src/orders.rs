//! Order drafting: grouping extracted lines per order and checking them against an item catalog.
//!
//! A group is all or nothing. If any of its item codes is unknown the whole
//! order is rejected, never drafted partially.

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{OrderError, Result};
use crate::models::order::{ExtractionResult, OrderLineRecord};

/// Order reference used for lines that carry none.
pub const UNKNOWN_ORDER_REF: &str = "UNKNOWN";

/// Master list of item codes that orders may reference.
pub trait ItemCatalog {
    /// True if `item_code` exists in the catalog.
    fn contains(&self, item_code: &str) -> bool;
}

/// In-memory item catalog.
#[derive(Debug, Clone, Default)]
pub struct ItemMaster {
    codes: HashSet<String>,
}

impl ItemMaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list of item codes.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse one item code per line. Blank lines and `#` comments are ignored.
    pub fn parse(text: &str) -> Self {
        Self::from_codes(
            text.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
        )
    }

    /// Load a catalog file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let master = Self::parse(&content);
        debug!("Loaded {} item codes from {}", master.len(), path.display());
        Ok(master)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl ItemCatalog for ItemMaster {
    fn contains(&self, item_code: &str) -> bool {
        self.codes.contains(item_code)
    }
}

/// Lines of one order, in document order.
#[derive(Debug, Clone)]
pub struct OrderGroup<'a> {
    pub order_ref: String,
    pub items: Vec<&'a OrderLineRecord>,
}

/// One line of a drafted order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftLine {
    pub item_code: String,
    pub quantity: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    pub destination_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routed_destination: Option<String>,
}

/// An order ready to be created in the system of record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDraft {
    /// Order number as printed on the listing.
    pub order_ref: String,
    /// Customer name as printed on the listing.
    pub customer: String,
    /// Earliest parsed delivery date among the lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_date: Option<String>,
    pub lines: Vec<DraftLine>,
}

/// Group items by their order reference, first-seen order.
pub fn group_by_order(result: &ExtractionResult) -> Vec<OrderGroup<'_>> {
    let mut groups: Vec<OrderGroup<'_>> = Vec::new();

    for item in &result.items {
        let order_ref = if item.source_order_ref.is_empty() {
            UNKNOWN_ORDER_REF
        } else {
            item.source_order_ref.as_str()
        };

        match groups.iter_mut().find(|g| g.order_ref == order_ref) {
            Some(group) => group.items.push(item),
            None => groups.push(OrderGroup {
                order_ref: order_ref.to_string(),
                items: vec![item],
            }),
        }
    }

    groups
}

/// Draft one order per group, rejecting any group with an unknown item code.
pub fn draft_orders<C>(
    result: &ExtractionResult,
    catalog: &C,
) -> Vec<std::result::Result<OrderDraft, OrderError>>
where
    C: ItemCatalog + ?Sized,
{
    group_by_order(result)
        .into_iter()
        .map(|group| draft_group(group, &result.customer_name_raw, catalog))
        .collect()
}

fn draft_group<C>(
    group: OrderGroup<'_>,
    customer: &str,
    catalog: &C,
) -> std::result::Result<OrderDraft, OrderError>
where
    C: ItemCatalog + ?Sized,
{
    let mut unknown: Vec<String> = Vec::new();
    for item in &group.items {
        if !catalog.contains(&item.item_code) && !unknown.contains(&item.item_code) {
            unknown.push(item.item_code.clone());
        }
    }

    if !unknown.is_empty() {
        warn!(
            "Order {} rejected, {} unknown item codes",
            group.order_ref,
            unknown.len()
        );
        return Err(OrderError::UnknownItems {
            order_ref: group.order_ref,
            item_codes: unknown,
        });
    }

    // Raw, unparsed dates never win: only ISO dates take part.
    let delivery_date = group
        .items
        .iter()
        .filter_map(|i| i.delivery_date.as_deref())
        .filter_map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
        .min()
        .map(|d| d.format("%Y-%m-%d").to_string());

    let lines = group
        .items
        .iter()
        .map(|i| DraftLine {
            item_code: i.item_code.clone(),
            quantity: i.quantity,
            delivery_date: i.delivery_date.clone(),
            destination_code: i.destination_code.clone(),
            routed_destination: i.routed_destination.clone(),
        })
        .collect();

    Ok(OrderDraft {
        order_ref: group.order_ref,
        customer: customer.to_string(),
        delivery_date,
        lines,
    })
}

//! Records split over two adjacent lines, description first.
//!
//! ```text
//! U02.5-UNCLE BOB TEPUNG UBI KAYU 5KG X 4PKT  AVINA15  1,000.00
//! 1  A999-01-20KG/BAG  1,000.00
//! ```
//!
//! Only attempted when no single-line record exists anywhere in the document.

use rust_decimal::Decimal;
use tracing::trace;

use super::{join_description, ScanContext};
use crate::listing::classify::{classify, LineKind};
use crate::listing::rules::{
    find_delivery_date, first_quantity, is_destination_token, parse_sequence, SuffixRepairer,
};
use crate::models::order::OrderLineRecord;

/// Extract every description/item line pair, tracking the order context through header lines.
pub fn extract(lines: &[&str], ctx: &ScanContext<'_>) -> Vec<OrderLineRecord> {
    let mut records = Vec::new();
    let mut current_order = ctx.default_order_ref;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        match classify(line) {
            LineKind::OrderHeader { order_ref, .. } => current_order = order_ref,
            LineKind::DescriptionLine => {
                let next = lines.get(i + 1).copied();
                if let Some(next) = next.filter(|n| classify(n) == LineKind::ItemLine) {
                    match parse_pair(line, next, current_order, ctx.repairer) {
                        Some(record) => records.push(record),
                        None => trace!("Rejected split-line pair: {} / {}", line, next),
                    }
                    // The pair is consumed whether or not it produced a record.
                    i += 2;
                    continue;
                }
            }
            LineKind::ItemLine | LineKind::Noise => {}
        }

        i += 1;
    }

    records
}

/// Parse a description line and the item line that follows it.
pub fn parse_pair(
    description_line: &str,
    item_line: &str,
    order_ref: &str,
    repairer: &SuffixRepairer,
) -> Option<OrderLineRecord> {
    let desc_tokens: Vec<&str> = description_line.split_whitespace().collect();
    let dest_idx = desc_tokens.iter().position(|t| is_destination_token(t))?;

    let description = join_description(&desc_tokens[..dest_idx]);
    let delivery_date = find_delivery_date(&desc_tokens);
    let desc_quantity = first_quantity(&desc_tokens[dest_idx + 1..]);

    let item_tokens: Vec<&str> = item_line.split_whitespace().collect();
    if item_tokens.len() < 2 {
        return None;
    }

    let sequence = parse_sequence(item_tokens[0])?;

    let item_code = repairer.repair(item_tokens[1]);
    if item_code.is_empty() {
        return None;
    }

    // The item line only supplies the quantity when the description line had none.
    let quantity = desc_quantity
        .or_else(|| first_quantity(&item_tokens[2..]))
        .unwrap_or(Decimal::ZERO);
    if quantity <= Decimal::ZERO {
        return None;
    }

    Some(OrderLineRecord {
        sequence,
        source_order_ref: order_ref.to_string(),
        item_code,
        description,
        destination_code: desc_tokens[dest_idx].to_string(),
        quantity,
        delivery_date,
        routed_destination: None,
    })
}

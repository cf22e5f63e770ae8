//! Records printed entirely on one line.
//!
//! ```text
//! 1 D221-THAI-25KG/BAG PULUT HITAM THAI 25KG AVINA14 4.00 12/01/26 4.00
//! ^ ^item code         ^description          ^dest   ^qty ^date
//! ```

use rust_decimal::Decimal;
use tracing::trace;

use super::{join_description, ScanContext};
use crate::listing::classify::{classify, LineKind};
use crate::listing::rules::{
    find_delivery_date, first_quantity, is_destination_token, parse_sequence, starts_with_sequence,
    SuffixRepairer,
};
use crate::models::order::OrderLineRecord;

const MIN_TOKENS: usize = 5;

/// Extract every single-line record, tracking the order context through header lines.
pub fn extract(lines: &[&str], ctx: &ScanContext<'_>) -> Vec<OrderLineRecord> {
    let mut records = Vec::new();
    let mut current_order = ctx.default_order_ref;

    for line in lines {
        match classify(line) {
            LineKind::OrderHeader { order_ref, .. } => current_order = order_ref,
            LineKind::ItemLine => match parse_line(line, current_order, ctx.repairer) {
                Some(record) => records.push(record),
                None => trace!("Rejected single-line candidate: {}", line),
            },
            LineKind::DescriptionLine | LineKind::Noise => {}
        }
    }

    records
}

/// Parse one line as a complete record. `None` if the line does not have the record shape.
pub fn parse_line(line: &str, order_ref: &str, repairer: &SuffixRepairer) -> Option<OrderLineRecord> {
    if !starts_with_sequence(line) {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_TOKENS {
        return None;
    }

    let sequence = parse_sequence(tokens[0])?;

    // Destination must come after the item code slot.
    let dest_idx = tokens.iter().position(|t| is_destination_token(t))?;
    if dest_idx < 2 {
        return None;
    }

    // A date anywhere on the line is what separates item rows from stray table text.
    let delivery_date = find_delivery_date(&tokens)?;

    let item_code = repairer.repair(tokens[1]);
    if item_code.is_empty() {
        return None;
    }

    // Dates sometimes land before the description when columns swap; they are dropped.
    let description = join_description(&tokens[2..dest_idx]);

    // First number after the destination is the quantity.
    let quantity = first_quantity(&tokens[dest_idx + 1..]).unwrap_or(Decimal::ZERO);
    if quantity <= Decimal::ZERO {
        return None;
    }

    Some(OrderLineRecord {
        sequence,
        source_order_ref: order_ref.to_string(),
        item_code,
        description,
        destination_code: tokens[dest_idx].to_string(),
        quantity,
        delivery_date: Some(delivery_date),
        routed_destination: None,
    })
}

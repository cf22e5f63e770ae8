//! Plain-text renderings of an extraction result for operators and senders.

use std::fmt::Write;

use crate::error::OrderError;
use crate::listing::{NO_LINE_ITEMS_FOUND, NO_ORDER_NUMBERS_FOUND};
use crate::models::order::ExtractionResult;

/// Multi-line, human-readable summary of a parse.
pub fn render_summary(result: &ExtractionResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Orders:   {}", join_or_dash(&result.order_numbers));
    let _ = writeln!(out, "Customer: {}", or_dash(&result.customer_name_raw));
    let _ = writeln!(out, "Delivery: {}", or_dash(&result.summary_delivery_date));
    let _ = writeln!(out, "Items:    {}", result.items.len());

    for item in &result.items {
        let _ = write!(
            out,
            "  {:>3}  {:<8} {:<28} {:>10}  {}",
            item.sequence,
            item.source_order_ref,
            item.item_code,
            item.quantity,
            item.destination_code
        );
        if let Some(routed) = &item.routed_destination {
            let _ = write!(out, " ({})", routed);
        }
        if let Some(date) = &item.delivery_date {
            let _ = write!(out, "  {}", date);
        }
        out.push('\n');
    }

    if !result.diagnostics.is_empty() {
        out.push_str("Issues:\n");
        for diagnostic in &result.diagnostics {
            let _ = writeln!(out, "  - {}", diagnostic);
        }
    }

    out
}

/// What would be drafted, without drafting anything.
pub fn render_test_mode(result: &ExtractionResult) -> String {
    format!(
        "TEST MODE - Would create orders for: {}\nCustomer: {}\nLines: {}",
        join_or_dash(&result.order_numbers),
        or_dash(&result.customer_name_raw),
        result.items.len()
    )
}

/// Fill `{order_refs}`, `{item_count}` and `{delivery_date}` in a notification template.
pub fn render_notification(template: &str, result: &ExtractionResult) -> String {
    template
        .replace("{order_refs}", &result.order_numbers.join(", "))
        .replace("{item_count}", &result.items.len().to_string())
        .replace("{delivery_date}", &result.summary_delivery_date)
}

/// Diagnostics that mean the document itself could not be read.
///
/// Other diagnostics, such as unmapped destinations, are for operators and
/// do not make the parse a failure.
pub fn parse_failures(result: &ExtractionResult) -> Vec<String> {
    result
        .diagnostics
        .iter()
        .filter(|d| matches!(d.as_str(), NO_ORDER_NUMBERS_FOUND | NO_LINE_ITEMS_FOUND))
        .cloned()
        .collect()
}

/// Message for a sender whose orders were parsed but could not be created.
pub fn render_rejection(rejections: &[OrderError]) -> String {
    let reasons: Vec<String> = rejections.iter().map(ToString::to_string).collect();
    format!(
        "Sales Order could not be created. {}. Please contact the office.",
        reasons.join("; ")
    )
}

/// Message for a sender whose document could not be processed.
pub fn render_failure(diagnostics: &[String]) -> String {
    format!(
        "Could not process your document. Issues: {}. Please contact the office.",
        diagnostics.join(", ")
    )
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order::OrderLineRecord;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn sample() -> ExtractionResult {
        ExtractionResult {
            order_numbers: vec!["SO-1".to_string(), "SO-2".to_string()],
            customer_name_raw: "ACME TRADING".to_string(),
            items: vec![OrderLineRecord {
                sequence: 1,
                source_order_ref: "SO-1".to_string(),
                item_code: "A1/BAG".to_string(),
                description: "RICE".to_string(),
                destination_code: "AVINA14".to_string(),
                quantity: Decimal::from(4),
                delivery_date: Some("2026-01-15".to_string()),
                routed_destination: Some("Avina 14 - SEMSB".to_string()),
            }],
            summary_delivery_date: "2026-01-15".to_string(),
            summary_destination: "AVINA14".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_notification_placeholders() {
        let text = render_notification(
            "Sales Order {order_refs} received. Items: {item_count} lines | Delivery: {delivery_date}",
            &sample(),
        );
        assert_eq!(
            text,
            "Sales Order SO-1, SO-2 received. Items: 1 lines | Delivery: 2026-01-15"
        );
    }

    #[test]
    fn test_test_mode() {
        assert_eq!(
            render_test_mode(&sample()),
            "TEST MODE - Would create orders for: SO-1, SO-2\nCustomer: ACME TRADING\nLines: 1"
        );
    }

    #[test]
    fn test_failure() {
        let diagnostics = vec![
            "no order numbers found".to_string(),
            "no line items extracted".to_string(),
        ];
        assert_eq!(
            render_failure(&diagnostics),
            "Could not process your document. Issues: no order numbers found, no line items extracted. Please contact the office."
        );
    }

    #[test]
    fn test_parse_failures_ignore_routing_diagnostics() {
        let mut result = sample();
        result.diagnostics.push("Destination 'AVINA99' has no routing entry".to_string());
        assert!(parse_failures(&result).is_empty());

        result.diagnostics.insert(0, NO_ORDER_NUMBERS_FOUND.to_string());
        assert_eq!(parse_failures(&result), vec![NO_ORDER_NUMBERS_FOUND.to_string()]);
    }

    #[test]
    fn test_rejection() {
        let rejections = vec![
            OrderError::UnknownItems {
                order_ref: "SO-1".to_string(),
                item_codes: vec!["X1/BAG".to_string(), "X2/PKT".to_string()],
            },
            OrderError::UnknownItems {
                order_ref: "SO-2".to_string(),
                item_codes: vec!["X3/KG".to_string()],
            },
        ];
        assert_eq!(
            render_rejection(&rejections),
            "Sales Order could not be created. order SO-1 rejected, unknown items: X1/BAG, X2/PKT; order SO-2 rejected, unknown items: X3/KG. Please contact the office."
        );
    }

    #[test]
    fn test_summary_lists_items_and_issues() {
        let mut result = sample();
        result.diagnostics.push("Destination 'AVINA99' has no routing entry".to_string());

        let text = render_summary(&result);
        assert!(text.contains("Orders:   SO-1, SO-2"));
        assert!(text.contains("A1/BAG"));
        assert!(text.contains("(Avina 14 - SEMSB)"));
        assert!(text.contains("  - Destination 'AVINA99' has no routing entry"));
    }

    #[test]
    fn test_summary_of_empty_result() {
        let text = render_summary(&ExtractionResult::default());
        assert!(text.starts_with("Orders:   -\nCustomer: -\n"));
        assert!(!text.contains("Issues"));
    }
}

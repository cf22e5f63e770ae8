//! Destination code routing.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::models::config::RoutingConfig;
use crate::models::order::OrderLineRecord;

/// Maps a destination code to the place goods are routed to.
pub trait DestinationRouter {
    /// Routed destination for `destination_code`, if known.
    fn route(&self, destination_code: &str) -> Option<String>;
}

/// Routing backed by a static table.
#[derive(Debug, Clone, Default)]
pub struct RoutingTable {
    entries: BTreeMap<String, String>,
}

impl RoutingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self {
            entries: config.destinations.clone(),
        }
    }

    /// Add or replace one entry.
    pub fn with_entry(mut self, code: impl Into<String>, destination: impl Into<String>) -> Self {
        self.entries.insert(code.into(), destination.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DestinationRouter for RoutingTable {
    fn route(&self, destination_code: &str) -> Option<String> {
        self.entries.get(destination_code).cloned()
    }
}

/// Fill `routed_destination` on every item.
///
/// Returns one diagnostic per distinct unmapped destination code, first-seen order.
pub fn resolve_destinations<R>(items: &mut [OrderLineRecord], router: &R) -> Vec<String>
where
    R: DestinationRouter + ?Sized,
{
    let mut diagnostics = Vec::new();
    let mut missing = HashSet::new();

    for item in items.iter_mut() {
        item.routed_destination = router.route(&item.destination_code);
        if item.routed_destination.is_none() && missing.insert(item.destination_code.clone()) {
            diagnostics.push(format!(
                "Destination '{}' has no routing entry",
                item.destination_code
            ));
        }
    }

    debug!(
        "Routed {} items, {} unmapped destinations",
        items.len(),
        missing.len()
    );

    diagnostics
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(code: &str) -> OrderLineRecord {
        OrderLineRecord {
            sequence: 1,
            source_order_ref: "SO-1".to_string(),
            item_code: "A1/BAG".to_string(),
            description: String::new(),
            destination_code: code.to_string(),
            quantity: Decimal::ONE,
            delivery_date: None,
            routed_destination: None,
        }
    }

    #[test]
    fn test_resolve_destinations() {
        let table = RoutingTable::new().with_entry("AVINA14", "Avina 14 - SEMSB");
        let mut items = vec![item("AVINA14"), item("AVINA99"), item("AVINA99"), item("AVINA15")];

        let diagnostics = resolve_destinations(&mut items, &table);

        assert_eq!(items[0].routed_destination.as_deref(), Some("Avina 14 - SEMSB"));
        assert_eq!(items[1].routed_destination, None);
        assert_eq!(
            diagnostics,
            vec![
                "Destination 'AVINA99' has no routing entry".to_string(),
                "Destination 'AVINA15' has no routing entry".to_string(),
            ]
        );
    }

    #[test]
    fn test_from_config() {
        let mut config = RoutingConfig::default();
        config
            .destinations
            .insert("AVINA15".to_string(), "Avina 15 - SEMSB".to_string());

        let table = RoutingTable::from_config(&config);
        assert_eq!(table.len(), 1);
        assert_eq!(table.route("AVINA15").as_deref(), Some("Avina 15 - SEMSB"));
        assert_eq!(table.route("AVINA14"), None);
    }

    #[test]
    fn test_stale_routing_is_cleared() {
        let mut items = vec![item("AVINA14")];
        items[0].routed_destination = Some("old".to_string());

        let diagnostics = resolve_destinations(&mut items, &RoutingTable::new());
        assert_eq!(items[0].routed_destination, None);
        assert_eq!(diagnostics.len(), 1);
    }
}

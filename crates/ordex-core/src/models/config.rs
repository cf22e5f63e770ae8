//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{OrdexError, Result};

/// Main configuration for ordex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdexConfig {
    /// Line item extraction configuration.
    pub extraction: ExtractionConfig,

    /// Page text handling.
    pub pdf: PdfConfig,

    /// Destination code routing table.
    pub routing: RoutingConfig,

    /// What to do with a parsed document.
    pub dispatch: DispatchConfig,
}

/// Line item extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Known unit suffixes, highest priority first.
    pub unit_suffixes: Vec<String>,

    /// Characters kept after the slash when no unit suffix is recognized.
    pub fallback_suffix_len: usize,
}

/// Default unit suffixes in priority order.
pub const DEFAULT_UNIT_SUFFIXES: &[&str] = &[
    "BAG", "PKT", "KG", "G", "BOX", "CTN", "PCS", "SET", "TIN", "BTL", "BT", "ROLL", "PAC", "PAK",
    "UNIT",
];

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            unit_suffixes: DEFAULT_UNIT_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            fallback_suffix_len: 5,
        }
    }
}

/// Page text configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Separator placed between page texts before parsing.
    pub page_separator: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            page_separator: "\n".to_string(),
        }
    }
}

/// Destination routing configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingConfig {
    /// Destination code -> routed destination (warehouse) name.
    pub destinations: BTreeMap<String, String>,
}

/// Dispatch configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Report what would be drafted instead of drafting it.
    pub test_mode: bool,

    /// Render a notification for the sender after a successful parse.
    pub notify_on_success: bool,

    /// Template for the success notification.
    /// Placeholders: `{order_refs}`, `{item_count}`, `{delivery_date}`.
    pub success_template: String,
}

/// Default success notification template.
pub const DEFAULT_SUCCESS_TEMPLATE: &str =
    "Sales Order {order_refs} received. Items: {item_count} lines | Delivery: {delivery_date}";

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            notify_on_success: true,
            success_template: DEFAULT_SUCCESS_TEMPLATE.to_string(),
        }
    }
}

impl OrdexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the extractor cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.extraction.unit_suffixes.iter().any(|s| s.trim().is_empty()) {
            return Err(OrdexError::Config(
                "extraction.unit_suffixes must not contain empty entries".to_string(),
            ));
        }
        if self
            .extraction
            .unit_suffixes
            .iter()
            .any(|s| s.contains('/') || s.chars().any(char::is_whitespace))
        {
            return Err(OrdexError::Config(
                "extraction.unit_suffixes entries must not contain '/' or whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OrdexConfig::default();
        assert_eq!(config.extraction.unit_suffixes.len(), 15);
        assert_eq!(config.extraction.fallback_suffix_len, 5);
        assert_eq!(config.pdf.page_separator, "\n");
        assert!(config.routing.destinations.is_empty());
        assert!(!config.dispatch.test_mode);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: OrdexConfig = serde_json::from_str(
            r#"{"routing": {"destinations": {"AVINA14": "Avina 14 - SEMSB"}}}"#,
        )
        .unwrap();

        assert_eq!(
            config.routing.destinations.get("AVINA14").map(String::as_str),
            Some("Avina 14 - SEMSB")
        );
        assert_eq!(config.dispatch.success_template, DEFAULT_SUCCESS_TEMPLATE);
    }

    #[test]
    fn test_validate_rejects_bad_suffixes() {
        let mut config = OrdexConfig::default();
        config.extraction.unit_suffixes.push("".to_string());
        assert!(config.validate().is_err());

        let mut config = OrdexConfig::default();
        config.extraction.unit_suffixes.push("/BAG".to_string());
        assert!(config.validate().is_err());
    }
}

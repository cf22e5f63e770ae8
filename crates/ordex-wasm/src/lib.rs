//! WASM bindings for sales order listing extraction.
//!
//! Page text is extracted in the browser (e.g. with pdf.js) and handed over
//! as strings; everything after that runs here.

use wasm_bindgen::prelude::*;

use ordex_core::models::order::ExtractionResult;
use ordex_core::{ListingParser, OrdexConfig, SalesOrderListingParser};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_js(result: &ExtractionResult) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Extract line items from concatenated listing text.
#[wasm_bindgen]
pub fn extract_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&SalesOrderListingParser::new().parse(text))
}

/// Extract line items from per-page text.
#[wasm_bindgen]
pub fn extract_from_pages(pages: Vec<String>) -> Result<JsValue, JsValue> {
    to_js(&SalesOrderListingParser::new().parse_pages(&pages))
}

/// Repair a single raw item code token.
#[wasm_bindgen]
pub fn repair_item_code(token: &str) -> String {
    ordex_core::repair_item_code(token)
}

/// Listing extractor class for browser use, configurable with the CLI's JSON config.
#[wasm_bindgen]
pub struct ListingExtractor {
    parser: SalesOrderListingParser,
}

#[wasm_bindgen]
impl ListingExtractor {
    /// Create an extractor with default settings.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: SalesOrderListingParser::new(),
        }
    }

    /// Create an extractor from a JSON configuration document.
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<ListingExtractor, JsValue> {
        let parser = parser_from_json(json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { parser })
    }

    /// Extract line items from text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse(text))
    }

    /// Extract line items from per-page text.
    #[wasm_bindgen(js_name = extractPages)]
    pub fn extract_pages(&self, pages: Vec<String>) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_pages(&pages))
    }

    /// Repair a raw item code with this extractor's unit suffixes.
    #[wasm_bindgen(js_name = repairItemCode)]
    pub fn repair_item_code(&self, token: &str) -> String {
        self.parser.repairer().repair(token)
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn parser_from_json(json: &str) -> Result<SalesOrderListingParser, String> {
    let config: OrdexConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
    config.validate().map_err(|e| e.to_string())?;
    Ok(SalesOrderListingParser::from_config(&config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_item_code() {
        assert_eq!(repair_item_code("TCD029-20PKT/BAGTRENDCELL"), "TCD029-20PKT/BAG");
    }

    #[test]
    fn test_parser_from_json_uses_suffixes() {
        let parser =
            parser_from_json(r#"{"extraction": {"unit_suffixes": ["DRUM"]}}"#).unwrap();
        assert_eq!(parser.repairer().repair("OIL/MURDX"), "OIL/DRUM");
    }

    #[test]
    fn test_parser_from_json_rejects_bad_config() {
        assert!(parser_from_json("not json").is_err());
        assert!(parser_from_json(r#"{"extraction": {"unit_suffixes": ["A/B"]}}"#).is_err());
    }

    #[test]
    fn test_version() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
    }
}

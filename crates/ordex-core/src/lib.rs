//! Core library for sales order listing extraction.
//!
//! This crate provides:
//! - Lexical matchers for order numbers, destination codes, dates and sequence numbers
//! - Item code repair for tokens corrupted by bleeding table columns
//! - Single-line and split-line item record extraction
//! - Destination routing, order drafting and summary rendering on top of the result
//! - PDF page-text loading (`native` feature)

pub mod error;
pub mod listing;
pub mod models;
pub mod orders;
#[cfg(feature = "native")]
pub mod pdf;
pub mod routing;
pub mod summary;

pub use error::{OrderError, OrdexError, Result};
pub use listing::rules::{repair_item_code, SuffixRepairer};
pub use listing::{ListingParser, SalesOrderListingParser};
pub use models::config::OrdexConfig;
pub use models::order::{ExtractionResult, Layout, OrderLineRecord};
pub use orders::{draft_orders, group_by_order, ItemCatalog, ItemMaster, OrderDraft};
#[cfg(feature = "native")]
pub use pdf::{PdfExtractor, PdfProcessor};
pub use routing::{resolve_destinations, DestinationRouter, RoutingTable};

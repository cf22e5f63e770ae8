//! Order listing extraction module.

pub mod classify;
pub mod layout;
mod parser;
pub mod rules;

pub use parser::{
    ListingParser, SalesOrderListingParser, NO_LINE_ITEMS_FOUND, NO_ORDER_NUMBERS_FOUND,
};

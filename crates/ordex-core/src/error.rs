//! Error types for the ordex-core library.
//!
//! Text extraction itself never fails; these cover the collaborators around it.

use thiserror::Error;

/// Main error type for the ordex library.
#[derive(Error, Debug)]
pub enum OrdexError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Order drafting error.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a config or data file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to loading page text from a PDF.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Reasons an order group cannot be drafted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// One or more item codes are absent from the item catalog.
    #[error("order {order_ref} rejected, unknown items: {}", item_codes.join(", "))]
    UnknownItems {
        order_ref: String,
        item_codes: Vec<String>,
    },
}

impl OrderError {
    /// Order reference of the rejected group.
    pub fn order_ref(&self) -> &str {
        match self {
            OrderError::UnknownItems { order_ref, .. } => order_ref,
        }
    }
}

/// Result type for the ordex library.
pub type Result<T> = std::result::Result<T, OrdexError>;

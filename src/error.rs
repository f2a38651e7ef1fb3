//! Error types for receipt scoring

use thiserror::Error;

/// Result type for registry and decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Receipt errors
///
/// Parse failures inside individual rules never show up here; rules fall
/// back to zero points instead.
#[derive(Error, Debug)]
pub enum Error {
    /// No receipt was ever submitted under this id
    #[error("Receipt not found: {0}")]
    ReceiptNotFound(String),

    /// Submission payload could not be decoded into a receipt
    #[error("Invalid receipt: {0}")]
    InvalidReceipt(#[from] serde_json::Error),
}

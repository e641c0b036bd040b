//! Error types for the palletizer crates.

use thiserror::Error;

/// Result type alias for palletizer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or validating packing input.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid carton lot provided.
    #[error("Invalid carton: {0}")]
    InvalidCarton(String),

    /// Invalid pallet specification provided.
    #[error("Invalid pallet: {0}")]
    InvalidPallet(String),
}

//! Error types for the normalization library.

use thiserror::Error;

/// Main error type for normalization operations.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// Input bytes were not valid UTF-8
    #[error("Invalid UTF-8 in input: valid up to byte {valid_up_to}")]
    InvalidEncoding { valid_up_to: usize },

    /// Character range outside the current working text
    #[error("Range {start}..{end} out of bounds for text of {len} characters")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Invalid replacement pattern
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for normalization operations.
pub type Result<T> = std::result::Result<T, NormalizeError>;

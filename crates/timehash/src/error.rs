//! Error types for time hash encoding, decoding, and navigation.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or stepping through time hashes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeHashError {
    /// Encoding was asked for zero characters.
    #[error("Invalid precision: {0} (must be at least 1)")]
    InvalidPrecision(usize),

    /// The timestamp handed to the encoder was NaN.
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(f64),

    /// A character outside the `01abcdef` alphabet.
    /// `position` is the 0-based character index within the hash.
    #[error("Invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Navigation over a zero-length hash, which has no neighbours.
    #[error("Empty hash has no neighbours")]
    EmptyHash,

    /// `before` on an all-`0` hash.
    #[error("No predecessor for '{0}': already the first hash at this precision")]
    NoPredecessor(String),

    /// `after` on an all-`f` hash.
    #[error("No successor for '{0}': already the last hash at this precision")]
    NoSuccessor(String),

    /// Two hashes of different lengths were used as the bounds of a range.
    #[error("Precision mismatch: '{start}' has {} characters, '{end}' has {}", .start.len(), .end.len())]
    PrecisionMismatch { start: String, end: String },

    /// A range whose start sorts after its end.
    #[error("Invalid range: '{start}' sorts after '{end}'")]
    InvalidRange { start: String, end: String },
}

/// Convenience alias used throughout the timehash crate.
pub type Result<T> = std::result::Result<T, TimeHashError>;

//! # timehash
//!
//! Sortable, fixed-alphabet hashes of points in time.
//!
//! A time hash is to a timestamp what a geohash is to a coordinate: a short
//! string over the alphabet `01abcdef` produced by repeatedly bisecting the
//! time domain (1970-01-01 to 2098-01-01). Each character narrows the cell by
//! a factor of 8. Hashes of equal length sort in time order, and a shorter
//! hash is a prefix of every longer hash inside its cell, which makes them
//! useful as keys for range scans over time-indexed data.
//!
//! ## Quick start
//!
//! ```rust
//! use timehash::{after, before, decode_exactly, encode};
//!
//! let hash = encode(0.0, 4).unwrap();
//! assert_eq!(hash, "0000");
//!
//! let (center, error) = decode_exactly(&hash).unwrap();
//! assert_eq!(error, 4_039_372_800.0 / 8192.0);
//! assert!(center - error <= 0.0);
//!
//! assert_eq!(after("0000").unwrap(), "0001");
//! assert!(before("0000").is_err());
//! ```
//!
//! ## Modules
//!
//! - [`alphabet`]: symbol ↔ 3-bit code tables and validation
//! - [`bisector`]: timestamp ↔ hash via interval bisection
//! - [`navigator`]: neighbouring hashes by base-8 increment/decrement
//! - [`types`]: the [`TimeHash`] value type
//! - [`error`]: error types

pub mod alphabet;
pub mod bisector;
pub mod error;
pub mod navigator;
pub mod types;

pub use alphabet::{validate, ALPHABET};
pub use bisector::{
    decode, decode_exactly, encode, encode_datetime, error_for_precision, DEFAULT_PRECISION,
    DOMAIN_END, DOMAIN_START,
};
pub use error::TimeHashError;
pub use navigator::{after, before, expand, neighbors, range, shift, HashRange};
pub use types::TimeHash;

//! Interval bisection encoder and decoder.
//!
//! The time domain `[DOMAIN_START, DOMAIN_END]` (1970-01-01 to 2098-01-01 in
//! epoch seconds) is halved three times per output character. Each halving
//! contributes one bit, most significant first (weights 4, 2, 1), and every
//! group of three bits selects one alphabet symbol. A hash of `n` characters
//! therefore pins a timestamp to a cell of width `DOMAIN_WIDTH / 8^n`.
//!
//! | precision | ± error            |
//! |-----------|--------------------|
//! | 1         | 8 years            |
//! | 4         | 5.7 days           |
//! | 6         | 2.14 hours         |
//! | 8         | 2 minutes          |
//! | 10        | 1.88 seconds       |
//!
//! # Example
//! ```
//! use timehash::{decode_exactly, encode};
//!
//! let hash = encode(1_700_000_000.0, 10).unwrap();
//! assert_eq!(hash.len(), 10);
//!
//! let (center, error) = decode_exactly(&hash).unwrap();
//! assert!((center - 1_700_000_000.0).abs() <= error);
//! ```

use chrono::{DateTime, Utc};

use crate::alphabet;
use crate::error::{Result, TimeHashError};

/// Lower bound of the time domain (1970-01-01T00:00:00Z).
pub const DOMAIN_START: f64 = 0.0;

/// Upper bound of the time domain (2098-01-01T00:00:00Z).
pub const DOMAIN_END: f64 = 4_039_372_800.0;

/// Width of the time domain in seconds.
pub const DOMAIN_WIDTH: f64 = DOMAIN_END - DOMAIN_START;

/// Precision used when callers have no particular resolution in mind (±1.88 s).
pub const DEFAULT_PRECISION: usize = 10;

const MASKS: [u8; 3] = [4, 2, 1];

/// Encode an epoch timestamp (seconds) into a hash of `precision` characters.
///
/// A timestamp exactly on a bisection midpoint falls into the lower half.
/// Timestamps outside the domain land in the first or last cell. NaN is
/// rejected because it would silently encode as the first cell.
pub fn encode(timestamp: f64, precision: usize) -> Result<String> {
    if precision == 0 {
        return Err(TimeHashError::InvalidPrecision(precision));
    }
    if timestamp.is_nan() {
        return Err(TimeHashError::InvalidTimestamp(timestamp));
    }

    let mut start = DOMAIN_START;
    let mut end = DOMAIN_END;
    let mut hash = String::with_capacity(precision);

    for _ in 0..precision {
        let mut code = 0u8;
        for mask in MASKS {
            let mid = (start + end) / 2.0;
            if timestamp > mid {
                code |= mask;
                start = mid;
            } else {
                end = mid;
            }
        }
        hash.push(alphabet::code_to_symbol(code));
    }

    Ok(hash)
}

/// Encode a UTC datetime, including its sub-second part.
pub fn encode_datetime(datetime: &DateTime<Utc>, precision: usize) -> Result<String> {
    encode(datetime_to_seconds(datetime), precision)
}

/// Decode a hash into the center of its cell and the cell's half-width.
///
/// The empty hash decodes to the whole domain.
pub fn decode_exactly(hash: &str) -> Result<(f64, f64)> {
    let mut start = DOMAIN_START;
    let mut end = DOMAIN_END;
    // Seeded with the unhalved midpoint so that n characters leave
    // DOMAIN_WIDTH / 2^(3n + 1).
    let mut error = (DOMAIN_START + DOMAIN_END) / 2.0;

    for (position, c) in hash.chars().enumerate() {
        let code = alphabet::symbol_code_at(c, position)?;
        for mask in MASKS {
            error /= 2.0;
            let mid = (start + end) / 2.0;
            if code & mask == 0 {
                end = mid;
            } else {
                start = mid;
            }
        }
    }

    Ok(((start + end) / 2.0, error))
}

/// Decode a hash into the center of its cell.
pub fn decode(hash: &str) -> Result<f64> {
    decode_exactly(hash).map(|(center, _)| center)
}

/// The ± error of any hash with `precision` characters, without decoding one.
pub fn error_for_precision(precision: usize) -> f64 {
    // powi takes i32; beyond ~350 characters the result is 0.0 either way.
    let bits = (3 * precision.min(400) + 1) as i32;
    DOMAIN_WIDTH / 2f64.powi(bits)
}

pub(crate) fn datetime_to_seconds(datetime: &DateTime<Utc>) -> f64 {
    datetime.timestamp() as f64 + f64::from(datetime.timestamp_subsec_nanos()) / 1e9
}

/// Convert epoch seconds back to a UTC datetime, rounding to the nanosecond.
///
/// Returns `None` for values chrono cannot represent.
pub(crate) fn seconds_to_datetime(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.floor();
    let nanos = ((seconds - whole) * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(whole as i64, nanos)
}

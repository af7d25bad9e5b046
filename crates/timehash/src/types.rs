//! The [`TimeHash`] value type.
//!
//! Wraps a validated hash string together with its decoded center and error.
//! Values are immutable; the only ways to get one are encoding a timestamp or
//! parsing a hash.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::bisector;
use crate::error::{Result, TimeHashError};
use crate::navigator;

/// A decoded time hash.
///
/// Equality, hashing, and ordering use the hash string only. For hashes of
/// equal precision the string order is also the order of their centers.
/// Serializes as the bare hash string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeHash {
    hash_code: String,
    center: f64,
    error: f64,
}

impl TimeHash {
    /// Encode `timestamp` (epoch seconds) at `precision` characters.
    pub fn encode(timestamp: f64, precision: usize) -> Result<Self> {
        let hash_code = bisector::encode(timestamp, precision)?;
        Self::from_hash(&hash_code)
    }

    /// Encode a UTC datetime at `precision` characters.
    pub fn from_datetime(datetime: &DateTime<Utc>, precision: usize) -> Result<Self> {
        let hash_code = bisector::encode_datetime(datetime, precision)?;
        Self::from_hash(&hash_code)
    }

    /// Parse and decode a hash string.
    pub fn from_hash(hash_code: &str) -> Result<Self> {
        Self::try_from(hash_code.to_string())
    }

    pub fn hash_code(&self) -> &str {
        &self.hash_code
    }

    /// Midpoint of the cell, in epoch seconds.
    pub fn center(&self) -> f64 {
        self.center
    }

    /// Half-width of the cell: the largest distance between `center` and any
    /// timestamp that encodes to this hash.
    pub fn error(&self) -> f64 {
        self.error
    }

    /// Number of characters.
    pub fn precision(&self) -> usize {
        self.hash_code.len()
    }

    /// `center - error`.
    pub fn start(&self) -> f64 {
        self.center - self.error
    }

    /// `center + error`.
    pub fn end(&self) -> f64 {
        self.center + self.error
    }

    /// Whether `timestamp` encodes to this hash at this precision.
    ///
    /// Cells are closed on the right (`start < t <= end`), except that the
    /// first cell also owns the domain start. Out-of-domain timestamps belong
    /// to the first or last cell, like the encoder places them.
    pub fn contains(&self, timestamp: f64) -> bool {
        if self.hash_code.is_empty() {
            return !timestamp.is_nan();
        }
        bisector::encode(timestamp, self.precision())
            .is_ok_and(|hash| hash == self.hash_code)
    }

    pub fn center_datetime(&self) -> Option<DateTime<Utc>> {
        bisector::seconds_to_datetime(self.center)
    }

    pub fn start_datetime(&self) -> Option<DateTime<Utc>> {
        bisector::seconds_to_datetime(self.start())
    }

    pub fn end_datetime(&self) -> Option<DateTime<Utc>> {
        bisector::seconds_to_datetime(self.end())
    }

    /// The preceding cell at the same precision.
    pub fn before(&self) -> Result<Self> {
        Self::from_hash(&navigator::before(&self.hash_code)?)
    }

    /// The following cell at the same precision.
    pub fn after(&self) -> Result<Self> {
        Self::from_hash(&navigator::after(&self.hash_code)?)
    }

    /// Step `n` cells later (or `-n` cells earlier for negative `n`).
    ///
    /// Fails with `NoPredecessor`/`NoSuccessor` if the result leaves the
    /// domain. Runs in time linear in the precision, not in `n`.
    pub fn shift(&self, n: i64) -> Result<Self> {
        Self::from_hash(&navigator::shift(&self.hash_code, n)?)
    }
}

impl fmt::Display for TimeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hash_code)
    }
}

impl FromStr for TimeHash {
    type Err = TimeHashError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hash(s)
    }
}

impl TryFrom<String> for TimeHash {
    type Error = TimeHashError;

    fn try_from(hash_code: String) -> Result<Self> {
        let (center, error) = bisector::decode_exactly(&hash_code)?;
        Ok(Self {
            hash_code,
            center,
            error,
        })
    }
}

impl From<TimeHash> for String {
    fn from(hash: TimeHash) -> Self {
        hash.hash_code
    }
}

impl PartialEq for TimeHash {
    fn eq(&self, other: &Self) -> bool {
        self.hash_code == other.hash_code
    }
}

impl Eq for TimeHash {}

impl Hash for TimeHash {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code.hash(state);
    }
}

impl PartialOrd for TimeHash {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimeHash {
    fn cmp(&self, other: &Self) -> Ordering {
        self.hash_code.cmp(&other.hash_code)
    }
}

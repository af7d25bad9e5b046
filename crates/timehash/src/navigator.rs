//! Neighbour navigation over hash strings.
//!
//! A hash is a base-8 number written in the alphabet's symbols, most
//! significant character first. Stepping to the previous or next cell at the
//! same precision is a decrement or increment of that number: change the
//! rightmost character that does not borrow (or carry) and reset everything to
//! its right. No decoding is involved and the time domain is never consulted.

use std::iter::FusedIterator;

use tracing::debug;

use crate::alphabet::{self, MAX_SYMBOL, MIN_SYMBOL};
use crate::error::{Result, TimeHashError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Before,
    After,
}

impl Direction {
    /// Symbol that cannot be stepped without borrowing/carrying.
    fn limit(self) -> char {
        match self {
            Direction::Before => MIN_SYMBOL,
            Direction::After => MAX_SYMBOL,
        }
    }

    /// Symbol written to every position right of the changed one.
    fn fill(self) -> char {
        match self {
            Direction::Before => MAX_SYMBOL,
            Direction::After => MIN_SYMBOL,
        }
    }

    fn exhausted(self, hash: &str) -> TimeHashError {
        match self {
            Direction::Before => TimeHashError::NoPredecessor(hash.to_string()),
            Direction::After => TimeHashError::NoSuccessor(hash.to_string()),
        }
    }
}

fn step(hash: &str, direction: Direction) -> Result<String> {
    alphabet::check(hash)?;
    if hash.is_empty() {
        return Err(TimeHashError::EmptyHash);
    }

    let mut symbols: Vec<char> = hash.chars().collect();
    let Some(position) = symbols.iter().rposition(|&c| c != direction.limit()) else {
        debug!(hash, ?direction, "hash is at the edge of the domain");
        return Err(direction.exhausted(hash));
    };

    symbols[position] = match direction {
        Direction::Before => alphabet::before_symbol(symbols[position])?,
        Direction::After => alphabet::after_symbol(symbols[position])?,
    };
    for c in &mut symbols[position + 1..] {
        *c = direction.fill();
    }

    Ok(symbols.into_iter().collect())
}

/// The hash of the preceding cell at the same precision.
///
/// Fails with [`TimeHashError::NoPredecessor`] for an all-`0` hash.
///
/// ```
/// assert_eq!(timehash::before("a100").unwrap(), "a0ff");
/// ```
pub fn before(hash: &str) -> Result<String> {
    step(hash, Direction::Before)
}

/// The hash of the following cell at the same precision.
///
/// Fails with [`TimeHashError::NoSuccessor`] for an all-`f` hash.
///
/// ```
/// assert_eq!(timehash::after("a0ff").unwrap(), "a100");
/// ```
pub fn after(hash: &str) -> Result<String> {
    step(hash, Direction::After)
}

/// `(before(hash), after(hash))`.
pub fn neighbors(hash: &str) -> Result<(String, String)> {
    Ok((before(hash)?, after(hash)?))
}

/// `[before(hash), hash, after(hash)]`: the cell plus both neighbours, in order.
pub fn expand(hash: &str) -> Result<[String; 3]> {
    let (prev, next) = neighbors(hash)?;
    Ok([prev, hash.to_string(), next])
}

/// The hash `n` cells after `hash` (or `-n` cells before it for negative `n`),
/// at the same precision.
///
/// Adds `n` to the hash as a base-8 number in a single right-to-left pass,
/// so the cost is linear in the hash length whatever the size of `n`. Fails
/// with [`TimeHashError::NoSuccessor`] or [`TimeHashError::NoPredecessor`]
/// when the result would leave the domain.
///
/// ```
/// assert_eq!(timehash::navigator::shift("a0fe", 3).unwrap(), "a101");
/// assert_eq!(timehash::navigator::shift("a101", -3).unwrap(), "a0fe");
/// ```
pub fn shift(hash: &str, n: i64) -> Result<String> {
    alphabet::check(hash)?;
    if hash.is_empty() {
        return Err(TimeHashError::EmptyHash);
    }

    let direction = if n < 0 {
        Direction::Before
    } else {
        Direction::After
    };
    let mut remaining = n.unsigned_abs();
    let mut carry = 0i16;
    let mut symbols: Vec<char> = hash.chars().collect();

    for (position, c) in symbols.iter_mut().enumerate().rev() {
        if remaining == 0 && carry == 0 {
            break;
        }
        let code = i16::from(alphabet::symbol_code_at(*c, position)?);
        let digit = (remaining % 8) as i16;
        remaining /= 8;

        let value = match direction {
            Direction::Before => code - digit - carry,
            Direction::After => code + digit + carry,
        };
        carry = i16::from(!(0..8).contains(&value));
        *c = alphabet::code_to_symbol(value.rem_euclid(8) as u8);
    }

    if remaining != 0 || carry != 0 {
        debug!(hash, n, "shift leaves the domain");
        return Err(direction.exhausted(hash));
    }

    Ok(symbols.into_iter().collect())
}

/// Every hash from `start` through `end` inclusive, in sort order.
///
/// Both bounds must be non-empty and of the same precision, and `start` must
/// not sort after `end`. The iterator is lazy; at high precision a wide range
/// can be very long.
pub fn range(start: &str, end: &str) -> Result<HashRange> {
    alphabet::check(start)?;
    alphabet::check(end)?;
    if start.is_empty() || end.is_empty() {
        return Err(TimeHashError::EmptyHash);
    }
    if start.len() != end.len() {
        debug!(start, end, "range bounds differ in precision");
        return Err(TimeHashError::PrecisionMismatch {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    if start > end {
        debug!(start, end, "range bounds are reversed");
        return Err(TimeHashError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        });
    }

    Ok(HashRange {
        next: Some(start.to_string()),
        end: end.to_string(),
    })
}

/// Iterator returned by [`range`].
#[derive(Debug, Clone)]
pub struct HashRange {
    next: Option<String>,
    end: String,
}

impl Iterator for HashRange {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let current = self.next.take()?;
        if current != self.end {
            // current < end, so it is never all-`f` and after() succeeds.
            self.next = after(&current).ok();
        }
        Some(current)
    }
}

impl FusedIterator for HashRange {}

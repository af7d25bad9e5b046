//! # timehash-python
//!
//! Python bindings for the timehash codec, built with PyO3.
//!
//! Exposes the following functions to Python as the `timehash` module:
//!
//! - `encode(timestamp, precision=10)` -- epoch seconds -> hash
//! - `decode(hash)` / `decode_exactly(hash)` -- hash -> center (and error)
//! - `validate(hash)` -- alphabet check
//! - `before(hash)`, `after(hash)`, `neighbors(hash)`, `expand(hash)` -- adjacent cells

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use timehash_core::{TimeHashError, DEFAULT_PRECISION};

fn to_py(e: TimeHashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Encode epoch seconds into a time hash.
///
/// Args:
///     timestamp: Seconds since 1970-01-01T00:00:00Z.
///     precision: Number of characters (default 10, about +/- 1.88 s).
///
/// Raises:
///     ValueError: If precision is 0 or timestamp is NaN.
#[pyfunction]
#[pyo3(signature = (timestamp, precision=DEFAULT_PRECISION))]
fn encode(timestamp: f64, precision: usize) -> PyResult<String> {
    timehash_core::encode(timestamp, precision).map_err(to_py)
}

/// Decode a time hash to the center of its cell, in epoch seconds.
///
/// Raises:
///     ValueError: If the hash contains a character outside "01abcdef".
#[pyfunction]
fn decode(hash: &str) -> PyResult<f64> {
    timehash_core::decode(hash).map_err(to_py)
}

/// Decode a time hash to a `(center, error)` tuple.
///
/// Raises:
///     ValueError: If the hash contains a character outside "01abcdef".
#[pyfunction]
fn decode_exactly(hash: &str) -> PyResult<(f64, f64)> {
    timehash_core::decode_exactly(hash).map_err(to_py)
}

/// True iff every character of the hash is in "01abcdef".
#[pyfunction]
fn validate(hash: &str) -> bool {
    timehash_core::validate(hash)
}

/// The preceding hash at the same precision.
///
/// Raises:
///     ValueError: For an all-"0" or empty hash, or an invalid character.
#[pyfunction]
fn before(hash: &str) -> PyResult<String> {
    timehash_core::before(hash).map_err(to_py)
}

/// The following hash at the same precision.
///
/// Raises:
///     ValueError: For an all-"f" or empty hash, or an invalid character.
#[pyfunction]
fn after(hash: &str) -> PyResult<String> {
    timehash_core::after(hash).map_err(to_py)
}

/// `(before(hash), after(hash))`.
#[pyfunction]
fn neighbors(hash: &str) -> PyResult<(String, String)> {
    timehash_core::neighbors(hash).map_err(to_py)
}

/// `[before(hash), hash, after(hash)]`.
#[pyfunction]
fn expand(hash: &str) -> PyResult<Vec<String>> {
    timehash_core::expand(hash)
        .map(Vec::from)
        .map_err(to_py)
}

/// The `timehash` Python module, implemented in Rust via PyO3.
#[pymodule]
fn timehash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("ALPHABET", timehash_core::ALPHABET)?;
    m.add("DEFAULT_PRECISION", DEFAULT_PRECISION)?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(decode_exactly, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(before, m)?)?;
    m.add_function(wrap_pyfunction!(after, m)?)?;
    m.add_function(wrap_pyfunction!(neighbors, m)?)?;
    m.add_function(wrap_pyfunction!(expand, m)?)?;
    Ok(())
}

//! WASM bindings for timehash.
//!
//! Exposes the codec to JavaScript/TypeScript via `wasm-bindgen`. Hashes cross
//! the boundary as plain strings; `decodeExactly` returns a small JSON object
//! so callers get center, error, and bounds in one call.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timehash-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/timehash-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/timehash_wasm.wasm
//! ```

use serde::Serialize;
use timehash::TimeHash;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct DecodedDto {
    hash: String,
    center: f64,
    error: f64,
    start: f64,
    end: f64,
}

impl From<&TimeHash> for DecodedDto {
    fn from(th: &TimeHash) -> Self {
        Self {
            hash: th.hash_code().to_string(),
            center: th.center(),
            error: th.error(),
            start: th.start(),
            end: th.end(),
        }
    }
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Encode epoch seconds into a time hash of `precision` characters.
///
/// Throws if `precision` is 0 or `timestamp` is NaN.
#[wasm_bindgen]
pub fn encode(timestamp: f64, precision: u32) -> Result<String, JsValue> {
    timehash::encode(timestamp, precision as usize).map_err(to_js)
}

/// Decode a time hash to the center of its cell, in epoch seconds.
#[wasm_bindgen]
pub fn decode(hash: &str) -> Result<f64, JsValue> {
    timehash::decode(hash).map_err(to_js)
}

/// Decode a time hash to a JSON string:
/// `{"hash":..,"center":..,"error":..,"start":..,"end":..}`.
#[wasm_bindgen(js_name = "decodeExactly")]
pub fn decode_exactly(hash: &str) -> Result<String, JsValue> {
    let th = TimeHash::from_hash(hash).map_err(to_js)?;
    serde_json::to_string(&DecodedDto::from(&th)).map_err(to_js)
}

/// True iff every character of `hash` is in `01abcdef`.
#[wasm_bindgen]
pub fn validate(hash: &str) -> bool {
    timehash::validate(hash)
}

/// The preceding hash at the same precision. Throws at the first cell.
#[wasm_bindgen]
pub fn before(hash: &str) -> Result<String, JsValue> {
    timehash::before(hash).map_err(to_js)
}

/// The following hash at the same precision. Throws at the last cell.
#[wasm_bindgen]
pub fn after(hash: &str) -> Result<String, JsValue> {
    timehash::after(hash).map_err(to_js)
}

//! The fixed 8-symbol alphabet and its neighbour tables.
//!
//! Symbol order is the sort order of the hashes and the bit mapping at the
//! same time: `'0'` is code 0, `'f'` is code 7. Because the symbols are also
//! in ascending ASCII order, plain byte-wise string comparison of two hashes
//! agrees with the alphabet order.

use crate::error::{Result, TimeHashError};

/// The alphabet, in code order.
pub const ALPHABET: &str = "01abcdef";

const SYMBOLS: [u8; 8] = *b"01abcdef";

/// `BEFORE[code]` is the symbol one lower, wrapping `'0'` to `'f'` (borrow).
const BEFORE: [u8; 8] = *b"f01abcde";

/// `AFTER[code]` is the symbol one higher, wrapping `'f'` to `'0'` (carry).
const AFTER: [u8; 8] = *b"1abcdef0";

/// Lowest symbol; the fill value after a carry.
pub const MIN_SYMBOL: char = '0';

/// Highest symbol; the fill value after a borrow.
pub const MAX_SYMBOL: char = 'f';

/// Byte → code lookup, `None` for everything outside the alphabet.
const CODES: [Option<u8>; 256] = {
    let mut table = [None; 256];
    let mut i = 0;
    while i < SYMBOLS.len() {
        table[SYMBOLS[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
};

fn code_of(c: char) -> Option<u8> {
    if c.is_ascii() {
        CODES[c as usize]
    } else {
        None
    }
}

/// Return the 3-bit code for `c`.
pub fn symbol_to_code(c: char) -> Result<u8> {
    symbol_code_at(c, 0)
}

/// [`symbol_to_code`] for the character at `position` of a hash, so the
/// error names where it sits.
pub(crate) fn symbol_code_at(c: char, position: usize) -> Result<u8> {
    code_of(c).ok_or(TimeHashError::InvalidSymbol {
        symbol: c,
        position,
    })
}

/// Return the symbol for a 3-bit code. Higher bits are ignored.
pub fn code_to_symbol(code: u8) -> char {
    SYMBOLS[(code & 0b111) as usize] as char
}

/// The symbol one lower than `c`, with `'0'` wrapping to `'f'`.
pub fn before_symbol(c: char) -> Result<char> {
    symbol_to_code(c).map(|code| BEFORE[code as usize] as char)
}

/// The symbol one higher than `c`, with `'f'` wrapping to `'0'`.
pub fn after_symbol(c: char) -> Result<char> {
    symbol_to_code(c).map(|code| AFTER[code as usize] as char)
}

/// True iff every character of `hash` is in the alphabet. `""` is valid.
pub fn validate(hash: &str) -> bool {
    hash.chars().all(|c| code_of(c).is_some())
}

/// Like [`validate`], but reports the first offending character.
pub fn check(hash: &str) -> Result<()> {
    for (position, c) in hash.chars().enumerate() {
        symbol_code_at(c, position)?;
    }
    Ok(())
}


//! Fixed-width bit-string encoding for unsigned integers.
//!
//! PostgreSQL has no native unsigned integer types, so unsigned values are
//! stored in `bit(N)` columns as zero-padded binary digit strings. Backends
//! with permissive numeric columns store the plain decimal form instead, and
//! a value read back may therefore be in either encoding.
//!
//! [`decode`] tells the two apart by length: a string of exactly `width`
//! characters is taken to be binary, anything else decimal. This heuristic is
//! ambiguous by construction — a decimal literal that happens to be `width`
//! digits long and consists only of `0` and `1` characters parses as binary.
//! The ambiguity is kept as-is for compatibility with stored data; see the
//! tests for the documented misparse.

use crate::error::DecodeError;

/// Encode `value` as a base-2 digit string left-padded with `0` to exactly
/// `width` characters.
pub fn encode(value: u64, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Decode a bit-string or decimal string produced for a `width`-bit column.
pub fn decode(text: &str, width: usize) -> Result<u64, DecodeError> {
    let radix = if text.len() == width { 2 } else { 10 };
    tracing::trace!(text, width, radix, "decoding unsigned column value");
    u64::from_str_radix(text, radix).map_err(DecodeError::from)
}

//! Public facade composing the scrambler with the codec.

use crate::codec;
use crate::error::ShortCodeError;
use crate::scramble;

/// Returns the five-character short code for a counter.
///
/// ```
/// assert_eq!(shortcode::short_code(123), "K8$PN");
/// ```
///
/// The mapping is periodic with period `17_160_990`: only counters in
/// `[0, 17_160_989]` produce distinct codes.
pub fn short_code(counter: u64) -> String {
    codec::encode(scramble::forward(counter))
}

/// Recovers the counter a short code was issued for.
///
/// ```
/// assert_eq!(shortcode::deshort_code("K8$PN"), Ok(123));
/// ```
///
/// # Errors
///
/// - [`ShortCodeError::InvalidLength`] if `code` is not 5 characters.
/// - [`ShortCodeError::InvalidCharacter`] if `code` contains a
///   character outside the alphabet (case folding is applied first).
/// - [`ShortCodeError::InvalidCode`] if `code` is well-formed but was
///   never issued by [`short_code`].
pub fn deshort_code(code: &str) -> Result<u32, ShortCodeError> {
    scramble::invert(codec::decode(code)?)
}

/// Forces construction of the inversion tables.
///
/// The tables are built on first use either way; calling this at
/// process startup moves the one-time cost out of the first
/// [`deshort_code`] call.
pub fn init() {
    once_cell::sync::Lazy::force(&crate::scramble::tables::TABLES);
}

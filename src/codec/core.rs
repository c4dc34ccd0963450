//! Fixed-width base-32 string codec.
//!
//! Integers below `32^5` are rendered as exactly five characters from a
//! custom 32-symbol alphabet. The alphabet drops the vowels A/E/I/O/U
//! so that no English word (offensive or otherwise) can appear in a
//! code, and drops the digits 0 and 1 to avoid confusion with the
//! letters O, I and l; three symbols fill the remaining slots. The
//! ordering of the alphabet defines the digit values and is part of the
//! compatibility contract.
//!
//! All digit extraction uses exact integer arithmetic on powers of 32;
//! no floating point is involved anywhere.

use crate::error::ShortCodeError;

/// The 32-symbol code alphabet, in digit order.
pub const ALPHABET: &[u8; 32] = b"BCDFGHJKLMNPQRSTVWXYZ23456789@*$";

/// Number of characters in every code.
pub const CODE_LEN: usize = 5;

/// Encodes an integer below `32^5` as a five-character code.
///
/// Digits are emitted most significant first, so `0` encodes as
/// `"BBBBB"` and `1` as `"BBBBC"`.
///
/// # Panics
///
/// Panics if `n >= 32^5`, which cannot be represented in five digits.
pub fn encode(n: u32) -> String {
    assert!(n < 1 << 25, "value does not fit in 5 base-32 digits");

    let mut out = String::with_capacity(CODE_LEN);
    for digit in (0..CODE_LEN).rev() {
        let idx = (n >> (5 * digit)) & 31;
        out.push(ALPHABET[idx as usize] as char);
    }
    out
}

/// Decodes a five-character code back to its integer value.
///
/// Matching is case-insensitive; `"cr54k"` and `"CR54K"` decode to the
/// same value.
///
/// # Errors
///
/// - [`ShortCodeError::InvalidLength`] if the input does not have
///   exactly five characters.
/// - [`ShortCodeError::InvalidCharacter`] if any character, after case
///   folding, is not in the alphabet.
pub fn decode(s: &str) -> Result<u32, ShortCodeError> {
    let len = s.chars().count();
    if len != CODE_LEN {
        return Err(ShortCodeError::InvalidLength(len));
    }

    let mut n = 0u32;
    for c in s.chars() {
        let folded = c.to_ascii_uppercase();
        let digit = ALPHABET
            .iter()
            .position(|&a| a as char == folded)
            .ok_or(ShortCodeError::InvalidCharacter(c))?;
        n = (n << 5) | digit as u32;
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_has_no_duplicates() {
        for (i, a) in ALPHABET.iter().enumerate() {
            assert!(!ALPHABET[i + 1..].contains(a));
        }
    }

    #[test]
    fn alphabet_has_no_vowels_or_ambiguous_digits() {
        for c in *b"AEIOU01" {
            assert!(!ALPHABET.contains(&c));
        }
    }
}

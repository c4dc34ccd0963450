//! Error types shared by the codec and the scrambler.
//!
//! The crate reports exactly three failure kinds, all of which are pure
//! functions of the input: retrying a failed call with the same input
//! yields the same error. Syntax problems (`InvalidLength`,
//! `InvalidCharacter`) are kept distinct from out-of-domain values
//! (`InvalidCode`) so that callers can tell a typo apart from a code
//! that was never issued.

use thiserror::Error;

/// Errors returned when decoding a short code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShortCodeError {
    /// The input does not have exactly 5 characters.
    #[error("code must be exactly 5 characters, got {0}")]
    InvalidLength(usize),

    /// The input contains a character outside the code alphabet
    /// (checked after case folding).
    #[error("character {0:?} is not in the code alphabet")]
    InvalidCharacter(char),

    /// The input is well-formed but does not correspond to any value
    /// the encoder can produce.
    #[error("code does not correspond to any issued value")]
    InvalidCode,
}

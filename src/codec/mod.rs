//! Positional string codec for code values.
//!
//! Renders integers in `[0, 32^5)` as fixed five-character strings over
//! a curated 32-symbol alphabet, and parses them back. Independent of
//! the scrambler; it knows nothing about groups or counters.

pub mod core;

pub use self::core::{ALPHABET, CODE_LEN, decode, encode};

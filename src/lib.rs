//! Short, human-typable codes for sequential counters.
//!
//! This crate converts a sequential, non-secret counter (for example a
//! database row id) into a fixed five-character code and back, such
//! that consecutive counters produce unrelated-looking codes:
//!
//! ```
//! assert_eq!(shortcode::short_code(123), "K8$PN");
//! assert_eq!(shortcode::deshort_code("K8$PN"), Ok(123));
//! ```
//!
//! The transformation is a pure, keyless, deterministic bijection over
//! a 25-bit domain. The forward direction is a modular exponentiation
//! by a fixed primitive root; the inverse is a discrete logarithm, kept
//! cheap by parameters chosen so the Pohlig-Hellman algorithm needs
//! only 87 precomputed table entries.
//!
//! # Module overview
//!
//! - `codec`
//!   The positional string codec: integers in `[0, 32^5)` rendered as
//!   five characters over a curated 32-symbol alphabet (no vowels, no
//!   0/1). Independent of the scrambler.
//!
//! - `scramble`
//!   The numeric engine: the exponentiation bijection, its fixed
//!   parameter set, and the Pohlig-Hellman/CRT inversion with its
//!   one-time precomputed tables.
//!
//! - `shortcode`
//!   The facade composing the two, re-exported at the crate root as
//!   the public API: [`short_code`], [`deshort_code`], [`init`].
//!
//! # Concurrency
//!
//! Every operation is a pure function over immutable data. The
//! inversion tables are built once, behind a single-initialization
//! barrier, on first use (or eagerly via [`init`]); afterwards they are
//! read-only and support unbounded concurrent readers with no locking.
//!
//! # What this is not
//!
//! This is **not** a cryptographic mechanism. The domain is small, the
//! parameters are baked into the source, and anyone holding the source
//! can decode any code. The only goal is that consecutive counters do
//! not yield visually similar or guessably sequential codes.
//!
//! Two contracts must match exactly across every deployment that
//! exchanges codes: the parameter set in [`scramble::params`] and the
//! alphabet in [`codec`]. Changing either invalidates every code ever
//! issued.

pub mod codec;
pub mod error;
pub mod scramble;
pub mod shortcode;

pub use self::error::ShortCodeError;
pub use self::shortcode::core::{deshort_code, init, short_code};

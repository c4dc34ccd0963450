//! Counter scrambling over a prime-order multiplicative group.
//!
//! This module turns a sequential counter into an unpredictable-looking
//! group element and back. It is deliberately split into three layers:
//!
//! - [`core`]
//!   Public operations.
//!
//!   [`forward`](core::forward) raises a fixed primitive root to the
//!   counter (plus a constant offset) modulo a 25-bit prime, a bijection
//!   over one period of the group. [`invert`](core::invert) recovers the
//!   counter with the Pohlig-Hellman algorithm and the Chinese Remainder
//!   Theorem.
//!
//! - [`params`]
//!   The fixed parameter set: modulus, generator, the squarefree
//!   factorization of the group order, and the exponent offset. These
//!   values are a compatibility contract shared by every deployment
//!   that exchanges codes.
//!
//! - `tables`
//!   Precomputed per-factor discrete-log tables and CRT coefficients.
//!   Built once behind a single-initialization barrier, immutable and
//!   lock-free afterwards. Kept private so that all inversions go
//!   through the validated `core` API.
//!
//! ## Design notes
//!
//! - Every operation is a pure function over immutable data; after the
//!   one-time table construction there is no mutation, I/O, or
//!   blocking anywhere in this module.
//! - The inversion is cheap (one exponentiation and one table lookup
//!   per factor) only because the group order is squarefree with small
//!   prime factors; the parameters were chosen for exactly that.
//! - This is obfuscation, not cryptography: the 25-bit domain and the
//!   public parameter set mean anyone with the source can invert codes.

pub mod core;
pub mod params;
pub(crate) mod tables;

pub use self::core::{forward, invert};

//! The public surface of the crate.
//!
//! Composes the two independent halves into the two operations callers
//! actually use:
//!
//! - [`short_code`](core::short_code) — scramble a counter, then render
//!   it as a five-character code.
//! - [`deshort_code`](core::deshort_code) — parse a code, then invert
//!   the scramble.
//!
//! plus [`init`](core::init), an optional eager warm-up of the one-time
//! inversion tables. No logic lives here beyond composition.

pub mod core;

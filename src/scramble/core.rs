//! Scrambling and unscrambling of counters.
//!
//! The forward direction raises the generator to the counter (plus a
//! fixed offset) in the multiplicative group modulo a 25-bit prime.
//! Because the generator is a primitive root, one period of this map is
//! a bijection from `Z/(MODULUS-1)` onto the nonzero residues, and
//! consecutive counters land on unrelated-looking group elements.
//!
//! The inverse direction is a discrete logarithm. It is tractable here
//! because every prime factor of the group order is small: the
//! Pohlig-Hellman algorithm reduces the problem to one table lookup per
//! factor, and the Chinese Remainder Theorem reassembles the exponent.
//!
//! None of this is a security boundary. The parameters are public, the
//! domain is 25 bits, and anyone with the source can invert any value.

use crate::error::ShortCodeError;
use crate::scramble::params::{GENERATOR, GROUP_ORDER, MODULUS, OFFSET};
use crate::scramble::tables::TABLES;

/// Computes `base^exp mod modulus` by square-and-multiply.
///
/// `modulus` must fit in 25 bits so that intermediate products fit in
/// `u64` without overflow.
pub(crate) fn pow_mod(base: u32, mut exp: u64, modulus: u32) -> u32 {
    let m = u64::from(modulus);
    let mut base = u64::from(base) % m;
    let mut acc = 1u64;

    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }

    acc as u32
}

/// Scrambles a counter into a group element.
///
/// Returns `GENERATOR^(i + OFFSET) mod MODULUS`, a nonzero residue in
/// `[1, MODULUS)`. The map is total and pure: it accepts any counter,
/// but is periodic with period `MODULUS - 1`, so only counters in
/// `[0, MODULUS - 2]` are distinguishable.
pub fn forward(i: u64) -> u32 {
    // Reduce before adding the offset so the exponent cannot overflow
    // even for counters near u64::MAX.
    let exp = i % u64::from(GROUP_ORDER) + u64::from(OFFSET);
    pow_mod(GENERATOR, exp, MODULUS)
}

/// Recovers the counter that [`forward`] mapped to `y`.
///
/// For each prime factor `p` of the group order, raising `y` to
/// `(MODULUS-1)/p` projects the exponent onto the order-`p` subgroup,
/// where a precomputed table yields the exponent's residue mod `p`.
/// The residues are combined with the Chinese Remainder Theorem, which
/// is exact because the factors are pairwise coprime and their product
/// is the full group order.
///
/// # Errors
///
/// Returns [`ShortCodeError::InvalidCode`] if `y` is zero, not below
/// the modulus, or otherwise not an element the scrambler can produce.
pub fn invert(y: u32) -> Result<u32, ShortCodeError> {
    if y == 0 || y >= MODULUS {
        return Err(ShortCodeError::InvalidCode);
    }

    let mut exponent = 0u64;
    for table in TABLES.iter() {
        let z = pow_mod(y, u64::from(table.cofactor), MODULUS);
        let r = table.dlog.get(&z).ok_or(ShortCodeError::InvalidCode)?;
        debug_assert!(*r < table.factor);

        // r < 23, cofactor < 2^25, crt_inv < 23: the sum stays far
        // below u64::MAX.
        exponent += u64::from(*r) * u64::from(table.cofactor) * u64::from(table.crt_inv);
    }
    let exponent = (exponent % u64::from(GROUP_ORDER)) as u32;

    Ok((exponent + GROUP_ORDER - OFFSET) % GROUP_ORDER)
}

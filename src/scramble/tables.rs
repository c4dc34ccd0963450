//! Precomputed inversion tables for the Pohlig-Hellman discrete log.
//!
//! For each prime factor `p` of the group order this module stores:
//!
//! - a lookup table mapping every element of the order-`p` subgroup to
//!   its discrete logarithm in `[0, p)`, built by repeated
//!   multiplication in `O(p)` time and space;
//! - the CRT coefficient `((MODULUS-1)/p)^(-1) mod p`, computed via
//!   Fermat's little theorem (`x^(p-2) mod p`, valid since `p` is
//!   prime).
//!
//! The tables total about 87 entries and are built exactly once, behind
//! a single-initialization barrier. After construction they are never
//! mutated, so lookups need no locking and scale to any number of
//! concurrent readers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::scramble::core::pow_mod;
use crate::scramble::params::{FACTORS, GENERATOR, GROUP_ORDER, MODULUS};

/// Inversion data for one prime factor of the group order.
pub(crate) struct FactorTable {
    /// The prime factor `p`.
    pub(crate) factor: u32,

    /// `GROUP_ORDER / p`. Raising a group element to this power
    /// annihilates every other prime component of its exponent,
    /// leaving an element of order dividing `p`.
    pub(crate) cofactor: u32,

    /// `cofactor^(-1) mod p`, used by the CRT recombination.
    pub(crate) crt_inv: u32,

    /// Maps each element of the order-`p` subgroup to its discrete
    /// logarithm in `[0, p)`.
    pub(crate) dlog: HashMap<u32, u32>,
}

/// One table per entry of [`FACTORS`], built on first use.
pub(crate) static TABLES: Lazy<Vec<FactorTable>> = Lazy::new(build);

fn build() -> Vec<FactorTable> {
    // Pohlig-Hellman with plain per-factor tables requires a squarefree
    // group order: each prime once, product equal to the whole order.
    debug_assert_eq!(
        FACTORS.iter().map(|&p| u64::from(p)).product::<u64>(),
        u64::from(GROUP_ORDER)
    );

    let tables: Vec<FactorTable> = FACTORS.iter().map(|&p| build_factor(p)).collect();

    let entries: usize = tables.iter().map(|t| t.dlog.len()).sum();
    log::debug!(
        "built {entries} discrete-log entries across {} factors",
        tables.len()
    );

    tables
}

fn build_factor(p: u32) -> FactorTable {
    // Exact by construction: every factor divides the group order.
    let cofactor = GROUP_ORDER / p;

    // Generator of the order-p subgroup.
    let g_p = pow_mod(GENERATOR, u64::from(cofactor), MODULUS);

    let mut dlog = HashMap::with_capacity(p as usize);
    let mut g_k = 1u32;
    for k in 0..p {
        dlog.insert(g_k, k);
        g_k = ((u64::from(g_k) * u64::from(g_p)) % u64::from(MODULUS)) as u32;
    }

    FactorTable {
        factor: p,
        cofactor,
        crt_inv: pow_mod(cofactor % p, u64::from(p - 2), p),
        dlog,
    }
}

//! Fixed parameters of the multiplicative group used by the scrambler.
//!
//! These constants are a compatibility contract: together with the codec
//! alphabet they fully determine the counter-to-code mapping. Changing
//! any of them invalidates every previously issued code.
//!
//! The modulus was chosen (offline, by exhaustive search over 25-bit
//! primes) so that `MODULUS - 1` is squarefree with the smallest
//! possible sum of prime factors, which minimizes the memory needed by
//! the inversion tables. The generator is the smallest prime primitive
//! root of the field.

/// 25-bit prime modulus of the multiplicative group.
pub const MODULUS: u32 = 17_160_991;

/// Order of the multiplicative group, `MODULUS - 1`.
///
/// `17_160_990 = 2 * 3 * 5 * 7 * 11 * 17 * 19 * 23`
pub const GROUP_ORDER: u32 = MODULUS - 1;

/// Smallest prime primitive root modulo [`MODULUS`]; its multiplicative
/// order equals [`GROUP_ORDER`], so its powers enumerate every nonzero
/// residue exactly once per period.
pub const GENERATOR: u32 = 61;

/// Distinct prime factors of [`GROUP_ORDER`].
///
/// The factorization is squarefree (each prime appears to the first
/// power) and the product of the factors equals [`GROUP_ORDER`]. Both
/// properties are required for the Pohlig-Hellman inversion: the
/// per-factor discrete logs are residues modulo pairwise-coprime
/// primes, and the CRT recombination is exact only because their
/// product is the full group order.
pub const FACTORS: [u32; 8] = [2, 3, 5, 7, 11, 17, 19, 23];

/// Exponent offset applied before scrambling, so that the earliest
/// counters do not map to structurally simple codes (counter 0 to code
/// "BBBBB", counter 1 to the generator itself, and so on).
pub const OFFSET: u32 = 30;

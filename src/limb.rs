//! Limb primitives.
//!
//! Magnitudes are little-endian sequences of 32-bit limbs. Every single
//! arithmetic step accumulates into a 64-bit double-limb and splits it into a
//! low result limb and a high carry; subtraction reinterprets the double-limb
//! as signed so an arithmetic right shift propagates the borrow as
//! sign-extended bits. Leading/trailing zero counts come straight from the
//! native `u32` instructions.

/// A single 32-bit limb of a magnitude.
pub type Limb = u32;

/// Wide accumulator for sums, products, and division windows.
pub(crate) type DoubleLimb = u64;

/// Signed reinterpretation of [`DoubleLimb`], used for borrow propagation.
pub(crate) type SignedDoubleLimb = i64;

pub(crate) const LIMB_BITS: u32 = Limb::BITS;

/// Largest power of ten that fits in a limb; decimal conversion works in
/// chunks of this modulus.
pub(crate) const DECIMAL_CHUNK_MODULUS: Limb = 1_000_000_000;

/// Number of decimal digits per base-10⁹ chunk.
pub(crate) const DECIMAL_CHUNK_DIGITS: usize = 9;

/// Upper bound on decimal digits produced per limb (⌈log₁₀(2³²)⌉).
pub(crate) const DECIMAL_DIGITS_PER_LIMB: usize = 10;

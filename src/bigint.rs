//! Arbitrary-precision signed integer.
//!
//! The value is sign-magnitude: a [`Sign`] plus a normalised little-endian
//! limb sequence. Small magnitudes live inline in the object; anything wider
//! than six limbs moves to the heap. Arithmetic allocates the output at the
//! worst-case estimate for the operation, hands slices to the magnitude
//! kernels in [`crate::arith`], and commits the returned sign and length.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use crate::arith;
use crate::decimal;
use crate::error::Error;
use crate::limb::{LIMB_BITS, Limb};
use crate::view::{Sign, View};

const INLINE_LIMBS: usize = 6;

/// Magnitude storage: a small inline array or a heap buffer, selected once
/// at allocation time. The discriminant is authoritative; the significant
/// length lives on [`BigInt`] and shrinking never migrates storage.
#[derive(Debug, Clone)]
enum Storage {
    Inline([Limb; INLINE_LIMBS]),
    Heap(Vec<Limb>),
}

/// Arbitrary-precision signed integer.
#[derive(Debug, Clone)]
pub struct BigInt {
    sign: Sign,
    len: u32,
    storage: Storage,
}

impl BigInt {
    pub const ZERO: BigInt = BigInt {
        sign: Sign::Zero,
        len: 0,
        storage: Storage::Inline([0; INLINE_LIMBS]),
    };

    pub const ONE: BigInt = BigInt {
        sign: Sign::Positive,
        len: 1,
        storage: Storage::Inline([1, 0, 0, 0, 0, 0]),
    };

    pub const MINUS_ONE: BigInt = BigInt {
        sign: Sign::Negative,
        len: 1,
        storage: Storage::Inline([1, 0, 0, 0, 0, 0]),
    };

    /// An empty value with room for `capacity` limbs. Anything that fits the
    /// inline array stays inline; in particular 64-bit values never allocate.
    pub(crate) fn with_limb_capacity(capacity: usize) -> BigInt {
        let storage = if capacity <= INLINE_LIMBS {
            Storage::Inline([0; INLINE_LIMBS])
        } else {
            Storage::Heap(vec![0; capacity])
        };
        BigInt {
            sign: Sign::Zero,
            len: 0,
            storage,
        }
    }

    pub fn from_i64(value: i64) -> BigInt {
        let sign = Sign::from_signum(value);
        let magnitude = value.unsigned_abs();
        let mut limbs = [0; INLINE_LIMBS];
        limbs[0] = magnitude as Limb;
        limbs[1] = (magnitude >> LIMB_BITS) as Limb;
        let len = if limbs[1] != 0 {
            2
        } else if limbs[0] != 0 {
            1
        } else {
            0
        };
        BigInt {
            sign,
            len,
            storage: Storage::Inline(limbs),
        }
    }

    /// Back to a native integer. Fails with [`Error::Overflow`] when the
    /// value does not fit an `i64`.
    pub fn to_i64(&self) -> Result<i64, Error> {
        if self.len > 2 {
            return Err(Error::Overflow);
        }
        let mut magnitude: u64 = 0;
        for (idx, &d) in self.limbs().iter().enumerate() {
            magnitude |= (d as u64) << (idx as u32 * LIMB_BITS);
        }
        match self.sign {
            Sign::Negative => {
                if magnitude > 1 << 63 {
                    Err(Error::Overflow)
                } else {
                    Ok(magnitude.wrapping_neg() as i64)
                }
            }
            _ => {
                if magnitude > i64::MAX as u64 {
                    Err(Error::Overflow)
                } else {
                    Ok(magnitude as i64)
                }
            }
        }
    }

    fn limbs(&self) -> &[Limb] {
        match &self.storage {
            Storage::Inline(a) => &a[..self.len as usize],
            Storage::Heap(v) => &v[..self.len as usize],
        }
    }

    /// Full-capacity mutable slice for the magnitude kernels to write into.
    pub(crate) fn limbs_mut(&mut self) -> &mut [Limb] {
        match &mut self.storage {
            Storage::Inline(a) => &mut a[..],
            Storage::Heap(v) => &mut v[..],
        }
    }

    pub(crate) fn view(&self) -> View<'_> {
        View::new(self.sign, self.limbs())
    }

    /// Adopt the sign and length a magnitude kernel produced in our buffer.
    pub(crate) fn commit(&mut self, sign: Sign, len: usize) {
        debug_assert!((len == 0) == (sign == Sign::Zero));
        debug_assert!(len == 0 || self.limbs_mut()[len - 1] != 0);
        self.sign = sign;
        self.len = len as u32;
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_one(&self) -> bool {
        self.sign == Sign::Positive && self.len == 1 && self.limbs()[0] == 1
    }

    /// Number of significant limbs.
    pub fn limb_len(&self) -> usize {
        self.len as usize
    }

    /// Bit position of the highest set bit plus one; zero for zero. An exact
    /// quantized log2.
    pub fn bit_len(&self) -> u64 {
        match self.limbs().last() {
            None => 0,
            Some(&top) => {
                (self.len as u64 - 1) * LIMB_BITS as u64 + (LIMB_BITS - top.leading_zeros()) as u64
            }
        }
    }

    /// Number of trailing zero bits.
    ///
    /// # Panics
    ///
    /// Panics unless the value is strictly positive.
    pub fn trailing_zeros(&self) -> u32 {
        assert!(
            self.sign == Sign::Positive,
            "trailing_zeros requires a strictly positive value"
        );
        arith::trailing_zeros(self.limbs())
    }

    pub fn abs(&self) -> BigInt {
        let mut c = self.clone();
        c.sign = c.sign.abs();
        c
    }

    /// Truncating division with remainder: `self = q * divisor + r` with
    /// `|r| < |divisor|` and `r` taking the dividend's sign.
    pub fn divmod(&self, divisor: &BigInt) -> Result<(BigInt, BigInt), Error> {
        if divisor.is_zero() {
            return Err(Error::DivideByZero);
        }
        let mut q = BigInt::with_limb_capacity(arith::quotient_estimate(
            self.limb_len(),
            divisor.limb_len(),
        ));
        let mut r = BigInt::with_limb_capacity(arith::remainder_estimate(divisor.limb_len()));
        let ((q_sign, q_len), (r_sign, r_len)) =
            arith::divmod(q.limbs_mut(), r.limbs_mut(), self.view(), divisor.view());
        q.commit(q_sign, q_len);
        r.commit(r_sign, r_len);
        Ok((q, r))
    }

    /// Quotient, or [`Error::DivideByZero`].
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        Ok(self.divmod(divisor)?.0)
    }

    /// Remainder, or [`Error::DivideByZero`].
    pub fn checked_rem(&self, divisor: &BigInt) -> Result<BigInt, Error> {
        Ok(self.divmod(divisor)?.1)
    }
}

/// Greatest common divisor, always non-negative. `gcd(a, 0) = |a|` and
/// `gcd(0, 0) = 0`.
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    let mut out = BigInt::with_limb_capacity(arith::gcd_estimate(a.limb_len(), b.limb_len()));
    let (sign, len) = arith::gcd(out.limbs_mut(), a.view(), b.view());
    out.commit(sign, len);
    out
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::ZERO
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> BigInt {
        BigInt::from_i64(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> BigInt {
        BigInt::from_i64(value as i64)
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        arith::compare(self.view(), other.view()) == Ordering::Equal
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        arith::compare(self.view(), other.view())
    }
}

// ============================================================================
// Arithmetic operators
// ============================================================================

// The borrowing impls do the work; the owning impls delegate so both `a + b`
// and `&a + &b` spellings are available.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                self.$method(&rhs)
            }
        }
    };
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        let mut out =
            BigInt::with_limb_capacity(arith::add_estimate(self.limb_len(), rhs.limb_len()));
        let (sign, len) = arith::add(out.limbs_mut(), self.view(), rhs.view());
        out.commit(sign, len);
        out
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Subtraction is addition of the negated right operand.
    fn sub(self, rhs: &BigInt) -> BigInt {
        let mut out =
            BigInt::with_limb_capacity(arith::add_estimate(self.limb_len(), rhs.limb_len()));
        let (sign, len) = arith::add(out.limbs_mut(), self.view(), rhs.view().negated());
        out.commit(sign, len);
        out
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        let mut out =
            BigInt::with_limb_capacity(arith::mul_estimate(self.limb_len(), rhs.limb_len()));
        let (sign, len) = arith::multiply(out.limbs_mut(), self.view(), rhs.view());
        out.commit(sign, len);
        out
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Truncating division.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`BigInt::checked_div`] to handle that
    /// case.
    fn div(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((q, _)) => q,
            Err(_) => panic!("division by zero"),
        }
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// Remainder with the dividend's sign.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero; use [`BigInt::checked_rem`] to handle that
    /// case.
    fn rem(self, rhs: &BigInt) -> BigInt {
        match self.divmod(rhs) {
            Ok((_, r)) => r,
            Err(_) => panic!("division by zero"),
        }
    }
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);
forward_binop!(Rem, rem);

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let mut c = self.clone();
        c.sign = -c.sign;
        c
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> BigInt {
        self.sign = -self.sign;
        self
    }
}

// ============================================================================
// Scalar operators (single-limb fast paths)
// ============================================================================

impl Mul<i32> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i32) -> BigInt {
        let mut out = BigInt::with_limb_capacity(arith::mul_limb_estimate(self.limb_len()));
        let len = arith::mul_limb(out.limbs_mut(), self.limbs(), rhs.unsigned_abs());
        let sign = if len == 0 {
            Sign::Zero
        } else {
            self.sign * Sign::from_signum(rhs as i64)
        };
        out.commit(sign, len);
        out
    }
}

impl Mul<i32> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: i32) -> BigInt {
        (&self).mul(rhs)
    }
}

impl Div<i32> for &BigInt {
    type Output = BigInt;

    /// Single-limb truncating division.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn div(self, rhs: i32) -> BigInt {
        assert!(rhs != 0, "division by zero");
        let mut out =
            BigInt::with_limb_capacity(arith::quotient_estimate(self.limb_len(), 1));
        let (len, _) = arith::divmod_limb(out.limbs_mut(), self.limbs(), rhs.unsigned_abs());
        let sign = if len == 0 {
            Sign::Zero
        } else {
            self.sign * Sign::from_signum(rhs as i64)
        };
        out.commit(sign, len);
        out
    }
}

impl Div<i32> for BigInt {
    type Output = BigInt;

    fn div(self, rhs: i32) -> BigInt {
        (&self).div(rhs)
    }
}

impl Rem<i32> for &BigInt {
    type Output = i64;

    /// Single-limb remainder, signed like the dividend.
    ///
    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn rem(self, rhs: i32) -> i64 {
        assert!(rhs != 0, "division by zero");
        let mut scratch = BigInt::with_limb_capacity(arith::quotient_estimate(self.limb_len(), 1));
        let (_, rem) = arith::divmod_limb(scratch.limbs_mut(), self.limbs(), rhs.unsigned_abs());
        rem as i64 * self.sign.signum()
    }
}

impl Rem<i32> for BigInt {
    type Output = i64;

    fn rem(self, rhs: i32) -> i64 {
        (&self).rem(rhs)
    }
}

// ============================================================================
// Shifts
// ============================================================================

impl Shl<u32> for &BigInt {
    type Output = BigInt;

    fn shl(self, shift: u32) -> BigInt {
        let mut out =
            BigInt::with_limb_capacity(arith::shl_estimate(self.limb_len(), shift));
        let (sign, len) = arith::shl(out.limbs_mut(), self.view(), shift);
        out.commit(sign, len);
        out
    }
}

impl Shl<u32> for BigInt {
    type Output = BigInt;

    fn shl(self, shift: u32) -> BigInt {
        (&self).shl(shift)
    }
}

impl Shr<u32> for &BigInt {
    type Output = BigInt;

    /// Arithmetic right shift: `a >> n == ⌊a / 2ⁿ⌋`, also for negative `a`.
    fn shr(self, shift: u32) -> BigInt {
        let mut capacity = arith::shr_estimate(self.limb_len(), shift);
        if self.sign == Sign::Negative {
            // flooring round-up can carry one limb past the table estimate
            capacity += 1;
        }
        let mut out = BigInt::with_limb_capacity(capacity);
        let (sign, len) = arith::shr(out.limbs_mut(), self.view(), shift);
        out.commit(sign, len);
        out
    }
}

impl Shr<u32> for BigInt {
    type Output = BigInt;

    fn shr(self, shift: u32) -> BigInt {
        (&self).shr(shift)
    }
}

// ============================================================================
// String conversion
// ============================================================================

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = decimal::magnitude_to_decimal(self.view());
        f.pad_integral(self.sign != Sign::Negative, "", &digits)
    }
}

impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<BigInt, Error> {
        decimal::parse(s)
    }
}

//! Arbitrary-precision rational numbers in canonical form.
//!
//! A [`BigRat`] is a pair of [`BigInt`] values, nominator over denominator,
//! kept canonical by every constructor and operation: the denominator is
//! strictly positive, nominator and denominator are coprime, and zero is
//! uniquely 0/1. Equality is therefore plain pairwise equality.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::bigint::{BigInt, gcd};
use crate::error::Error;
use crate::float;
use crate::view::Sign;

/// Arbitrary-precision rational, always canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigRat {
    nom: BigInt,
    denom: BigInt,
}

impl BigRat {
    pub const ZERO: BigRat = BigRat {
        nom: BigInt::ZERO,
        denom: BigInt::ONE,
    };

    pub const ONE: BigRat = BigRat {
        nom: BigInt::ONE,
        denom: BigInt::ONE,
    };

    pub const MINUS_ONE: BigRat = BigRat {
        nom: BigInt::MINUS_ONE,
        denom: BigInt::ONE,
    };

    /// `nom / denom` in canonical form, or [`Error::DivideByZero`] when the
    /// denominator is zero.
    pub fn new(nom: BigInt, denom: BigInt) -> Result<BigRat, Error> {
        if denom.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self::canonicalized(nom, denom))
    }

    pub fn from_i64s(nom: i64, denom: i64) -> Result<BigRat, Error> {
        Self::new(BigInt::from_i64(nom), BigInt::from_i64(denom))
    }

    /// An integer as a rational; already canonical.
    pub fn from_int(nom: BigInt) -> BigRat {
        BigRat {
            nom,
            denom: BigInt::ONE,
        }
    }

    /// Place `nom / denom` in canonical form: positive denominator, coprime
    /// parts, zero as 0/1.
    fn canonicalized(mut nom: BigInt, mut denom: BigInt) -> BigRat {
        assert!(!denom.is_zero(), "denominator is zero");
        if denom.sign() == Sign::Negative {
            nom = -nom;
            denom = -denom;
        }
        let g = gcd(&nom, &denom);
        if !g.is_one() {
            nom = &nom / &g;
            denom = &denom / &g;
        }
        BigRat { nom, denom }
    }

    pub fn nom(&self) -> &BigInt {
        &self.nom
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    pub fn sign(&self) -> Sign {
        self.nom.sign()
    }

    pub fn is_zero(&self) -> bool {
        self.nom.is_zero()
    }

    /// Canonical form survives dropping the sign, no reduction needed.
    pub fn abs(&self) -> BigRat {
        BigRat {
            nom: self.nom.abs(),
            denom: self.denom.clone(),
        }
    }

    /// Exact rational value of a finite double. NaN and infinities are
    /// rejected with [`Error::DivideByZero`].
    pub fn from_f64(value: f64) -> Result<BigRat, Error> {
        float::rat_from_f64(value)
    }

    /// Nearest double, round half to even; overflows to signed infinity.
    pub fn to_f64(&self) -> f64 {
        f64::from_bits(float::to_float_bits::<11, 52>(self))
    }

    /// Nearest single-precision float, round half to even.
    pub fn to_f32(&self) -> f32 {
        f32::from_bits(float::to_float_bits::<8, 23>(self) as u32)
    }
}

impl From<i64> for BigRat {
    fn from(value: i64) -> BigRat {
        BigRat::from_int(BigInt::from_i64(value))
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl PartialOrd for BigRat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigRat {
    /// Cross-multiplication order: sign of `a.nom·b.denom − b.nom·a.denom`.
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.nom * &other.denom).cmp(&(&other.nom * &self.denom))
    }
}

// ============================================================================
// Arithmetic operators
// ============================================================================

macro_rules! forward_rat_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for BigRat {
            type Output = BigRat;

            fn $method(self, rhs: BigRat) -> BigRat {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&BigRat> for BigRat {
            type Output = BigRat;

            fn $method(self, rhs: &BigRat) -> BigRat {
                (&self).$method(rhs)
            }
        }

        impl $trait<BigRat> for &BigRat {
            type Output = BigRat;

            fn $method(self, rhs: BigRat) -> BigRat {
                self.$method(&rhs)
            }
        }
    };
}

impl Add<&BigRat> for &BigRat {
    type Output = BigRat;

    fn add(self, rhs: &BigRat) -> BigRat {
        BigRat::canonicalized(
            &self.nom * &rhs.denom + &rhs.nom * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub<&BigRat> for &BigRat {
    type Output = BigRat;

    fn sub(self, rhs: &BigRat) -> BigRat {
        self + &(-rhs)
    }
}

impl Mul<&BigRat> for &BigRat {
    type Output = BigRat;

    fn mul(self, rhs: &BigRat) -> BigRat {
        BigRat::canonicalized(&self.nom * &rhs.nom, &self.denom * &rhs.denom)
    }
}

impl Div<&BigRat> for &BigRat {
    type Output = BigRat;

    /// # Panics
    ///
    /// Panics when `rhs` is zero.
    fn div(self, rhs: &BigRat) -> BigRat {
        BigRat::canonicalized(&self.nom * &rhs.denom, &self.denom * &rhs.nom)
    }
}

forward_rat_binop!(Add, add);
forward_rat_binop!(Sub, sub);
forward_rat_binop!(Mul, mul);
forward_rat_binop!(Div, div);

impl Neg for &BigRat {
    type Output = BigRat;

    fn neg(self) -> BigRat {
        BigRat {
            nom: -&self.nom,
            denom: self.denom.clone(),
        }
    }
}

impl Neg for BigRat {
    type Output = BigRat;

    fn neg(self) -> BigRat {
        BigRat {
            nom: -self.nom,
            denom: self.denom,
        }
    }
}

// ============================================================================
// String conversion
// ============================================================================

impl fmt::Display for BigRat {
    /// Always `nom/denom`, denominator positive and never elided.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.nom, self.denom)
    }
}

impl FromStr for BigRat {
    type Err = Error;

    /// Accepts `nom/denom` or a plain integer.
    fn from_str(s: &str) -> Result<BigRat, Error> {
        match s.split_once('/') {
            Some((nom, denom)) => BigRat::new(nom.parse()?, denom.parse()?),
            None => Ok(BigRat::from_int(s.parse()?)),
        }
    }
}

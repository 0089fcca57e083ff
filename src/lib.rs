//! Arbitrary-precision signed integers and canonical rationals.
//!
//! [`BigInt`] stores sign-magnitude integers as packed 32-bit limbs, inline
//! for small values and on the heap beyond six limbs. [`BigRat`] is a pair
//! of integers kept in canonical form (positive denominator, coprime parts),
//! with correctly-rounded conversion to and from IEEE-754 floating point.
//!
//! ```
//! use bigrat::{BigInt, BigRat};
//!
//! let a: BigInt = "123456789123456789".parse().unwrap();
//! let b = BigInt::from_i64(-987654321);
//! assert_eq!((&a * &b).to_string(), "-121932631234567900112635269");
//!
//! let q = BigRat::from_i64s(12, -20).unwrap();
//! assert_eq!(q.to_string(), "-3/5");
//! assert_eq!(BigRat::from_f64(0.75).unwrap(), BigRat::from_i64s(3, 4).unwrap());
//! ```

mod arith;
mod bigint;
mod decimal;
mod error;
mod float;
mod limb;
mod rational;
mod view;


pub use bigint::{BigInt, gcd};
pub use error::Error;
pub use limb::Limb;
pub use rational::BigRat;
pub use view::Sign;

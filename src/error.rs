//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Failure of a fallible conversion or constructor.
///
/// Operator-trait implementations cannot return a `Result`; like the native
/// integer operators they panic on division by zero, and the checked forms
/// (`BigInt::divmod`, `BigInt::checked_div`, `BigRat::new`, ...) return this
/// type instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Decimal parse of an empty string, a lone sign, or a non-digit.
    #[error("invalid decimal input")]
    InvalidInput,

    /// Zero divisor, zero denominator, or a non-finite double given to
    /// `BigRat::from_f64`.
    #[error("division by zero")]
    DivideByZero,

    /// Conversion to a fixed-width integer of a value outside its range.
    #[error("out of range for a 64-bit integer")]
    Overflow,
}

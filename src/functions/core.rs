//! # core.rs
//!
//! Domain checks shared by the built-in function tables.
//!
//! The host math library answers every input with some IEEE value, but the
//! reference output treats some inputs as undefined (for example `log(0)`
//! or `atanh(1)`, which `std` happily maps to infinities). Each predicate
//! here returns `true` where the function is defined; NaN inputs always pass
//! so they propagate as NaN results instead of being reported as errors.

use num_traits::Float;
use thiserror::Error;

/// The input lies outside the mathematical domain of a built-in function.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("math domain error in {function}")]
pub struct DomainError {
    function: &'static str,
}

impl DomainError {
    pub(crate) fn new(function: &'static str) -> Self
    {
        Self { function }
    }

    /// Name of the function that rejected its input.
    pub fn function(&self) -> &'static str
    {
        self.function
    }
}

/// Defined everywhere.
pub(crate) fn everywhere<T: Float>(_x: T) -> bool
{
    true
}

/// Periodic functions reject infinities.
pub(crate) fn not_infinite<T: Float>(x: T) -> bool
{
    !x.is_infinite()
}

/// `[-1, 1]`, the domain of `asin` and `acos`.
pub(crate) fn unit_closed<T: Float>(x: T) -> bool
{
    x.is_nan() || x.abs() <= T::one()
}

/// `(-1, 1)`, the domain of `atanh`.
pub(crate) fn unit_open<T: Float>(x: T) -> bool
{
    x.is_nan() || x.abs() < T::one()
}

/// `[1, inf]`, the domain of `acosh`.
pub(crate) fn at_least_one<T: Float>(x: T) -> bool
{
    x.is_nan() || x >= T::one()
}

/// `(0, inf]`, the domain of the logarithms.
pub(crate) fn positive<T: Float>(x: T) -> bool
{
    x.is_nan() || x > T::zero()
}

/// `[0, inf]`; negative zero is accepted.
pub(crate) fn non_negative<T: Float>(x: T) -> bool
{
    x.is_nan() || x >= T::zero()
}

/// Defined everywhere, binary form.
pub(crate) fn everywhere2<T: Float>(_a: T, _b: T) -> bool
{
    true
}

/// `pow(a, b)` is undefined for zero raised to a finite negative power and
/// for a finite negative base raised to a finite non-integer power.
pub(crate) fn pow_defined<T: Float>(a: T, b: T) -> bool
{
    let zero = T::zero();
    let pole = a == zero && b.is_finite() && b < zero;
    let complex = a.is_finite() && a < zero && b.is_finite() && b.fract() != zero;
    !(pole || complex)
}

/// The product `a * b` is undefined for an infinity times zero.
pub(crate) fn product_defined<T: Float>(a: T, b: T) -> bool
{
    let zero = T::zero();
    !((a.is_infinite() && b == zero) || (a == zero && b.is_infinite()))
}

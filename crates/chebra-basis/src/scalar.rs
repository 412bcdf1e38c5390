//! The scalar coefficient domain.
//!
//! Expansions are generic over [`Scalar`] so that the same algebra works on
//! `f32` and `f64` coefficients.

use std::fmt::{Debug, Display};
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

use num_traits::{Float, FromPrimitive};

/// The trait bound for expansion coefficients.
///
/// Covers `f32` and `f64` through the blanket implementation. Everything the
/// algebra needs is a floating-point field with in-place assignment forms and
/// printable values for diagnostics.
pub trait Scalar:
    Float + FromPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Display + 'static
{
    /// Converts an `f64` constant into the scalar type.
    ///
    /// A conversion that cannot be represented degrades to NaN instead of
    /// panicking; downstream finiteness guards turn it into a reported error.
    #[must_use]
    fn of(v: f64) -> Self {
        Self::from_f64(v).unwrap_or_else(Self::nan)
    }
}

impl<T> Scalar for T where
    T: Float
        + FromPrimitive
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + Display
        + 'static
{
}

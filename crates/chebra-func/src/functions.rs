//! The elementary-function catalog.
//!
//! All functions share the enclosure-then-compose contract from
//! [`crate::compose`]; they differ only in their domain guards.

use chebra_basis::Scalar;
use chebra_poly::ChebyshevExpansion;

use crate::compose::compose_with;
use crate::error::FuncError;

/// Exponential of an expansion.
///
/// # Errors
///
/// [`FuncError::NonFinite`] when the enclosure or a sampled value overflows.
pub fn exp<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(f, "exp", |_, _| true, T::exp)
}

/// Natural logarithm of an expansion.
///
/// # Errors
///
/// [`FuncError::Domain`] when the enclosure includes non-positive values.
pub fn log<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(f, "log", |lo, _| lo > T::zero(), T::ln)
}

/// Square root of an expansion.
///
/// # Errors
///
/// [`FuncError::Domain`] when the enclosure includes negative values.
pub fn sqrt<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(f, "sqrt", |lo, _| lo >= T::zero(), T::sqrt)
}

/// Reciprocal of an expansion.
///
/// # Errors
///
/// [`FuncError::Domain`] when the enclosure straddles zero.
pub fn recip<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(
        f,
        "recip",
        |lo, hi| lo > T::zero() || hi < T::zero(),
        T::recip,
    )
}

/// Sine of an expansion.
///
/// # Errors
///
/// [`FuncError::NonFinite`] when the enclosure is non-finite.
pub fn sin<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(f, "sin", |_, _| true, T::sin)
}

/// Cosine of an expansion.
///
/// # Errors
///
/// [`FuncError::NonFinite`] when the enclosure is non-finite.
pub fn cos<T: Scalar>(f: &ChebyshevExpansion<T>) -> Result<ChebyshevExpansion<T>, FuncError> {
    compose_with(f, "cos", |_, _| true, T::cos)
}

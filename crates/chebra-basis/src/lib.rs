//! # chebra-basis
//!
//! Foundations for the chebra truncated Chebyshev algebra.
//!
//! This crate provides:
//! - [`Scalar`]: the coefficient-type bound (`f32`, `f64`)
//! - 1-D Chebyshev basis utilities (three-term recurrence, Clenshaw)
//! - [`MultiIndex`]: per-axis exponent tuples with a graded-lex order
//! - [`IndexSpace`]: the bijection between retained multi-indices and
//!   linear coefficient positions
//!
//! ## Ordering
//!
//! Multi-indices are enumerated graded-first (all of total degree d before
//! any of degree d+1), with a lexicographic tie-break where earlier axes
//! dominate: for dimension 2 the order is 1, x, y, x², xy, y², x³, ...

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod multi_index;
pub mod ordering;
pub mod recurrence;
pub mod scalar;

#[cfg(test)]
mod proptests;

pub use multi_index::{cmp_graded_lex, MultiIndex};
pub use ordering::{count_for, IndexError, IndexSpace};
pub use scalar::Scalar;

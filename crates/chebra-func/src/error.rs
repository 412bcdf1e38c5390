//! Errors raised while composing elementary functions.

use chebra_poly::AlgebraError;
use thiserror::Error;

/// Errors raised by the elementary-function evaluator.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FuncError {
    /// The operand's enclosure lies outside the function's domain.
    #[error("enclosure {enclosure} lies outside the domain of {function}")]
    Domain {
        /// The elementary function being composed.
        function: &'static str,
        /// The offending enclosure, formatted as `[lo, hi]`.
        enclosure: String,
    },

    /// A non-finite enclosure bound or sampled value.
    #[error("non-finite value while composing {function}")]
    NonFinite {
        /// The elementary function being composed.
        function: &'static str,
    },

    /// A shape or range failure raised by the underlying algebra.
    #[error(transparent)]
    Algebra(#[from] AlgebraError),
}

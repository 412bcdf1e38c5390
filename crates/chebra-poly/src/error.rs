//! Errors raised by the expansion algebra.

use chebra_basis::IndexError;
use thiserror::Error;

/// Errors raised by expansion construction, access, and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// Binary operation over expansions with differing dimension or degree bound.
    #[error("operand shapes differ: (dimension {left_dimension}, degree {left_degree}) vs (dimension {right_dimension}, degree {right_degree})")]
    ShapeMismatch {
        /// Left operand's dimension.
        left_dimension: usize,
        /// Left operand's degree bound.
        left_degree: u32,
        /// Right operand's dimension.
        right_dimension: usize,
        /// Right operand's degree bound.
        right_degree: u32,
    },

    /// A point with the wrong number of coordinates.
    #[error("point has {found} coordinates, the expansion has dimension {expected}")]
    PointDimension {
        /// The expansion's dimension.
        expected: usize,
        /// The point's coordinate count.
        found: usize,
    },

    /// An invalid initializer.
    #[error("invalid construction: {0}")]
    Construction(String),

    /// A multi-index or linear position outside the valid enumeration.
    #[error(transparent)]
    Index(#[from] IndexError),
}

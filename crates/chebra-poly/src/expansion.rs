//! The truncated expansion value type.
//!
//! A [`ChebyshevExpansion`] owns a dimension, a total-degree bound, and a
//! dense coefficient vector indexed through the graded multi-index
//! enumeration. The coefficient vector's length is fixed at construction and
//! never changes; operations that would raise degree discard the over-degree
//! terms instead.

use chebra_basis::recurrence::chebyshev_values;
use chebra_basis::{IndexSpace, MultiIndex, Scalar};

use crate::error::AlgebraError;

/// A truncated multivariate Chebyshev expansion.
///
/// Expansions are value types: every operation returns a new, fully
/// independent expansion, and two logically distinct expansions never share
/// coefficient storage.
#[derive(Clone, PartialEq, Debug)]
pub struct ChebyshevExpansion<T: Scalar> {
    space: IndexSpace,
    coeffs: Vec<T>,
}

impl<T: Scalar> ChebyshevExpansion<T> {
    /// Builds an expansion over a validated space. Internal constructor; the
    /// coefficient vector must already have the space's count.
    pub(crate) fn with_coeffs(space: IndexSpace, coeffs: Vec<T>) -> Self {
        debug_assert_eq!(coeffs.len(), space.count());
        Self { space, coeffs }
    }

    fn validated_space(dimension: usize, degree: u32) -> Result<IndexSpace, AlgebraError> {
        if dimension == 0 {
            return Err(AlgebraError::Construction(
                "dimension must be positive".to_string(),
            ));
        }
        Ok(IndexSpace::new(dimension, degree))
    }

    /// Creates the zero expansion.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Construction`] when `dimension` is zero.
    pub fn zero(dimension: usize, degree: u32) -> Result<Self, AlgebraError> {
        let space = Self::validated_space(dimension, degree)?;
        let coeffs = vec![T::zero(); space.count()];
        Ok(Self::with_coeffs(space, coeffs))
    }

    /// Creates the constant expansion with `value` at the zero multi-index.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Construction`] when `dimension` is zero.
    pub fn constant(dimension: usize, degree: u32, value: T) -> Result<Self, AlgebraError> {
        let mut out = Self::zero(dimension, degree)?;
        out.coeffs[0] = value;
        Ok(out)
    }

    /// Creates the expansion equal to the coordinate variable along `axis`,
    /// i.e. coefficient 1 on T_1 of that axis.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Construction`] when `dimension` is zero, `axis` is out
    /// of range, or the degree bound cannot retain a linear term.
    pub fn variable(dimension: usize, degree: u32, axis: usize) -> Result<Self, AlgebraError> {
        if axis >= dimension {
            return Err(AlgebraError::Construction(format!(
                "axis {axis} out of range for dimension {dimension}"
            )));
        }
        if degree == 0 {
            return Err(AlgebraError::Construction(
                "degree bound 0 cannot retain a variable term".to_string(),
            ));
        }

        let mut out = Self::zero(dimension, degree)?;
        let position = out.space.position_of(&MultiIndex::axis(axis, dimension))?;
        out.coeffs[position] = T::one();
        Ok(out)
    }

    /// Creates an expansion from an externally supplied coefficient list,
    /// ordered by the graded multi-index enumeration.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Construction`] when `dimension` is zero or the list
    /// length differs from the enumeration count.
    pub fn from_coeffs(
        dimension: usize,
        degree: u32,
        coeffs: Vec<T>,
    ) -> Result<Self, AlgebraError> {
        let space = Self::validated_space(dimension, degree)?;
        let expected = space.count();
        if coeffs.len() != expected {
            return Err(AlgebraError::Construction(format!(
                "coefficient list has {} entries, the enumeration has {expected}",
                coeffs.len()
            )));
        }
        Ok(Self::with_coeffs(space, coeffs))
    }

    /// Returns the number of independent variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    /// Returns the total-degree bound.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.space.degree()
    }

    /// Returns the number of retained coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if every coefficient is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|c| c.is_zero())
    }

    /// Returns the multi-index enumeration describing this expansion's shape.
    #[must_use]
    pub fn index_space(&self) -> IndexSpace {
        self.space
    }

    /// Returns the coefficient at a linear position.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Index`] when the position is outside the enumeration.
    pub fn coeff(&self, position: usize) -> Result<T, AlgebraError> {
        // Route the range check through the enumeration for a uniform error.
        self.space.multi_index_of(position)?;
        Ok(self.coeffs[position])
    }

    /// Returns the coefficient bound to a multi-index.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::Index`] when the multi-index is outside the retained
    /// enumeration.
    pub fn coeff_at(&self, index: &MultiIndex) -> Result<T, AlgebraError> {
        let position = self.space.position_of(index)?;
        Ok(self.coeffs[position])
    }

    /// Returns all coefficients in enumeration order.
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        &self.coeffs
    }

    pub(crate) fn coeffs_mut(&mut self) -> &mut [T] {
        &mut self.coeffs
    }

    /// Evaluates the expansion at a point of the reference domain.
    ///
    /// Per-axis basis values come from the three-term recurrence; the result
    /// is the coefficient-weighted sum of basis-term products.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::PointDimension`] when the coordinate count differs
    /// from the expansion's dimension.
    pub fn eval(&self, point: &[T]) -> Result<T, AlgebraError> {
        if point.len() != self.dimension() {
            return Err(AlgebraError::PointDimension {
                expected: self.dimension(),
                found: point.len(),
            });
        }

        let per_axis: Vec<Vec<T>> = point
            .iter()
            .map(|&x| chebyshev_values(self.degree(), x))
            .collect();

        let mut acc = T::zero();
        for (index, &c) in self.space.iter().zip(&self.coeffs) {
            if c.is_zero() {
                continue;
            }
            let mut term = c;
            for (axis, values) in per_axis.iter().enumerate() {
                term = term * values[index.exponent(axis) as usize];
            }
            acc = acc + term;
        }
        Ok(acc)
    }
}

impl<T: Scalar> std::fmt::Display for ChebyshevExpansion<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (index, &c) in self.space.iter().zip(&self.coeffs) {
            if c.is_zero() {
                continue;
            }
            if index.is_constant() {
                terms.push(format!("{c}"));
            } else {
                terms.push(format!("{c}*{index}"));
            }
        }
        write!(f, "{}", terms.join(" + "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_shape() {
        let e = ChebyshevExpansion::<f64>::zero(2, 10).unwrap();
        assert_eq!(e.dimension(), 2);
        assert_eq!(e.degree(), 10);
        assert_eq!(e.len(), 66);
        assert!(e.is_zero());
    }

    #[test]
    fn test_constant() {
        let e = ChebyshevExpansion::constant(3, 2, 4.5_f64).unwrap();
        assert_eq!(e.coeff(0).unwrap(), 4.5);
        assert!(e.coeffs()[1..].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_variable_layout() {
        let x = ChebyshevExpansion::<f64>::variable(2, 3, 0).unwrap();
        let y = ChebyshevExpansion::<f64>::variable(2, 3, 1).unwrap();
        assert_eq!(x.coeff(1).unwrap(), 1.0);
        assert_eq!(y.coeff(2).unwrap(), 1.0);
        assert_eq!(x.coeff_at(&MultiIndex::axis(0, 2)).unwrap(), 1.0);
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            ChebyshevExpansion::<f64>::zero(0, 3),
            Err(AlgebraError::Construction(_))
        ));
        assert!(matches!(
            ChebyshevExpansion::<f64>::variable(2, 3, 2),
            Err(AlgebraError::Construction(_))
        ));
        assert!(matches!(
            ChebyshevExpansion::<f64>::variable(2, 0, 0),
            Err(AlgebraError::Construction(_))
        ));
    }

    #[test]
    fn test_from_coeffs_length_check() {
        assert!(ChebyshevExpansion::from_coeffs(2, 2, vec![0.0_f64; 6]).is_ok());
        assert!(matches!(
            ChebyshevExpansion::from_coeffs(2, 2, vec![0.0_f64; 5]),
            Err(AlgebraError::Construction(_))
        ));
    }

    #[test]
    fn test_coeff_out_of_range() {
        let e = ChebyshevExpansion::<f64>::zero(2, 2).unwrap();
        assert!(matches!(e.coeff(6), Err(AlgebraError::Index(_))));
        assert!(matches!(
            e.coeff_at(&MultiIndex::from_exponents(&[3, 0])),
            Err(AlgebraError::Index(_))
        ));
    }

    #[test]
    fn test_eval_variable_reproduces_coordinate() {
        let x = ChebyshevExpansion::<f64>::variable(2, 5, 0).unwrap();
        let y = ChebyshevExpansion::<f64>::variable(2, 5, 1).unwrap();
        assert_relative_eq!(x.eval(&[0.3, -0.8]).unwrap(), 0.3);
        assert_relative_eq!(y.eval(&[0.3, -0.8]).unwrap(), -0.8);
    }

    #[test]
    fn test_eval_point_dimension() {
        let e = ChebyshevExpansion::<f64>::zero(2, 2).unwrap();
        assert_eq!(
            e.eval(&[0.0]).unwrap_err(),
            AlgebraError::PointDimension {
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_display() {
        let x = ChebyshevExpansion::<f64>::variable(2, 2, 0).unwrap();
        assert_eq!(x.to_string(), "1*T1(x)");
        let z = ChebyshevExpansion::<f64>::zero(2, 2).unwrap();
        assert_eq!(z.to_string(), "0");
    }
}

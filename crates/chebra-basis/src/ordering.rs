//! Enumeration of retained multi-indices.
//!
//! [`IndexSpace`] fixes a dimension and a total-degree bound and exposes the
//! bijection between multi-indices (total degree ≤ bound) and positions in a
//! dense coefficient vector. Positions are graded-block offsets plus a
//! combinatorial rank within the block, so no enumeration table is stored.

use thiserror::Error;

use crate::multi_index::MultiIndex;

/// Errors raised by multi-index/position queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IndexError {
    /// A linear position at or past the enumeration count.
    #[error("position {position} outside enumeration of {count} multi-indices")]
    PositionOutOfRange {
        /// The queried position.
        position: usize,
        /// The number of retained multi-indices.
        count: usize,
    },

    /// A multi-index whose total degree exceeds the retained bound.
    #[error("total degree {total_degree} exceeds the retained bound {degree}")]
    DegreeOutOfBound {
        /// The queried multi-index's total degree.
        total_degree: u32,
        /// The space's degree bound.
        degree: u32,
    },

    /// A multi-index with the wrong number of axes.
    #[error("multi-index has {found} axes, the space has dimension {expected}")]
    DimensionMismatch {
        /// The space's dimension.
        expected: usize,
        /// The queried multi-index's axis count.
        found: usize,
    },
}

/// The enumeration of multi-indices with total degree ≤ a bound.
///
/// Cheap to copy; expansions embed one to describe their shape.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct IndexSpace {
    dimension: usize,
    degree: u32,
}

impl IndexSpace {
    /// Creates the enumeration for `dimension` axes and total degree ≤ `degree`.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is zero. Fallible construction belongs to the
    /// expansion type, which validates its inputs before building a space.
    #[must_use]
    pub fn new(dimension: usize, degree: u32) -> Self {
        assert!(dimension > 0);
        Self { dimension, degree }
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the total-degree bound.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Returns the number of retained multi-indices,
    /// C(dimension + degree, degree).
    #[must_use]
    pub fn count(&self) -> usize {
        count_for(self.dimension, self.degree)
    }

    /// Returns the linear position of a multi-index.
    ///
    /// # Errors
    ///
    /// [`IndexError::DimensionMismatch`] when the axis count differs from the
    /// space's dimension; [`IndexError::DegreeOutOfBound`] when the total
    /// degree exceeds the bound.
    pub fn position_of(&self, index: &MultiIndex) -> Result<usize, IndexError> {
        if index.len() != self.dimension {
            return Err(IndexError::DimensionMismatch {
                expected: self.dimension,
                found: index.len(),
            });
        }

        let total = index.total_degree();
        if total > self.degree {
            return Err(IndexError::DegreeOutOfBound {
                total_degree: total,
                degree: self.degree,
            });
        }

        // Offset of the degree-`total` block, then the rank within it.
        let offset = if total == 0 {
            0
        } else {
            count_for(self.dimension, total - 1)
        };
        Ok(offset + rank_in_block(index.exponents(), total))
    }

    /// Returns the multi-index at a linear position.
    ///
    /// # Errors
    ///
    /// [`IndexError::PositionOutOfRange`] when `position >= count()`.
    pub fn multi_index_of(&self, position: usize) -> Result<MultiIndex, IndexError> {
        let count = self.count();
        if position >= count {
            return Err(IndexError::PositionOutOfRange { position, count });
        }

        // Locate the degree block containing the position.
        let mut degree = 0u32;
        let mut offset = 0usize;
        loop {
            let block = compositions(self.dimension, degree);
            if position < offset + block {
                break;
            }
            offset += block;
            degree += 1;
        }

        Ok(unrank_in_block(self.dimension, degree, position - offset))
    }

    /// Enumerates every retained multi-index in position order.
    #[must_use]
    pub fn iter(&self) -> IndexIter {
        IndexIter {
            space: *self,
            position: 0,
            count: self.count(),
        }
    }
}

/// Iterator over the multi-indices of an [`IndexSpace`] in position order.
#[derive(Clone, Debug)]
pub struct IndexIter {
    space: IndexSpace,
    position: usize,
    count: usize,
}

impl Iterator for IndexIter {
    type Item = MultiIndex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.count {
            return None;
        }
        let index = self.space.multi_index_of(self.position).ok()?;
        self.position += 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.position;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IndexIter {}

/// Returns the number of multi-indices with `dimension` axes and total degree
/// ≤ `degree`: C(dimension + degree, degree).
#[must_use]
pub fn count_for(dimension: usize, degree: u32) -> usize {
    binomial(dimension + degree as usize, degree as usize)
}

/// Number of multi-indices with `parts` axes summing to exactly `total`.
fn compositions(parts: usize, total: u32) -> usize {
    binomial(parts - 1 + total as usize, total as usize)
}

/// Exact binomial coefficient via the multiplicative formula.
///
/// Intermediate products stay exact because each partial product of k
/// consecutive integers is divisible by k!.
fn binomial(n: usize, k: usize) -> usize {
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i as u128 + 1);
    }
    #[allow(clippy::cast_possible_truncation)]
    {
        acc as usize
    }
}

/// Rank of `exps` among all multi-indices of its dimension with the same
/// total degree, in the order where larger leading exponents come first.
fn rank_in_block(exps: &[u32], total: u32) -> usize {
    let mut rank = 0usize;
    let mut remaining = total;

    for (axis, &e) in exps.iter().enumerate() {
        let parts_after = exps.len() - axis - 1;
        if parts_after == 0 {
            break;
        }
        // Every tuple whose exponent here exceeds `e` enumerates earlier.
        for t in (e + 1)..=remaining {
            rank += compositions(parts_after, remaining - t);
        }
        remaining -= e;
    }

    rank
}

/// Inverse of [`rank_in_block`].
fn unrank_in_block(dimension: usize, total: u32, mut rank: usize) -> MultiIndex {
    let mut exps = Vec::with_capacity(dimension);
    let mut remaining = total;

    for axis in 0..dimension - 1 {
        let parts_after = dimension - axis - 1;
        for t in (0..=remaining).rev() {
            let block = compositions(parts_after, remaining - t);
            if rank < block {
                exps.push(t);
                remaining -= t;
                break;
            }
            rank -= block;
        }
    }
    exps.push(remaining);

    MultiIndex::from_exponents(&exps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count() {
        // C(2 + 10, 10) = 66, C(3 + 2, 2) = 10, C(1 + 4, 4) = 5
        assert_eq!(IndexSpace::new(2, 10).count(), 66);
        assert_eq!(IndexSpace::new(3, 2).count(), 10);
        assert_eq!(IndexSpace::new(1, 4).count(), 5);
        assert_eq!(IndexSpace::new(4, 0).count(), 1);
    }

    #[test]
    fn test_enumeration_order_dim2() {
        let space = IndexSpace::new(2, 2);
        let order: Vec<Vec<u32>> = space.iter().map(|i| i.exponents().to_vec()).collect();
        assert_eq!(
            order,
            vec![
                vec![0, 0],
                vec![1, 0],
                vec![0, 1],
                vec![2, 0],
                vec![1, 1],
                vec![0, 2],
            ]
        );
    }

    #[test]
    fn test_variable_positions_match_original_layout() {
        // For dimension 2 the layout is 1, x, y, x², xy, y², x³, ...
        let space = IndexSpace::new(2, 10);
        assert_eq!(space.position_of(&MultiIndex::axis(0, 2)).unwrap(), 1);
        assert_eq!(space.position_of(&MultiIndex::axis(1, 2)).unwrap(), 2);
        assert_eq!(
            space.position_of(&MultiIndex::from_exponents(&[2, 0])).unwrap(),
            3
        );
        assert_eq!(
            space.position_of(&MultiIndex::from_exponents(&[0, 3])).unwrap(),
            9
        );
    }

    #[test]
    fn test_bijection_exhaustive() {
        for dimension in 1..=4 {
            for degree in 0..=5 {
                let space = IndexSpace::new(dimension, degree);
                for position in 0..space.count() {
                    let index = space.multi_index_of(position).unwrap();
                    assert!(index.total_degree() <= degree);
                    assert_eq!(space.position_of(&index).unwrap(), position);
                }
            }
        }
    }

    #[test]
    fn test_iter_matches_positions() {
        let space = IndexSpace::new(3, 4);
        for (position, index) in space.iter().enumerate() {
            assert_eq!(space.position_of(&index).unwrap(), position);
        }
        assert_eq!(space.iter().count(), space.count());
    }

    #[test]
    fn test_position_of_rejects_over_degree() {
        let space = IndexSpace::new(2, 3);
        let err = space
            .position_of(&MultiIndex::from_exponents(&[2, 2]))
            .unwrap_err();
        assert_eq!(
            err,
            IndexError::DegreeOutOfBound {
                total_degree: 4,
                degree: 3
            }
        );
    }

    #[test]
    fn test_position_of_rejects_wrong_dimension() {
        let space = IndexSpace::new(2, 3);
        let err = space
            .position_of(&MultiIndex::from_exponents(&[1, 0, 0]))
            .unwrap_err();
        assert_eq!(
            err,
            IndexError::DimensionMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn test_multi_index_of_rejects_past_end() {
        let space = IndexSpace::new(2, 2);
        let err = space.multi_index_of(6).unwrap_err();
        assert_eq!(
            err,
            IndexError::PositionOutOfRange {
                position: 6,
                count: 6
            }
        );
    }
}

//! Multi-indices labeling multivariate Chebyshev basis terms.
//!
//! A multi-index assigns one non-negative exponent per axis; the basis term
//! it labels is the product of the per-axis T_k functions.

use std::cmp::Ordering;

use smallvec::{smallvec, SmallVec};

/// A multi-index: one exponent per axis.
///
/// Backed by inline storage for the dimensions the algebra is practical at;
/// larger dimensions spill to the heap transparently.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct MultiIndex {
    exps: SmallVec<[u32; 8]>,
}

impl MultiIndex {
    /// Creates the zero multi-index (the constant basis term) for `dimension` axes.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            exps: smallvec![0; dimension],
        }
    }

    /// Creates the multi-index for T_1 along `axis`, zero elsewhere.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= dimension`.
    #[must_use]
    pub fn axis(axis: usize, dimension: usize) -> Self {
        assert!(axis < dimension);
        let mut exps: SmallVec<[u32; 8]> = smallvec![0; dimension];
        exps[axis] = 1;
        Self { exps }
    }

    /// Creates a multi-index from explicit exponents.
    #[must_use]
    pub fn from_exponents(exps: &[u32]) -> Self {
        Self {
            exps: SmallVec::from_slice(exps),
        }
    }

    /// Returns the exponent along `axis`, or 0 past the end.
    #[must_use]
    pub fn exponent(&self, axis: usize) -> u32 {
        self.exps.get(axis).copied().unwrap_or(0)
    }

    /// Returns all exponents.
    #[must_use]
    pub fn exponents(&self) -> &[u32] {
        &self.exps
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.exps.len()
    }

    /// Returns true if there are no axes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exps.is_empty()
    }

    /// Computes the total degree (sum of exponents).
    #[must_use]
    pub fn total_degree(&self) -> u32 {
        self.exps.iter().sum()
    }

    /// Returns true if every exponent is zero.
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.exps.iter().all(|&e| e == 0)
    }
}

/// Compares two multi-indices in the enumeration order of the algebra.
///
/// Graded first (lower total degree precedes higher), then lexicographic with
/// earlier axes dominating: (2,0) precedes (1,1) precedes (0,2).
#[must_use]
pub fn cmp_graded_lex(a: &MultiIndex, b: &MultiIndex) -> Ordering {
    match a.total_degree().cmp(&b.total_degree()) {
        Ordering::Equal => {}
        ord => return ord,
    }

    // Within one degree, a larger leading exponent enumerates earlier.
    for (ea, eb) in a.exps.iter().zip(&b.exps) {
        match eb.cmp(ea) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl std::fmt::Display for MultiIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vars = ['x', 'y', 'z', 'w', 'u', 'v'];
        let mut parts = Vec::new();

        for (axis, &e) in self.exps.iter().enumerate() {
            if e > 0 {
                let var_name = if axis < vars.len() {
                    vars[axis].to_string()
                } else {
                    format!("x{axis}")
                };
                parts.push(format!("T{e}({var_name})"));
            }
        }

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("*"))
        }
    }
}

//! Latin Hypercube designs.
//!
//! Each axis is divided into one stratum per requested point; a random
//! permutation assigns strata to points independently per axis, and each
//! coordinate is jittered uniformly within its stratum. Every axis therefore
//! sees every stratum exactly once.

use chebra_basis::Scalar;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

/// Errors raised by sample-set generation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// A design with no axes or no points.
    #[error("sampling requires a positive dimension and point count")]
    Empty,
}

/// A Latin Hypercube design over the reference domain [-1, 1] per axis.
///
/// Deterministic for a fixed seed; entropy-seeded otherwise. Generator
/// instances do not share random state, so distinct instances may run on
/// distinct threads freely.
#[derive(Clone, Debug)]
pub struct LatinHypercube {
    dimension: usize,
    points: usize,
    seed: Option<u64>,
}

impl LatinHypercube {
    /// Creates a design with `points` samples over `dimension` axes.
    #[must_use]
    pub fn new(dimension: usize, points: usize) -> Self {
        Self {
            dimension,
            points,
            seed: None,
        }
    }

    /// Fixes the random seed, making the design reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of axes.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of points.
    #[must_use]
    pub fn points(&self) -> usize {
        self.points
    }

    /// Generates the sample set: `points` rows of `dimension` coordinates in
    /// [-1, 1].
    ///
    /// # Errors
    ///
    /// [`SamplingError::Empty`] when the dimension or point count is zero.
    pub fn generate<T: Scalar>(&self) -> Result<Vec<Vec<T>>, SamplingError> {
        if self.dimension == 0 || self.points == 0 {
            return Err(SamplingError::Empty);
        }

        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut rows: Vec<Vec<T>> = (0..self.points)
            .map(|_| Vec::with_capacity(self.dimension))
            .collect();
        let mut strata: Vec<usize> = (0..self.points).collect();

        #[allow(clippy::cast_precision_loss)]
        let stratum_count = self.points as f64;
        for _ in 0..self.dimension {
            strata.shuffle(&mut rng);
            for (row, &stratum) in rows.iter_mut().zip(&strata) {
                let jitter: f64 = rng.gen();
                #[allow(clippy::cast_precision_loss)]
                let unit = (stratum as f64 + jitter) / stratum_count;
                row.push(T::of(2.0 * unit - 1.0));
            }
        }

        Ok(rows)
    }
}

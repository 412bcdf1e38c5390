//! # chebra-sampling
//!
//! Latin Hypercube sample sets on the Chebyshev reference domain.
//!
//! The generator is a collaborator of the algebra, not part of it: it
//! produces plain coordinate sequences in [-1, 1] per axis for fitting or
//! validating expansions, and the algebra crates never depend on it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod latin_hypercube;

pub use latin_hypercube::{LatinHypercube, SamplingError};

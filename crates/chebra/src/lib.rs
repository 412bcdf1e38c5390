//! # Chebra
//!
//! A closed algebra over truncated multivariate Chebyshev expansions.
//!
//! Chebra represents nonlinear functions as truncated Chebyshev series and
//! propagates them through arithmetic and elementary functions without
//! re-sampling the underlying function at every query.
//!
//! ## Features
//!
//! - **Fixed-shape expansions**: dense coefficient vectors over a graded
//!   multi-index enumeration, closed under the degree bound
//! - **Truncated arithmetic**: +, −, × with the Chebyshev product identity,
//!   over-degree terms discarded by policy
//! - **Elementary functions**: exp, log, sqrt, recip, sin, cos via enclosure
//!   bounds and 1-D Chebyshev projection
//! - **Latin Hypercube sampling**: reproducible sample sets on the reference
//!   domain
//!
//! ## Quick Start
//!
//! ```rust
//! use chebra::prelude::*;
//!
//! let x = ChebyshevExpansion::<f64>::variable(2, 10, 0).unwrap();
//! let f = (&x * &x) + x + 1.0;
//! let g = chebra::func::exp(&f).unwrap();
//! assert!((g.eval(&[0.0, 0.0]).unwrap() - 1.0_f64.exp()).abs() < 1e-3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use chebra_basis as basis;
pub use chebra_func as func;
pub use chebra_poly as poly;
pub use chebra_sampling as sampling;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use chebra_basis::{IndexSpace, MultiIndex, Scalar};
    pub use chebra_func::{cos, exp, log, recip, sin, sqrt, FuncError};
    pub use chebra_poly::{AlgebraError, ChebyshevExpansion};
    pub use chebra_sampling::LatinHypercube;
}

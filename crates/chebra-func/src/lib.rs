//! # chebra-func
//!
//! Elementary functions over truncated Chebyshev expansions.
//!
//! Given an expansion `f` and a scalar elementary function `g`, the evaluator
//! produces a new expansion approximating `g∘f` at the same degree bound:
//!
//! 1. estimate an enclosure `[lo, hi]` for the range of `f` over the
//!    reference domain from its coefficient magnitudes,
//! 2. project `g` onto a 1-D Chebyshev series on `[lo, hi]`,
//! 3. compose that series back onto `f` by the Clenshaw recurrence, with the
//!    engine's truncated multiplication standing in for "multiply by the
//!    variable".
//!
//! Every function shares this contract; they differ only in the domain guard
//! applied to the enclosure before projecting.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod compose;
pub mod error;
pub mod functions;

pub use compose::enclosure;
pub use error::FuncError;
pub use functions::{cos, exp, log, recip, sin, sqrt};

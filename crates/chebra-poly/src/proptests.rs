//! Property-based tests for the truncated expansion arithmetic.
//!
//! Coefficients are drawn integer-valued: every intermediate the engine
//! produces from them is a small dyadic rational, which binary floating point
//! represents exactly, so the ring-style laws can be asserted with exact
//! equality.

//! The shared enclosure/projection/composition pipeline.
//!
//! Every elementary function runs the same three stages; only the domain
//! guard differs. [`compose_with`] is public so downstream code can compose
//! its own scalar functions under the same contract.

use chebra_basis::recurrence::gauss_nodes;
use chebra_basis::Scalar;
use chebra_poly::{AlgebraError, ChebyshevExpansion};

use crate::error::FuncError;

/// Estimates an enclosure `[lo, hi]` for the range of an expansion over the
/// reference domain.
///
/// The bound is the constant coefficient plus/minus the sum of absolute
/// non-constant coefficients; every basis term is bounded by 1 in magnitude
/// on [-1, 1], so the true range is contained. Conservative by construction,
/// not a tight range analysis.
#[must_use]
pub fn enclosure<T: Scalar>(f: &ChebyshevExpansion<T>) -> (T, T) {
    let coeffs = f.coeffs();
    let center = coeffs[0];
    let radius = coeffs[1..]
        .iter()
        .fold(T::zero(), |acc, &c| acc + c.abs());
    (center - radius, center + radius)
}

/// Composes a scalar function onto an expansion.
///
/// `in_domain` receives the enclosure bounds and decides whether `g` may be
/// projected over them; rejections surface as [`FuncError::Domain`]. A
/// zero-width enclosure (constant operand) short-circuits to the constant
/// `g(mid)` without projecting.
///
/// # Errors
///
/// [`FuncError::Domain`] when the guard rejects the enclosure,
/// [`FuncError::NonFinite`] for non-finite enclosure bounds or sampled
/// values, and [`FuncError::Algebra`] for shape errors raised while
/// composing.
pub fn compose_with<T, G>(
    operand: &ChebyshevExpansion<T>,
    function: &'static str,
    in_domain: impl Fn(T, T) -> bool,
    g: G,
) -> Result<ChebyshevExpansion<T>, FuncError>
where
    T: Scalar,
    G: Fn(T) -> T,
{
    let (lo, hi) = enclosure(operand);
    if !lo.is_finite() || !hi.is_finite() {
        return Err(FuncError::NonFinite { function });
    }
    if !in_domain(lo, hi) {
        return Err(FuncError::Domain {
            function,
            enclosure: format!("[{lo}, {hi}]"),
        });
    }

    let half = T::of(0.5);
    let mid = (lo + hi) * half;

    if hi == lo {
        let value = g(mid);
        if !value.is_finite() {
            return Err(FuncError::NonFinite { function });
        }
        let out = ChebyshevExpansion::constant(operand.dimension(), operand.degree(), value)?;
        return Ok(out);
    }

    let terms = operand.degree() as usize + 1;
    let series = project(&g, lo, hi, terms, function)?;

    // Rescale the operand onto the projection's reference interval [-1, 1].
    let halfwidth = (hi - lo) * half;
    let rescaled = operand.add_scalar(-mid).scale(T::one() / halfwidth);

    clenshaw_compose(&rescaled, &series).map_err(FuncError::from)
}

/// 1-D Chebyshev coefficients of `g` on `[lo, hi]` by discrete projection on
/// the Chebyshev–Gauss nodes, halved-c0 convention.
fn project<T, G>(
    g: &G,
    lo: T,
    hi: T,
    terms: usize,
    function: &'static str,
) -> Result<Vec<T>, FuncError>
where
    T: Scalar,
    G: Fn(T) -> T,
{
    let half = T::of(0.5);
    let mid = (lo + hi) * half;
    let halfwidth = (hi - lo) * half;

    let nodes: Vec<T> = gauss_nodes(terms);
    let mut samples = Vec::with_capacity(terms);
    for &x in &nodes {
        let value = g(mid + halfwidth * x);
        if !value.is_finite() {
            return Err(FuncError::NonFinite { function });
        }
        samples.push(value);
    }

    #[allow(clippy::cast_precision_loss)]
    let node_count = terms as f64;
    let scale = T::of(2.0 / node_count);
    let mut coeffs = Vec::with_capacity(terms);
    for k in 0..terms {
        let mut acc = T::zero();
        for (j, &sample) in samples.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = std::f64::consts::PI * k as f64 * (j as f64 + 0.5) / node_count;
            acc = acc + sample * T::of(angle.cos());
        }
        coeffs.push(acc * scale);
    }
    Ok(coeffs)
}

/// Clenshaw recurrence with the expansion standing in for the variable.
fn clenshaw_compose<T: Scalar>(
    u: &ChebyshevExpansion<T>,
    series: &[T],
) -> Result<ChebyshevExpansion<T>, AlgebraError> {
    let two = T::of(2.0);
    let mut b1 = ChebyshevExpansion::zero(u.dimension(), u.degree())?;
    let mut b2 = b1.clone();

    for &c in series[1..].iter().rev() {
        let next = u.try_mul(&b1)?.scale(two).try_sub(&b2)?.add_scalar(c);
        b2 = b1;
        b1 = next;
    }

    Ok(u
        .try_mul(&b1)?
        .try_sub(&b2)?
        .add_scalar(T::of(0.5) * series[0]))
}

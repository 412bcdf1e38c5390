//! End-to-end scenarios across the algebra, the elementary functions, and
//! the sampling generator.

use approx::assert_abs_diff_eq;

use chebra::prelude::*;

/// Builds f = 1 + x + x·x over two variables at degree bound 10.
fn quadratic() -> ChebyshevExpansion<f64> {
    let one = ChebyshevExpansion::constant(2, 10, 1.0).unwrap();
    let x = ChebyshevExpansion::<f64>::variable(2, 10, 0).unwrap();
    &one + &x + &x * &x
}

#[test]
fn quadratic_coefficients_follow_product_identity() {
    // x·x = T_1·T_1 = ½(T_2 + T_0), so f = 1.5·T_0 + T_1 + 0.5·T_2.
    let f = quadratic();

    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[0, 0])).unwrap(), 1.5);
    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[1, 0])).unwrap(), 1.0);
    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[2, 0])).unwrap(), 0.5);

    // Nothing leaks onto the second axis or higher degrees.
    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[0, 1])).unwrap(), 0.0);
    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[1, 1])).unwrap(), 0.0);
    assert_eq!(f.coeff_at(&MultiIndex::from_exponents(&[3, 0])).unwrap(), 0.0);
}

#[test]
fn exp_of_quadratic_matches_at_origin() {
    // At the origin T_1 vanishes and T_2 = -1, so f is exactly 1 there and
    // the composed expansion must reproduce e.
    let f = quadratic();
    assert_abs_diff_eq!(f.eval(&[0.0, 0.0]).unwrap(), 1.0, epsilon = 1e-14);

    let g = exp(&f).unwrap();
    assert_abs_diff_eq!(g.eval(&[0.0, 0.0]).unwrap(), 1.0_f64.exp(), epsilon = 1e-3);
}

#[test]
fn exp_of_quadratic_matches_pointwise() {
    let f = quadratic();
    let g = exp(&f).unwrap();

    let points: &[(f64, f64)] = &[(0.5, 0.0), (-0.5, 0.9), (0.25, -0.75), (-1.0, 1.0)];
    for &(x, y) in points {
        let truth = (1.0 + x + x * x).exp();
        assert_abs_diff_eq!(g.eval(&[x, y]).unwrap(), truth, epsilon = 1e-3);
    }
}

#[test]
fn exp_agrees_with_truth_on_sampled_points() {
    let f = quadratic();
    let g = exp(&f).unwrap();

    let samples: Vec<Vec<f64>> = LatinHypercube::new(2, 50).with_seed(11).generate().unwrap();
    for point in &samples {
        let truth = (1.0 + point[0] + point[0] * point[0]).exp();
        assert_abs_diff_eq!(g.eval(point).unwrap(), truth, epsilon = 1e-3);
    }
}

#[test]
fn mismatched_degree_bounds_are_rejected() {
    let a = ChebyshevExpansion::<f64>::variable(2, 10, 0).unwrap();
    let b = ChebyshevExpansion::<f64>::variable(2, 8, 0).unwrap();

    assert!(matches!(
        a.try_add(&b),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        a.try_mul(&b),
        Err(AlgebraError::ShapeMismatch { .. })
    ));
}

#[test]
fn composed_expansions_stay_independent() {
    let f = quadratic();
    let before = f.clone();
    let _g = exp(&f).unwrap();
    assert_eq!(f, before);
}

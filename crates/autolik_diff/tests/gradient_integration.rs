//! Integration tests for gradient extraction.
//!
//! Dual-number gradients are compared against closed forms and against
//! central differences of the plain `f64` instantiation of the same model.

use approx::assert_relative_eq;
use autolik_core::traits::Scalar;
use autolik_core::types::Dual;
use autolik_diff::verify::{central_difference, DEFAULT_STEP};
use autolik_diff::{gradient, gradient_batch, try_gradient_batch, GradientConfig, GradientEngine};

/// f(x, y) = -x^3 - 2x^y + e^x + e^(y^2)
fn surface<S: Scalar>(p: &[S]) -> S {
    let (x, y) = (p[0], p[1]);
    -x.powf(3.0) - x.powd(y) * 2.0_f64 + x.exp() + y.powf(2.0).exp()
}

/// ∂f/∂x = -3x^2 - 2y x^(y-1) + e^x
fn surface_dx(x: f64, y: f64) -> f64 {
    -3.0 * x * x - 2.0 * y * x.powf(y - 1.0) + x.exp()
}

/// ∂f/∂y = -2 x^y ln x + 2y e^(y^2)
fn surface_dy(x: f64, y: f64) -> f64 {
    -2.0 * x.powf(y) * x.ln() + 2.0 * y * (y * y).exp()
}

/// A model mixing every elementary operation.
fn mixed<S: Scalar>(p: &[S]) -> S {
    let (a, b, c) = (p[0], p[1], p[2]);
    (a * b).sin() + c.sqrt() / a - b.ln() * c.cos() + a.gamma() + b.rpow(2.0) - c.rdiv(1.0)
}

#[test]
fn test_surface_gradient_at_unit_point() {
    let e = std::f64::consts::E;
    let g = gradient(surface::<Dual>, &[1.0, 1.0]);
    assert_relative_eq!(g[0], e - 5.0, epsilon = 1e-12);
    assert_relative_eq!(g[1], 2.0 * e, epsilon = 1e-12);
}

#[test]
fn test_surface_gradient_at_diagonal_points() {
    for v in [2.0, 3.0] {
        let g = gradient(surface::<Dual>, &[v, v]);
        assert_relative_eq!(g[0], surface_dx(v, v), max_relative = 1e-12);
        assert_relative_eq!(g[1], surface_dy(v, v), max_relative = 1e-12);
    }
}

#[test]
fn test_gradient_matches_central_difference() {
    let points = [[0.7, 1.3, 2.1], [1.5, 0.4, 0.9], [2.2, 2.0, 3.5]];
    for at in points {
        let ad = gradient(mixed::<Dual>, &at);
        let fd = central_difference(mixed::<f64>, &at, DEFAULT_STEP);
        for (a, f) in ad.iter().zip(&fd) {
            assert_relative_eq!(*a, *f, epsilon = 1e-6, max_relative = 1e-6);
        }
    }
}

#[test]
fn test_no_cross_talk_between_parameters() {
    // Each parameter appears in its own term only
    let f = |p: &[Dual]| p[0].exp() + p[1].powf(2.0) + p[2].sin();
    let g = gradient(f, &[0.5, 3.0, 0.0]);
    assert_relative_eq!(g[0], 0.5_f64.exp(), epsilon = 1e-12);
    assert_relative_eq!(g[1], 6.0, epsilon = 1e-12);
    assert_relative_eq!(g[2], 1.0, epsilon = 1e-12);
}

#[test]
fn test_primal_is_the_plain_evaluation() {
    let at = [0.7, 1.3, 2.1];
    let plain = mixed::<f64>(&at);
    assert_eq!(autolik_diff::value(mixed::<Dual>, &at), plain);
}

#[test]
fn test_engine_configurations_agree() {
    let points: Vec<Vec<f64>> = (1..=100)
        .map(|i| {
            let t = i as f64 / 25.0;
            vec![0.5 + t, 1.0 + t / 2.0, 0.25 + t]
        })
        .collect();

    let reference = gradient_batch(mixed::<Dual>, &points);
    let configs = [
        GradientConfig::default(),
        GradientConfig::sequential(),
        GradientConfig::parallel(),
        GradientConfig::new(10).with_parallel_seeding(true),
    ];

    for config in configs {
        let engine = GradientEngine::new(config);
        assert_eq!(engine.gradient_batch(mixed::<Dual>, &points), reference);
    }
}

#[test]
fn test_batch_failure_does_not_abort_other_points() {
    let guarded = |p: &[Dual]| -> Result<Dual, String> {
        if p[1].real <= 0.0 {
            return Err(format!("b must be positive, got {}", p[1].real));
        }
        Ok(mixed(p))
    };
    let points = [[1.0, 1.0, 1.0], [1.0, -1.0, 1.0], [2.0, 2.0, 2.0]];

    let sequential = try_gradient_batch(guarded, &points);
    let parallel = GradientEngine::new(GradientConfig::parallel()).try_gradient_batch(guarded, &points);

    assert_eq!(sequential, parallel);
    assert!(sequential[0].is_ok());
    assert_eq!(sequential[1], Err("b must be positive, got -1".to_string()));
    assert_eq!(
        sequential[2].as_ref().ok(),
        Some(&gradient(mixed::<Dual>, &points[2]))
    );
}

mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn test_surface_gradient_matches_closed_form(x in 0.2..3.0_f64, y in -2.0..2.0_f64) {
            let g = gradient(surface::<Dual>, &[x, y]);
            let dx = surface_dx(x, y);
            let dy = surface_dy(x, y);
            prop_assert!((g[0] - dx).abs() <= 1e-9 * dx.abs().max(1.0));
            prop_assert!((g[1] - dy).abs() <= 1e-9 * dy.abs().max(1.0));
        }

        #[test]
        fn test_seeding_leaves_primal_unchanged(a in 0.5..4.0_f64, b in 0.5..4.0_f64, c in 0.5..4.0_f64) {
            let at = [a, b, c];
            let plain = mixed::<f64>(&at);
            for i in 0..3 {
                let mut args: Vec<Dual> = at.iter().copied().map(Dual::constant).collect();
                args[i].eps = 1.0;
                prop_assert_eq!(mixed::<Dual>(&args).real, plain);
            }
        }
    }
}

//! Finite-difference gradients for checking dual-number results.
//!
//! These evaluate the plain `f64` instantiation of a model and are only
//! meant for verification: they cost 2N evaluations and lose roughly half
//! the significant digits.

/// Default central-difference step.
pub const DEFAULT_STEP: f64 = 1e-6;

/// Central-difference gradient of `f` at `at` with step `h`.
///
/// Each component is `(f(x + h·eᵢ) - f(x - h·eᵢ)) / 2h`.
///
/// # Examples
///
/// ```rust
/// use autolik_diff::verify::{central_difference, DEFAULT_STEP};
///
/// // f(x, y) = x^2 y
/// let g = central_difference(|p| p[0] * p[0] * p[1], &[3.0, 2.0], DEFAULT_STEP);
/// assert!((g[0] - 12.0).abs() < 1e-5);
/// assert!((g[1] - 9.0).abs() < 1e-5);
/// ```
pub fn central_difference<F>(f: F, at: &[f64], h: f64) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let mut point = at.to_vec();
    (0..at.len())
        .map(|i| {
            point[i] = at[i] + h;
            let up = f(&point);
            point[i] = at[i] - h;
            let down = f(&point);
            point[i] = at[i];
            (up - down) / (2.0 * h)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_polynomial() {
        let g = central_difference(|p| p[0].powi(3), &[2.0], DEFAULT_STEP);
        assert_relative_eq!(g[0], 12.0, epsilon = 1e-5);
    }

    #[test]
    fn test_point_restored_between_components() {
        let g = central_difference(|p| p[0] + 10.0 * p[1], &[1.0, 1.0], 1e-3);
        assert_relative_eq!(g[0], 1.0, epsilon = 1e-9);
        assert_relative_eq!(g[1], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_empty_point() {
        assert!(central_difference(|_| 1.0, &[], DEFAULT_STEP).is_empty());
    }
}

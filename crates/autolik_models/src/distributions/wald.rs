//! Inverse Gaussian (Wald) densities.

use std::f64::consts::PI;

use autolik_core::traits::Scalar;

use super::error::{ensure_parameters, ensure_support, Result};

/// Inverse Gaussian density with shape `lam` and mean `mu`.
///
/// f(x) = √(λ/(2πx³)) e^(−λ(x−μ)²/(2xμ²)), x > 0
pub fn inv_gaussian<S: Scalar>(x: f64, lam: impl Into<S>, mu: impl Into<S>) -> Result<S> {
    let (lam, mu) = (lam.into(), mu.into());
    ensure_support(x > 0.0, "inv_gaussian", x, "x > 0")?;
    ensure_parameters(
        lam.value() > 0.0 && mu.value() > 0.0,
        "inv_gaussian",
        "λ > 0, μ > 0",
    )?;

    let dev = mu.rsub(x);
    let exponent = -(lam * dev * dev) / (mu * mu * (2.0 * x));
    Ok((lam / (2.0 * PI * x.powi(3))).sqrt() * exponent.exp())
}

/// Standard Wald density, the inverse Gaussian with μ = 1.
///
/// f(x) = √(λ/(2πx³)) e^(−λ(x−1)²/(2x)), x > 0
pub fn std_wald<S: Scalar>(x: f64, lam: impl Into<S>) -> Result<S> {
    let lam = lam.into();
    ensure_support(x > 0.0, "std_wald", x, "x > 0")?;
    ensure_parameters(lam.value() > 0.0, "std_wald", "λ > 0")?;

    let exponent = lam * (-(x - 1.0).powi(2) / (2.0 * x));
    Ok((lam / (2.0 * PI * x.powi(3))).sqrt() * exponent.exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use autolik_core::types::Dual;

    #[test]
    fn test_inv_gaussian_value() {
        // x = μ removes the exponential
        let p: f64 = inv_gaussian(2.0, 3.0, 2.0).unwrap();
        assert_relative_eq!(p, (3.0 / (16.0 * PI)).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_inv_gaussian_mean_derivative() {
        // ∂/∂μ ln f = λ(x − μ)/μ³
        let (x, lam, mu) = (1.4, 2.5, 0.9);
        let d: Dual = inv_gaussian(x, lam, Dual::variable(mu)).unwrap();
        let expected = d.real * lam * (x - mu) / (mu * mu * mu);
        assert_relative_eq!(d.eps, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_std_wald_matches_unit_mean() {
        for x in [0.3, 1.0, 2.7] {
            let a: f64 = std_wald(x, 1.8).unwrap();
            let b: f64 = inv_gaussian(x, 1.8, 1.0).unwrap();
            assert_relative_eq!(a, b, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_parameter_checks() {
        assert!(inv_gaussian::<f64>(1.0, 0.0, 1.0).is_err());
        assert!(inv_gaussian::<f64>(1.0, 1.0, -1.0).is_err());
        assert!(inv_gaussian::<f64>(0.0, 1.0, 1.0).is_err());
        assert!(std_wald::<f64>(1.0, -2.0).is_err());
    }
}

//! Gamma-type densities on x > 0.
//!
//! Gamma, generalised gamma, inverted gamma, χ and χ². Every one of them
//! carries a Γ normaliser in its shape parameter. Each density is assembled
//! in log space with [`Scalar::ln_gamma`] and exponentiated once, so large
//! shapes stay finite and the shape tangent picks up a digamma term.

use std::f64::consts::LN_2;

use autolik_core::traits::Scalar;

use super::error::{ensure_parameters, ensure_support, Result};

/// Gamma density with scale `alpha` and shape `beta`.
///
/// # Mathematical Definition
/// f(x) = x^(β−1) e^(−x/α) / (α^β Γ(β)), x > 0
///
/// Note the parameter order: scale first, then shape.
///
/// # Errors
/// - `OutOfSupport` unless x > 0
/// - `InvalidParameter` unless α > 0 and β > 0
pub fn gamma<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(x > 0.0, "gamma", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "gamma",
        "α > 0, β > 0",
    )?;

    let ln_kernel = (beta - 1.0_f64) * x.ln() - alpha.rdiv(x);
    Ok((ln_kernel - beta * alpha.ln() - beta.ln_gamma()).exp())
}

/// Generalised gamma density with scale `alpha` and shapes `beta`, `gam`.
///
/// f(x) = γ x^(γβ−1) e^(−(x/α)^γ) / (α^(γβ) Γ(β)), x > 0
pub fn ggamma<S: Scalar>(
    x: f64,
    alpha: impl Into<S>,
    beta: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (alpha, beta, gam) = (alpha.into(), beta.into(), gam.into());
    ensure_support(x > 0.0, "ggamma", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0 && gam.value() > 0.0,
        "ggamma",
        "α > 0, β > 0, γ > 0",
    )?;

    let gb = gam * beta;
    let ln_kernel = (gb - 1.0_f64) * x.ln() - alpha.rdiv(x).powd(gam);
    Ok((gam.ln() + ln_kernel - gb * alpha.ln() - beta.ln_gamma()).exp())
}

/// Inverted gamma density with shape `alpha` and scale `beta`.
///
/// f(x) = x^(−(α+1)) e^(−1/(βx)) / (Γ(α) β^α), x > 0
pub fn inv_gamma<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(x > 0.0, "inv_gamma", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "inv_gamma",
        "α > 0, β > 0",
    )?;

    let ln_kernel = -(alpha + 1.0_f64) * x.ln() - (beta * x).rdiv(1.0);
    Ok((ln_kernel - alpha.ln_gamma() - alpha * beta.ln()).exp())
}

/// χ density with `n` degrees of freedom.
///
/// f(x) = x^(n−1) e^(−x²/2) / (2^(n/2−1) Γ(n/2)), x > 0
pub fn chi<S: Scalar>(x: f64, n: impl Into<S>) -> Result<S> {
    let n = n.into();
    ensure_support(x > 0.0, "chi", x, "x > 0")?;
    ensure_parameters(n.value() > 0.0, "chi", "n > 0")?;

    let half = n / 2.0_f64;
    let ln_kernel = (n - 1.0_f64) * x.ln() - x * x / 2.0;
    Ok((ln_kernel - (half - 1.0_f64) * LN_2 - half.ln_gamma()).exp())
}

/// χ² density with `n` degrees of freedom.
///
/// f(x) = x^(n/2−1) e^(−x/2) / (2^(n/2) Γ(n/2)), x > 0
pub fn chisqr<S: Scalar>(x: f64, n: impl Into<S>) -> Result<S> {
    let n = n.into();
    ensure_support(x > 0.0, "chisqr", x, "x > 0")?;
    ensure_parameters(n.value() > 0.0, "chisqr", "n > 0")?;

    let half = n / 2.0_f64;
    let ln_kernel = (half - 1.0_f64) * x.ln() - x / 2.0;
    Ok((ln_kernel - half * LN_2 - half.ln_gamma()).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistributionError;
    use approx::assert_relative_eq;
    use autolik_core::math::special;
    use autolik_core::types::Dual;

    #[test]
    fn test_gamma_shape_one_is_exponential() {
        // β = 1: e^(−x/α)/α
        let p: f64 = gamma(2.0, 4.0, 1.0).unwrap();
        assert_relative_eq!(p, (-0.5_f64).exp() / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_gamma_rejects_out_of_support() {
        assert!(matches!(
            gamma::<f64>(0.0, 1.0, 1.0),
            Err(DistributionError::OutOfSupport { distribution: "gamma", .. })
        ));
        assert!(matches!(
            gamma::<f64>(1.0, 1.0, -2.0),
            Err(DistributionError::InvalidParameter { distribution: "gamma", .. })
        ));
    }

    #[test]
    fn test_gamma_shape_derivative() {
        // ∂/∂β ln f = ln x − ln α − ψ(β)
        let (x, alpha, beta) = (1.7_f64, 0.8_f64, 2.3_f64);
        let d: Dual = gamma(x, alpha, Dual::variable(beta)).unwrap();
        let expected = d.real * (x.ln() - alpha.ln() - special::digamma(beta));
        assert_relative_eq!(d.eps, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_large_shapes_stay_finite() {
        let p: f64 = gamma(200.0, 1.0, 200.0).unwrap();
        assert_relative_eq!(p, 0.028_197_727_685_921_072, max_relative = 1e-9);

        let d: Dual = gamma(200.0, 1.0, Dual::variable(200.0)).unwrap();
        let expected = d.real * (200.0_f64.ln() - special::digamma(200.0));
        assert!(d.eps.is_finite());
        assert_relative_eq!(d.eps, expected, max_relative = 1e-9);

        let c: f64 = chisqr(290.0, 300.0).unwrap();
        assert_relative_eq!(c, 0.015_463_233_342_558_598, max_relative = 1e-9);

        for p in [
            ggamma::<f64>(180.0, 1.0, 190.0, 1.0).unwrap(),
            inv_gamma::<f64>(0.01, 250.0, 0.4).unwrap(),
            chi::<f64>(17.0, 300.0).unwrap(),
        ] {
            assert!(p.is_finite() && p > 0.0, "{p}");
        }
    }

    #[test]
    fn test_ggamma_reduces_to_gamma() {
        // γ = 1 gives the gamma density with the same scale and shape
        let g: f64 = ggamma(1.3, 2.0, 3.0, 1.0).unwrap();
        let h: f64 = gamma(1.3, 2.0, 3.0).unwrap();
        assert_relative_eq!(g, h, epsilon = 1e-12);
    }

    #[test]
    fn test_inv_gamma_value() {
        // α = 1, β = 1, x = 1: e^(−1)
        let p: f64 = inv_gamma(1.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(p, (-1.0_f64).exp(), epsilon = 1e-12);
        assert!(inv_gamma::<f64>(1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_chi_two_dof_is_rayleigh_form() {
        // n = 2: x e^(−x²/2)
        let x = 1.4_f64;
        let p: f64 = chi(x, 2.0).unwrap();
        assert_relative_eq!(p, x * (-x * x / 2.0).exp(), epsilon = 1e-12);
    }

    #[test]
    fn test_chisqr_two_dof_is_exponential() {
        // n = 2: e^(−x/2)/2
        let p: f64 = chisqr(3.0, 2.0).unwrap();
        assert_relative_eq!(p, (-1.5_f64).exp() / 2.0, epsilon = 1e-12);
    }
}

//! Lifetime and survival densities on x > 0.
//!
//! Exponential, Weibull, Rayleigh, Lomax, Pareto, generalised Pareto,
//! Makeham, Muth, logistic-exponential, log-logistic and log-normal.

use std::f64::consts::PI;

use autolik_core::traits::Scalar;

use super::error::{ensure_parameters, ensure_support, Result};

/// Exponential density with rate `lam`.
///
/// f(x) = λ e^(−λx), x > 0
///
/// # Examples
/// ```
/// use autolik_core::types::Dual;
/// use autolik_models::pdf;
///
/// // ∂/∂λ λe^(−λx) = (1 − λx) e^(−λx), zero at λx = 1
/// let d: Dual = pdf::exponential(2.0, Dual::variable(0.5)).unwrap();
/// assert!(d.eps.abs() < 1e-15);
/// ```
pub fn exponential<S: Scalar>(x: f64, lam: impl Into<S>) -> Result<S> {
    let lam = lam.into();
    ensure_support(x > 0.0, "exponential", x, "x > 0")?;
    ensure_parameters(lam.value() > 0.0, "exponential", "λ > 0")?;

    Ok(lam * (lam * -x).exp())
}

/// Weibull density with scale `alpha` and shape `beta`.
///
/// f(x) = (β/α) x^(β−1) e^(−x^β/α), x > 0
pub fn weibull<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(x > 0.0, "weibull", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "weibull",
        "α > 0, β > 0",
    )?;

    let kernel = (beta - 1.0_f64).rpow(x) * (-(beta.rpow(x) / alpha)).exp();
    Ok(beta / alpha * kernel)
}

/// Rayleigh density.
///
/// f(x) = 2x e^(−x²/α) / α, x > 0
pub fn rayleigh<S: Scalar>(x: f64, alpha: impl Into<S>) -> Result<S> {
    let alpha = alpha.into();
    ensure_support(x > 0.0, "rayleigh", x, "x > 0")?;
    ensure_parameters(alpha.value() > 0.0, "rayleigh", "α > 0")?;

    Ok(alpha.rdiv(-x * x).exp() * (2.0 * x) / alpha)
}

/// Lomax density with scale `lam` and shape `kappa`.
///
/// f(x) = λκ / (1 + λx)^(κ+1), x > 0
pub fn lomax<S: Scalar>(x: f64, lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa) = (lam.into(), kappa.into());
    ensure_support(x > 0.0, "lomax", x, "x > 0")?;
    ensure_parameters(
        lam.value() > 0.0 && kappa.value() > 0.0,
        "lomax",
        "λ > 0, κ > 0",
    )?;

    Ok(lam * kappa / (lam * x + 1.0_f64).powd(kappa + 1.0_f64))
}

/// Pareto density with minimum `lam` and shape `kappa`.
///
/// f(x) = κλ^κ / x^(κ+1), x > λ
pub fn pareto<S: Scalar>(x: f64, lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa) = (lam.into(), kappa.into());
    ensure_support(x > lam.value(), "pareto", x, "x > λ")?;
    ensure_parameters(
        lam.value() > 0.0 && kappa.value() > 0.0,
        "pareto",
        "λ > 0, κ > 0",
    )?;

    Ok(kappa * lam.powd(kappa) / (kappa + 1.0_f64).rpow(x))
}

/// Generalised Pareto density.
///
/// f(x) = (γ + κ/(x+δ)) (1 + x/δ)^(−κ) e^(−γx), x > 0
///
/// # Errors
/// `InvalidParameter` unless δ > 0, γ ≥ 0 and κ ≥ −δγ.
pub fn gpareto<S: Scalar>(
    x: f64,
    delta: impl Into<S>,
    kappa: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (delta, kappa, gam) = (delta.into(), kappa.into(), gam.into());
    ensure_support(x > 0.0, "gpareto", x, "x > 0")?;
    let (d, k, g) = (delta.value(), kappa.value(), gam.value());
    ensure_parameters(
        d > 0.0 && g >= 0.0 && k >= -d * g,
        "gpareto",
        "δ > 0, γ ≥ 0, κ ≥ −δγ",
    )?;

    let hazard = gam + kappa / (delta + x);
    let survival = (delta.rdiv(x) + 1.0_f64).powd(-kappa) * (gam * -x).exp();
    Ok(hazard * survival)
}

/// Makeham density.
///
/// f(x) = (γ + δκˣ) e^(−γx − δ(κˣ−1)/ln κ), x > 0
///
/// # Errors
/// `InvalidParameter` unless δ > 0, κ > 1 and γ > 0. κ = 1 would divide
/// by ln κ = 0.
pub fn makeham<S: Scalar>(
    x: f64,
    delta: impl Into<S>,
    kappa: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (delta, kappa, gam) = (delta.into(), kappa.into(), gam.into());
    ensure_support(x > 0.0, "makeham", x, "x > 0")?;
    ensure_parameters(
        delta.value() > 0.0 && kappa.value() > 1.0 && gam.value() > 0.0,
        "makeham",
        "δ > 0, κ > 1, γ > 0",
    )?;

    let kx = kappa.powf(x);
    let exponent = gam * -x - delta * (kx - 1.0_f64) / kappa.ln();
    Ok((gam + delta * kx) * exponent.exp())
}

/// Muth density.
///
/// f(x) = (e^(κx) − κ) e^(−e^(κx)/κ + κx + 1/κ), x > 0
///
/// # Errors
/// `InvalidParameter` unless 0 < κ ≤ 1.
pub fn muth<S: Scalar>(x: f64, kappa: impl Into<S>) -> Result<S> {
    let kappa = kappa.into();
    ensure_support(x > 0.0, "muth", x, "x > 0")?;
    let k = kappa.value();
    ensure_parameters(0.0 < k && k <= 1.0, "muth", "0 < κ ≤ 1")?;

    let ekx = (kappa * x).exp();
    let exponent = -(ekx / kappa) + kappa * x + kappa.rdiv(1.0);
    Ok((ekx - kappa) * exponent.exp())
}

/// Logistic-exponential density with rate `alpha` and shape `beta`.
///
/// f(x) = αβ (e^(αx) − 1)^(β−1) e^(αx) / (1 + (e^(αx) − 1)^β)², x > 0
pub fn logistic_exp<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(x > 0.0, "logistic_exp", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "logistic_exp",
        "α > 0, β > 0",
    )?;

    let eax = (alpha * x).exp();
    let m = eax - 1.0_f64;
    let denom = (m.powd(beta) + 1.0_f64).powf(2.0);
    Ok(alpha * beta * m.powd(beta - 1.0_f64) * eax / denom)
}

/// Log-logistic density with scale `lam` and shape `kappa`.
///
/// f(x) = λκ (λx)^(κ−1) / (1 + (λx)^κ)², x > 0
pub fn log_logistic<S: Scalar>(x: f64, lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa) = (lam.into(), kappa.into());
    ensure_support(x > 0.0, "log_logistic", x, "x > 0")?;
    ensure_parameters(
        lam.value() > 0.0 && kappa.value() > 0.0,
        "log_logistic",
        "λ > 0, κ > 0",
    )?;

    let lx = lam * x;
    let denom = (lx.powd(kappa) + 1.0_f64).powf(2.0);
    Ok(lam * kappa * lx.powd(kappa - 1.0_f64) / denom)
}

/// Log-normal density with scale `alpha` and shape `beta`.
///
/// f(x) = e^(−½(ln(x/α)/β)²) / (xβ√(2π)), x > 0
pub fn log_normal<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(x > 0.0, "log_normal", x, "x > 0")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "log_normal",
        "α > 0, β > 0",
    )?;

    let z = alpha.rdiv(x).ln() / beta;
    Ok((z * z * -0.5_f64).exp() / (beta * (x * (2.0 * PI).sqrt())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DistributionError;
    use approx::assert_relative_eq;
    use autolik_core::types::Dual;

    #[test]
    fn test_exponential_value_and_support() {
        let p: f64 = exponential(1.0, 2.0).unwrap();
        assert_relative_eq!(p, 2.0 * (-2.0_f64).exp(), epsilon = 1e-15);
        assert!(matches!(
            exponential::<f64>(-1.0, 2.0),
            Err(DistributionError::OutOfSupport { .. })
        ));
    }

    #[test]
    fn test_weibull_shape_one_is_exponential() {
        // β = 1: e^(−x/α)/α
        let w: f64 = weibull(1.3, 2.0, 1.0).unwrap();
        let e: f64 = exponential(1.3, 0.5).unwrap();
        assert_relative_eq!(w, e, epsilon = 1e-14);
    }

    #[test]
    fn test_rayleigh_value() {
        let x = 1.5_f64;
        let p: f64 = rayleigh(x, 2.0).unwrap();
        assert_relative_eq!(p, x * (-x * x / 2.0).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_lomax_derivative() {
        // ∂/∂κ ln f = 1/κ − ln(1 + λx)
        let (x, lam, kappa) = (0.8_f64, 1.5_f64, 2.2_f64);
        let d: Dual = lomax(x, lam, Dual::variable(kappa)).unwrap();
        let expected = d.real * (1.0 / kappa - (1.0 + lam * x).ln());
        assert_relative_eq!(d.eps, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_pareto_support_is_above_minimum() {
        assert!(pareto::<f64>(2.0, 1.0, 3.0).is_ok());
        assert!(matches!(
            pareto::<f64>(1.0, 1.0, 3.0),
            Err(DistributionError::OutOfSupport { distribution: "pareto", .. })
        ));

        let p: f64 = pareto(2.0, 1.0, 3.0).unwrap();
        assert_relative_eq!(p, 3.0 / 16.0, epsilon = 1e-15);
    }

    #[test]
    fn test_gpareto_constraints() {
        assert!(gpareto::<f64>(1.0, 1.0, -0.5, 1.0).is_ok());
        assert!(gpareto::<f64>(1.0, 1.0, -1.5, 1.0).is_err());
        assert!(gpareto::<f64>(1.0, 1.0, 1.0, -0.1).is_err());
        assert!(gpareto::<f64>(1.0, 0.0, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_gpareto_zero_gamma_is_lomax_form() {
        // γ = 0: (κ/δ)(1 + x/δ)^(−κ−1), lomax with λ = 1/δ
        let g: f64 = gpareto(0.7, 2.0, 3.0, 0.0).unwrap();
        let l: f64 = lomax(0.7, 0.5, 3.0).unwrap();
        assert_relative_eq!(g, l, epsilon = 1e-14);
    }

    #[test]
    fn test_makeham_requires_kappa_above_one() {
        assert!(makeham::<f64>(1.0, 0.5, 2.0, 0.1).is_ok());
        assert!(makeham::<f64>(1.0, 0.5, 1.0, 0.1).is_err());
        assert!(makeham::<f64>(1.0, 0.5, 0.5, 0.1).is_err());
    }

    #[test]
    fn test_muth_parameter_range() {
        assert!(muth::<f64>(1.0, 1.0).is_ok());
        assert!(muth::<f64>(1.0, 0.3).is_ok());
        assert!(muth::<f64>(1.0, 1.2).is_err());
        assert!(muth::<f64>(1.0, 0.0).is_err());
    }

    #[test]
    fn test_log_logistic_unit_parameters() {
        // λ = κ = 1: 1/(1 + x)²
        let p: f64 = log_logistic(3.0, 1.0, 1.0).unwrap();
        assert_relative_eq!(p, 1.0 / 16.0, epsilon = 1e-15);
    }

    #[test]
    fn test_logistic_exp_unit_shape() {
        // β = 1: αe^(αx)/e^(2αx) = αe^(−αx)
        let p: f64 = logistic_exp(0.9, 2.0, 1.0).unwrap();
        assert_relative_eq!(p, 2.0 * (-1.8_f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_log_normal_at_scale() {
        // x = α: 1/(αβ√(2π))
        let p: f64 = log_normal(2.0, 2.0, 0.5).unwrap();
        assert_relative_eq!(p, 1.0 / (2.0 * 0.5 * (2.0 * PI).sqrt()), epsilon = 1e-15);
    }
}

//! Densities on a bounded interval.

use autolik_core::traits::Scalar;

use super::error::{ensure_parameters, ensure_support, Result};

/// Beta density with shapes `beta` and `gam`.
///
/// # Mathematical Definition
/// f(x) = Γ(β+γ) x^(β−1) (1−x)^(γ−1) / (Γ(β) Γ(γ)), 0 < x < 1
///
/// # Errors
/// - `OutOfSupport` unless 0 < x < 1
/// - `InvalidParameter` unless β > 0 and γ > 0
///
/// # Examples
/// ```
/// use autolik_models::{pdf, DistributionError};
///
/// let p: f64 = pdf::beta(0.5, 2.0, 2.0).unwrap();
/// assert!((p - 1.5).abs() < 1e-12);
///
/// assert!(matches!(
///     pdf::beta::<f64>(1.5, 2.0, 3.0),
///     Err(DistributionError::OutOfSupport { .. })
/// ));
/// ```
pub fn beta<S: Scalar>(x: f64, beta: impl Into<S>, gam: impl Into<S>) -> Result<S> {
    let (beta, gam) = (beta.into(), gam.into());
    ensure_support(0.0 < x && x < 1.0, "beta", x, "0 < x < 1")?;
    ensure_parameters(
        beta.value() > 0.0 && gam.value() > 0.0,
        "beta",
        "β > 0, γ > 0",
    )?;

    let ln_norm = (beta + gam).ln_gamma() - beta.ln_gamma() - gam.ln_gamma();
    let ln_kernel = (beta - 1.0_f64) * x.ln() + (gam - 1.0_f64) * (1.0 - x).ln();
    Ok((ln_norm + ln_kernel).exp())
}

/// Minimax (Kumaraswamy) density with shapes `beta` and `gam`.
///
/// f(x) = βγ x^(β−1) (1−x^β)^(γ−1), 0 < x < 1
pub fn minimax<S: Scalar>(x: f64, beta: impl Into<S>, gam: impl Into<S>) -> Result<S> {
    let (beta, gam) = (beta.into(), gam.into());
    ensure_support(0.0 < x && x < 1.0, "minimax", x, "0 < x < 1")?;
    ensure_parameters(
        beta.value() > 0.0 && gam.value() > 0.0,
        "minimax",
        "β > 0, γ > 0",
    )?;

    let tail = beta.rpow(x).rsub(1.0).powd(gam - 1.0_f64);
    Ok(beta * gam * (beta - 1.0_f64).rpow(x) * tail)
}

/// Power density with upper bound `alpha` and shape `beta`.
///
/// f(x) = β x^(β−1) / α^β, 0 < x < α
pub fn power<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_support(0.0 < x && x < alpha.value(), "power", x, "0 < x < α")?;
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "power",
        "α > 0, β > 0",
    )?;

    Ok(beta * (beta - 1.0_f64).rpow(x) / alpha.powd(beta))
}

/// Standard power density, `power` with α = 1.
pub fn std_power<S: Scalar>(x: f64, beta: impl Into<S>) -> Result<S> {
    let beta = beta.into();
    ensure_support(0.0 < x && x < 1.0, "std_power", x, "0 < x < 1")?;
    ensure_parameters(beta.value() > 0.0, "std_power", "β > 0")?;

    Ok(beta * (beta - 1.0_f64).rpow(x))
}

//! Densities supported on the whole real line (or a caller-chosen interval).
//!
//! Includes normal, Cauchy, asymmetric Laplace, logistic, log-gamma,
//! Student's t and uniform, plus the parameter-free standard forms which
//! are only evaluated on `f64`.

use std::f64::consts::PI;

use autolik_core::traits::Scalar;

use super::error::{ensure_parameters, ensure_support, Result};

/// √(2π)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Normal density N(μ, σ²).
///
/// # Mathematical Definition
/// f(x) = e^(−(x−μ)²/(2σ²)) / (√(2π) σ)
///
/// # Errors
/// `InvalidParameter` unless σ > 0.
///
/// # Examples
/// ```
/// use autolik_core::types::Dual;
/// use autolik_models::pdf;
///
/// let plain: f64 = pdf::normal(0.0, 0.0, 1.0).unwrap();
/// assert!((plain - 0.398_942_280_401_432_7).abs() < 1e-15);
///
/// // Differentiate with respect to σ only
/// let d: Dual = pdf::normal(0.0, 0.0, Dual::variable(1.0)).unwrap();
/// assert_eq!(d.real, plain);
/// assert!((d.eps + plain).abs() < 1e-15); // ∂f/∂σ = −f at x = μ, σ = 1
/// ```
pub fn normal<S: Scalar>(x: f64, mu: impl Into<S>, sigma: impl Into<S>) -> Result<S> {
    let (mu, sigma) = (mu.into(), sigma.into());
    ensure_parameters(sigma.value() > 0.0, "normal", "σ > 0")?;

    let z = mu.rsub(x) / sigma;
    Ok((z * z * -0.5_f64).exp() / (sigma * SQRT_2PI))
}

/// Cauchy density with location `a` and scale `alpha`.
///
/// f(x) = 1 / (απ(1 + ((x−a)/α)²))
pub fn cauchy<S: Scalar>(x: f64, a: impl Into<S>, alpha: impl Into<S>) -> Result<S> {
    let (a, alpha) = (a.into(), alpha.into());
    ensure_parameters(alpha.value() > 0.0, "cauchy", "α > 0")?;

    let z = a.rsub(x) / alpha;
    Ok((alpha * PI * (z * z + 1.0_f64)).rdiv(1.0))
}

/// Asymmetric Laplace density with left scale `alpha1` and right scale `alpha2`.
///
/// f(x) = e^(x/α₁)/(α₁+α₂) for x < 0, e^(−x/α₂)/(α₁+α₂) otherwise.
/// Only the scale of the branch containing `x` enters the exponential.
pub fn laplace<S: Scalar>(x: f64, alpha1: impl Into<S>, alpha2: impl Into<S>) -> Result<S> {
    let (alpha1, alpha2) = (alpha1.into(), alpha2.into());
    ensure_parameters(
        alpha1.value() > 0.0 && alpha2.value() > 0.0,
        "laplace",
        "α₁ > 0, α₂ > 0",
    )?;

    let norm = (alpha1 + alpha2).rdiv(1.0);
    let tail = if x < 0.0 {
        alpha1.rdiv(x)
    } else {
        alpha2.rdiv(-x)
    };
    Ok(norm * tail.exp())
}

/// Logistic density with scale `lam` and shape `kappa`.
///
/// f(x) = λ^κ κ e^(κx) / (1 + (λeˣ)^κ)²
pub fn logistic<S: Scalar>(x: f64, lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa) = (lam.into(), kappa.into());
    ensure_parameters(
        lam.value() > 0.0 && kappa.value() > 0.0,
        "logistic",
        "λ > 0, κ > 0",
    )?;

    let denom = ((lam * x.exp()).powd(kappa) + 1.0_f64).powf(2.0);
    Ok(lam.powd(kappa) * kappa * (kappa * x).exp() / denom)
}

/// Log-gamma density with scale `alpha` and shape `beta`.
///
/// f(x) = e^(βx) e^(−eˣ/α) / (α^β Γ(β))
pub fn log_gamma<S: Scalar>(x: f64, alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta) = (alpha.into(), beta.into());
    ensure_parameters(
        alpha.value() > 0.0 && beta.value() > 0.0,
        "log_gamma",
        "α > 0, β > 0",
    )?;

    let ln_kernel = beta * x - alpha.rdiv(x.exp());
    Ok((ln_kernel - beta * alpha.ln() - beta.ln_gamma()).exp())
}

/// Student's t density with `n` degrees of freedom.
///
/// f(x) = Γ((n+1)/2) (1 + x²/n)^(−(n+1)/2) / (√(nπ) Γ(n/2))
pub fn student_t<S: Scalar>(x: f64, n: impl Into<S>) -> Result<S> {
    let n = n.into();
    ensure_parameters(n.value() > 0.0, "student_t", "n > 0")?;

    let half_n1 = (n + 1.0_f64) / 2.0_f64;
    let ln_norm = half_n1.ln_gamma() - (n / 2.0_f64).ln_gamma() - (n * PI).ln() * 0.5_f64;
    let ln_kernel = -half_n1 * (n.rdiv(x * x) + 1.0_f64).ln();
    Ok((ln_norm + ln_kernel).exp())
}

/// Uniform density on the open interval (a, b).
///
/// f(x) = 1 / (b − a)
///
/// # Errors
/// `OutOfSupport` unless a < x < b, which also rules out a ≥ b.
pub fn uniform<S: Scalar>(x: f64, a: impl Into<S>, b: impl Into<S>) -> Result<S> {
    let (a, b) = (a.into(), b.into());
    ensure_support(a.value() < x && x < b.value(), "uniform", x, "a < x < b")?;

    Ok((b - a).rdiv(1.0))
}

/// Standard Cauchy density 1/(π(1 + x²)).
pub fn std_cauchy(x: f64) -> f64 {
    1.0 / (PI * (1.0 + x * x))
}

/// Standard normal density e^(−x²/2)/√(2π).
pub fn std_normal(x: f64) -> f64 {
    (-x * x / 2.0).exp() / SQRT_2PI
}

/// Standard uniform density on (0, 1).
pub fn std_uniform(x: f64) -> Result<f64> {
    ensure_support(0.0 < x && x < 1.0, "std_uniform", x, "0 < x < 1")?;
    Ok(1.0)
}

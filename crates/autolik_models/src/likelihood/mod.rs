//! Log-likelihood functions.
//!
//! `ll::name(y, θ₁, …)` evaluates `pdf::name(x, θ₁, …)` at every
//! observation, takes the logarithm and sums. Parameters follow the same
//! `impl Into<S>` convention as the densities, so the log-likelihood is
//! differentiable in any subset of them.
//!
//! # Errors
//!
//! - `EmptySample` when `y` is empty
//! - the first density error encountered, in sample order
//!
//! # Examples
//!
//! ```
//! use autolik_core::types::Dual;
//! use autolik_models::ll;
//!
//! let y = [0.8, 1.1, 1.9];
//!
//! // ∂/∂μ Σ ln N(yᵢ; μ, σ²) = Σ(yᵢ − μ)/σ²
//! let d: Dual = ll::normal(&y, Dual::variable(1.0), 0.5).unwrap();
//! assert!((d.eps - 0.8 / 0.25).abs() < 1e-12);
//! ```

use autolik_core::traits::Scalar;

use crate::distributions as pdf;
use crate::distributions::{DistributionError, Result};

/// Sums `ln density(x)` over the sample.
fn sum_log_density<S, F>(distribution: &'static str, y: &[f64], density: F) -> Result<S>
where
    S: Scalar,
    F: Fn(f64) -> Result<S>,
{
    if y.is_empty() {
        return Err(DistributionError::EmptySample { distribution });
    }

    y.iter()
        .try_fold(S::from_f64(0.0), |acc, &x| Ok(acc + density(x)?.ln()))
}

/// Log-likelihood of `y` under [`pdf::beta`].
pub fn beta<S: Scalar>(y: &[f64], beta: impl Into<S>, gam: impl Into<S>) -> Result<S> {
    let (beta, gam): (S, S) = (beta.into(), gam.into());
    sum_log_density("beta", y, |x| pdf::beta::<S>(x, beta, gam))
}

/// Log-likelihood of `y` under [`pdf::cauchy`].
pub fn cauchy<S: Scalar>(y: &[f64], a: impl Into<S>, alpha: impl Into<S>) -> Result<S> {
    let (a, alpha): (S, S) = (a.into(), alpha.into());
    sum_log_density("cauchy", y, |x| pdf::cauchy::<S>(x, a, alpha))
}

/// Log-likelihood of `y` under [`pdf::chi`].
pub fn chi<S: Scalar>(y: &[f64], n: impl Into<S>) -> Result<S> {
    let n: S = n.into();
    sum_log_density("chi", y, |x| pdf::chi::<S>(x, n))
}

/// Log-likelihood of `y` under [`pdf::chisqr`].
pub fn chisqr<S: Scalar>(y: &[f64], n: impl Into<S>) -> Result<S> {
    let n: S = n.into();
    sum_log_density("chisqr", y, |x| pdf::chisqr::<S>(x, n))
}

/// Log-likelihood of `y` under [`pdf::exponential`].
pub fn exponential<S: Scalar>(y: &[f64], lam: impl Into<S>) -> Result<S> {
    let lam: S = lam.into();
    sum_log_density("exponential", y, |x| pdf::exponential::<S>(x, lam))
}

/// Log-likelihood of `y` under [`pdf::gamma`].
pub fn gamma<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("gamma", y, |x| pdf::gamma::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::ggamma`].
pub fn ggamma<S: Scalar>(
    y: &[f64],
    alpha: impl Into<S>,
    beta: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (alpha, beta, gam): (S, S, S) = (alpha.into(), beta.into(), gam.into());
    sum_log_density("ggamma", y, |x| pdf::ggamma::<S>(x, alpha, beta, gam))
}

/// Log-likelihood of `y` under [`pdf::gpareto`].
pub fn gpareto<S: Scalar>(
    y: &[f64],
    delta: impl Into<S>,
    kappa: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (delta, kappa, gam): (S, S, S) = (delta.into(), kappa.into(), gam.into());
    sum_log_density("gpareto", y, |x| pdf::gpareto::<S>(x, delta, kappa, gam))
}

/// Log-likelihood of `y` under [`pdf::inv_gaussian`].
pub fn inv_gaussian<S: Scalar>(y: &[f64], lam: impl Into<S>, mu: impl Into<S>) -> Result<S> {
    let (lam, mu): (S, S) = (lam.into(), mu.into());
    sum_log_density("inv_gaussian", y, |x| pdf::inv_gaussian::<S>(x, lam, mu))
}

/// Log-likelihood of `y` under [`pdf::inv_gamma`].
pub fn inv_gamma<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("inv_gamma", y, |x| pdf::inv_gamma::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::laplace`].
pub fn laplace<S: Scalar>(y: &[f64], alpha1: impl Into<S>, alpha2: impl Into<S>) -> Result<S> {
    let (alpha1, alpha2): (S, S) = (alpha1.into(), alpha2.into());
    sum_log_density("laplace", y, |x| pdf::laplace::<S>(x, alpha1, alpha2))
}

/// Log-likelihood of `y` under [`pdf::log_gamma`].
pub fn log_gamma<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("log_gamma", y, |x| pdf::log_gamma::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::log_logistic`].
pub fn log_logistic<S: Scalar>(y: &[f64], lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa): (S, S) = (lam.into(), kappa.into());
    sum_log_density("log_logistic", y, |x| pdf::log_logistic::<S>(x, lam, kappa))
}

/// Log-likelihood of `y` under [`pdf::log_normal`].
pub fn log_normal<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("log_normal", y, |x| pdf::log_normal::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::logistic`].
pub fn logistic<S: Scalar>(y: &[f64], lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa): (S, S) = (lam.into(), kappa.into());
    sum_log_density("logistic", y, |x| pdf::logistic::<S>(x, lam, kappa))
}

/// Log-likelihood of `y` under [`pdf::logistic_exp`].
pub fn logistic_exp<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("logistic_exp", y, |x| pdf::logistic_exp::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::lomax`].
pub fn lomax<S: Scalar>(y: &[f64], lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa): (S, S) = (lam.into(), kappa.into());
    sum_log_density("lomax", y, |x| pdf::lomax::<S>(x, lam, kappa))
}

/// Log-likelihood of `y` under [`pdf::makeham`].
pub fn makeham<S: Scalar>(
    y: &[f64],
    delta: impl Into<S>,
    kappa: impl Into<S>,
    gam: impl Into<S>,
) -> Result<S> {
    let (delta, kappa, gam): (S, S, S) = (delta.into(), kappa.into(), gam.into());
    sum_log_density("makeham", y, |x| pdf::makeham::<S>(x, delta, kappa, gam))
}

/// Log-likelihood of `y` under [`pdf::minimax`].
pub fn minimax<S: Scalar>(y: &[f64], beta: impl Into<S>, gam: impl Into<S>) -> Result<S> {
    let (beta, gam): (S, S) = (beta.into(), gam.into());
    sum_log_density("minimax", y, |x| pdf::minimax::<S>(x, beta, gam))
}

/// Log-likelihood of `y` under [`pdf::muth`].
pub fn muth<S: Scalar>(y: &[f64], kappa: impl Into<S>) -> Result<S> {
    let kappa: S = kappa.into();
    sum_log_density("muth", y, |x| pdf::muth::<S>(x, kappa))
}

/// Log-likelihood of `y` under [`pdf::normal`].
///
/// # Mathematical Definition
/// ℓ(μ, σ) = −n ln(σ√(2π)) − Σ(yᵢ − μ)²/(2σ²)
///
/// with ∂ℓ/∂μ = Σ(yᵢ − μ)/σ² and ∂ℓ/∂σ = −n/σ + Σ(yᵢ − μ)²/σ³.
pub fn normal<S: Scalar>(y: &[f64], mu: impl Into<S>, sigma: impl Into<S>) -> Result<S> {
    let (mu, sigma): (S, S) = (mu.into(), sigma.into());
    sum_log_density("normal", y, |x| pdf::normal::<S>(x, mu, sigma))
}

/// Log-likelihood of `y` under [`pdf::pareto`].
pub fn pareto<S: Scalar>(y: &[f64], lam: impl Into<S>, kappa: impl Into<S>) -> Result<S> {
    let (lam, kappa): (S, S) = (lam.into(), kappa.into());
    sum_log_density("pareto", y, |x| pdf::pareto::<S>(x, lam, kappa))
}

/// Log-likelihood of `y` under [`pdf::power`].
pub fn power<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("power", y, |x| pdf::power::<S>(x, alpha, beta))
}

/// Log-likelihood of `y` under [`pdf::std_power`].
pub fn std_power<S: Scalar>(y: &[f64], beta: impl Into<S>) -> Result<S> {
    let beta: S = beta.into();
    sum_log_density("std_power", y, |x| pdf::std_power::<S>(x, beta))
}

/// Log-likelihood of `y` under [`pdf::rayleigh`].
pub fn rayleigh<S: Scalar>(y: &[f64], alpha: impl Into<S>) -> Result<S> {
    let alpha: S = alpha.into();
    sum_log_density("rayleigh", y, |x| pdf::rayleigh::<S>(x, alpha))
}

/// Log-likelihood of `y` under [`pdf::std_wald`].
pub fn std_wald<S: Scalar>(y: &[f64], lam: impl Into<S>) -> Result<S> {
    let lam: S = lam.into();
    sum_log_density("std_wald", y, |x| pdf::std_wald::<S>(x, lam))
}

/// Log-likelihood of `y` under [`pdf::student_t`].
pub fn student_t<S: Scalar>(y: &[f64], n: impl Into<S>) -> Result<S> {
    let n: S = n.into();
    sum_log_density("student_t", y, |x| pdf::student_t::<S>(x, n))
}

/// Log-likelihood of `y` under [`pdf::uniform`].
pub fn uniform<S: Scalar>(y: &[f64], a: impl Into<S>, b: impl Into<S>) -> Result<S> {
    let (a, b): (S, S) = (a.into(), b.into());
    sum_log_density("uniform", y, |x| pdf::uniform::<S>(x, a, b))
}

/// Log-likelihood of `y` under [`pdf::weibull`].
pub fn weibull<S: Scalar>(y: &[f64], alpha: impl Into<S>, beta: impl Into<S>) -> Result<S> {
    let (alpha, beta): (S, S) = (alpha.into(), beta.into());
    sum_log_density("weibull", y, |x| pdf::weibull::<S>(x, alpha, beta))
}

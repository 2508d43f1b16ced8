//! Special functions for real arguments.
//!
//! Thin wrappers over `statrs::function::gamma` so the rest of the
//! workspace depends on one entry point. The dual-number versions live on
//! [`Dual`](crate::types::Dual) and call into these.

use statrs::function::gamma as sf;

/// Gamma function Γ(x).
///
/// # Examples
/// ```
/// use autolik_core::math::special::gamma;
///
/// assert!((gamma(5.0) - 24.0).abs() < 1e-9);
/// assert!((gamma(0.5) - std::f64::consts::PI.sqrt()).abs() < 1e-10);
/// ```
#[inline]
pub fn gamma(x: f64) -> f64 {
    sf::gamma(x)
}

/// Natural logarithm of the gamma function, ln Γ(x).
#[inline]
pub fn ln_gamma(x: f64) -> f64 {
    sf::ln_gamma(x)
}

/// Digamma function ψ₀(x) = Γ'(x)/Γ(x).
#[inline]
pub fn digamma(x: f64) -> f64 {
    sf::digamma(x)
}

/// Beta function B(a, b) = Γ(a)Γ(b)/Γ(a+b), computed in log space.
#[inline]
pub fn beta(a: f64, b: f64) -> f64 {
    (ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)).exp()
}

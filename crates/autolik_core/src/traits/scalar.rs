//! [`Scalar`]: the numeric interface shared by `f64` and [`Dual`].
//!
//! Densities, likelihoods and user models are written once against
//! `Scalar` and instantiated either with `f64` (plain evaluation) or with
//! `Dual` (forward-mode differentiation). Because the operand types are
//! fixed at monomorphisation, there is no runtime type inspection and an
//! unsupported operand combination is a compile error.
//!
//! # Reflected operations
//!
//! Trait bounds on `f64 op Self` cannot be expressed as supertraits, so the
//! non-commutative reflected forms are exposed as methods:
//! [`Scalar::rsub`] (`k - self`), [`Scalar::rdiv`] (`k / self`) and
//! [`Scalar::rpow`] (`k ^ self`).

use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::special;
use crate::types::Dual;

/// A scalar type suitable for likelihood computation.
///
/// # Examples
/// ```
/// use autolik_core::traits::Scalar;
/// use autolik_core::types::Dual;
///
/// fn discount<S: Scalar>(rate: S, time: f64) -> S {
///     (rate * -time).exp()
/// }
///
/// let plain: f64 = discount(0.05, 1.0);
/// assert!((plain - 0.951229).abs() < 1e-5);
///
/// let dual = discount(Dual::variable(0.05), 1.0);
/// assert_eq!(dual.real, plain);
/// assert!((dual.eps + plain).abs() < 1e-12); // d/dr = -t·e^(-rt)
/// ```
pub trait Scalar:
    Copy
    + Debug
    + Send
    + Sync
    + From<f64>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Add<f64, Output = Self>
    + Sub<f64, Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + PartialOrd
    + PartialOrd<f64>
    + Sum
{
    /// Wraps an `f64` constant (zero tangent for dual types).
    fn from_f64(v: f64) -> Self;

    /// Extracts the primal value.
    fn value(&self) -> f64;

    /// Sine.
    fn sin(self) -> Self;

    /// Cosine.
    fn cos(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Gamma function.
    fn gamma(self) -> Self;

    /// Log-gamma function, ln Γ. Prefer it to `gamma().ln()` for
    /// normalising constants: Γ overflows past ~171.
    fn ln_gamma(self) -> Self;

    /// `self^k` for a constant exponent.
    fn powf(self, k: f64) -> Self;

    /// `self^e` where both operands may carry tangents.
    fn powd(self, e: Self) -> Self;

    /// `base^self` for a constant base.
    fn rpow(self, base: f64) -> Self;

    /// `k - self`.
    fn rsub(self, k: f64) -> Self;

    /// `k / self`.
    fn rdiv(self, k: f64) -> Self;
}

// --- f64 implementation ---

impl Scalar for f64 {
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn sin(self) -> Self {
        f64::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        f64::cos(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn gamma(self) -> Self {
        special::gamma(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        special::ln_gamma(self)
    }

    #[inline]
    fn powf(self, k: f64) -> Self {
        f64::powf(self, k)
    }

    #[inline]
    fn powd(self, e: Self) -> Self {
        f64::powf(self, e)
    }

    #[inline]
    fn rpow(self, base: f64) -> Self {
        f64::powf(base, self)
    }

    #[inline]
    fn rsub(self, k: f64) -> Self {
        k - self
    }

    #[inline]
    fn rdiv(self, k: f64) -> Self {
        k / self
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.real
    }

    #[inline]
    fn sin(self) -> Self {
        Dual::sin(self)
    }

    #[inline]
    fn cos(self) -> Self {
        Dual::cos(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn gamma(self) -> Self {
        Dual::gamma(self)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        Dual::ln_gamma(self)
    }

    #[inline]
    fn powf(self, k: f64) -> Self {
        Dual::powf(self, k)
    }

    #[inline]
    fn powd(self, e: Self) -> Self {
        Dual::powd(self, e)
    }

    #[inline]
    fn rpow(self, base: f64) -> Self {
        Dual::rpow(self, base)
    }

    #[inline]
    fn rsub(self, k: f64) -> Self {
        k - self
    }

    #[inline]
    fn rdiv(self, k: f64) -> Self {
        k / self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// -x^3 - 2x^y + e^x + e^(y^2)
    fn surface<S: Scalar>(x: S, y: S) -> S {
        -x.powf(3.0) - x.powd(y) * 2.0_f64 + x.exp() + y.powf(2.0).exp()
    }

    #[test]
    fn test_generic_code_works_for_both() {
        fn quadratic<S: Scalar>(x: S) -> S {
            x * x + x * 3.0_f64 + 2.0_f64
        }

        let val: f64 = quadratic(3.0);
        assert_relative_eq!(val, 20.0, epsilon = 1e-12);

        // d/dx [x^2 + 3x + 2] = 2x + 3
        let d = quadratic(Dual::variable(3.0));
        assert_relative_eq!(d.real, 20.0, epsilon = 1e-12);
        assert_relative_eq!(d.eps, 9.0, epsilon = 1e-12);
    }

    #[test]
    fn test_surface_partials_at_unit_point() {
        let e = std::f64::consts::E;

        let plain: f64 = surface(1.0, 1.0);
        let dx = surface(Dual::variable(1.0), Dual::constant(1.0));
        let dy = surface(Dual::constant(1.0), Dual::variable(1.0));

        assert_relative_eq!(dx.real, plain, epsilon = 1e-12);
        assert_relative_eq!(dy.real, plain, epsilon = 1e-12);
        assert_relative_eq!(dx.eps, e - 5.0, epsilon = 1e-12);
        assert_relative_eq!(dy.eps, 2.0 * e, epsilon = 1e-12);
    }

    #[test]
    fn test_reflected_methods() {
        let a = Dual::new(4.0, 1.0);

        let s = a.rsub(10.0);
        assert_eq!(s.real, 6.0);
        assert_eq!(s.eps, -1.0);

        let d = a.rdiv(8.0);
        assert_relative_eq!(d.real, 2.0, epsilon = 1e-12);
        assert_relative_eq!(d.eps, -0.5, epsilon = 1e-12);

        let p = a.rpow(2.0);
        assert_relative_eq!(p.real, 16.0, epsilon = 1e-12);
        assert_relative_eq!(p.eps, 16.0 * 2.0_f64.ln(), epsilon = 1e-12);

        assert_eq!(4.0_f64.rsub(10.0), 6.0);
        assert_eq!(4.0_f64.rdiv(8.0), 2.0);
        assert_eq!(4.0_f64.rpow(2.0), 16.0);
    }

    #[test]
    fn test_gamma_matches_between_types() {
        let plain = Scalar::gamma(3.5_f64);
        let dual = Scalar::gamma(Dual::constant(3.5));
        assert_relative_eq!(plain, dual.real, epsilon = 1e-12);
        assert_eq!(dual.eps, 0.0);

        let plain = Scalar::ln_gamma(250.0_f64);
        let dual = Scalar::ln_gamma(Dual::variable(250.0));
        assert_eq!(plain, dual.real);
        assert_relative_eq!(dual.eps, special::digamma(250.0), epsilon = 1e-15);
    }

    #[test]
    fn test_value_and_from_f64() {
        assert_eq!(<f64 as Scalar>::from_f64(2.5).value(), 2.5);
        let d = <Dual as Scalar>::from_f64(2.5);
        assert_eq!(d.value(), 2.5);
        assert_eq!(d.eps, 0.0);
    }
}

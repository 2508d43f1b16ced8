//! Forward-mode dual numbers.
//!
//! A [`Dual`] pairs a primal value with a tangent. Every operation returns a
//! new value whose tangent is the chain-rule derivative of the primal, so
//! evaluating an expression on `Dual` inputs yields the function value and
//! one directional derivative in a single pass.
//!
//! ## Usage
//!
//! ```
//! use autolik_core::types::Dual;
//!
//! let x = Dual::variable(2.0); // dx/dx = 1
//! let y = x * x + x.sin();
//!
//! assert_eq!(y.real, 4.0 + 2.0_f64.sin());
//! assert_eq!(y.eps, 4.0 + 2.0_f64.cos());
//! ```
//!
//! ## Comparison semantics
//!
//! `==`, `<`, `<=`, `>`, `>=` look at `real` only. Two duals with the same
//! primal value but different tangents compare equal. Domain checks such as
//! `0 < x < 1` rely on this.

use std::cmp::Ordering;
use std::fmt;

use crate::math::special;

/// First-order dual number `real + eps·ε` with `ε² = 0`.
///
/// # Fields
/// - `real`: Primal (function) value
/// - `eps`: Tangent, the derivative accumulated along the seeded direction
///
/// # Examples
/// ```
/// use autolik_core::types::Dual;
///
/// let c = Dual::from(3.0);
/// assert_eq!(c.eps, 0.0);
///
/// let v = Dual::new(3.0, 1.0);
/// assert_eq!(v, c); // tangents are ignored by comparisons
/// ```
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dual {
    /// Primal value.
    pub real: f64,
    /// Tangent (derivative) value.
    pub eps: f64,
}

impl Dual {
    /// Creates a dual number from explicit primal and tangent parts.
    #[inline]
    pub const fn new(real: f64, eps: f64) -> Self {
        Self { real, eps }
    }

    /// Creates a constant: zero tangent.
    #[inline]
    pub const fn constant(real: f64) -> Self {
        Self { real, eps: 0.0 }
    }

    /// Creates an independent variable: unit tangent.
    #[inline]
    pub const fn variable(real: f64) -> Self {
        Self { real, eps: 1.0 }
    }

    /// Sine.
    #[inline]
    pub fn sin(self) -> Self {
        Self::new(self.real.sin(), self.eps * self.real.cos())
    }

    /// Cosine.
    #[inline]
    pub fn cos(self) -> Self {
        Self::new(self.real.cos(), -self.eps * self.real.sin())
    }

    /// Square root. Negative `real` yields NaN.
    #[inline]
    pub fn sqrt(self) -> Self {
        let root = self.real.sqrt();
        Self::new(root, self.eps / (2.0 * root))
    }

    /// Exponential.
    #[inline]
    pub fn exp(self) -> Self {
        let e = self.real.exp();
        Self::new(e, self.eps * e)
    }

    /// Natural logarithm. Non-positive `real` yields NaN or `-inf`.
    #[inline]
    pub fn ln(self) -> Self {
        Self::new(self.real.ln(), self.eps / self.real)
    }

    /// Gamma function, with `d/dx Γ(x) = Γ(x)·ψ₀(x)`.
    ///
    /// # Examples
    /// ```
    /// use autolik_core::types::Dual;
    ///
    /// // Γ(1) = 1, Γ'(1) = -γ (Euler-Mascheroni)
    /// let g = Dual::variable(1.0).gamma();
    /// assert!((g.real - 1.0).abs() < 1e-12);
    /// assert!((g.eps + 0.577_215_664_901_532_9).abs() < 1e-9);
    /// ```
    pub fn gamma(self) -> Self {
        let g = special::gamma(self.real);
        Self::new(g, self.eps * g * special::digamma(self.real))
    }

    /// Log-gamma function, with `d/dx ln Γ(x) = ψ₀(x)`.
    ///
    /// Stays finite where [`Dual::gamma`] overflows (x beyond ~171), so
    /// normalising constants are built from it.
    ///
    /// # Examples
    /// ```
    /// use autolik_core::types::Dual;
    ///
    /// // ln Γ(200) ≈ 857.93, ψ₀(200) ≈ 5.2958
    /// let g = Dual::variable(200.0).ln_gamma();
    /// assert!((g.real - 857.933_669_825_857_5).abs() < 1e-9);
    /// assert!((g.eps - 5.295_815_283_219_91).abs() < 1e-9);
    /// ```
    pub fn ln_gamma(self) -> Self {
        Self::new(
            special::ln_gamma(self.real),
            self.eps * special::digamma(self.real),
        )
    }

    /// Power with a constant exponent: `self^k`.
    #[inline]
    pub fn powf(self, k: f64) -> Self {
        Self::new(
            self.real.powf(k),
            k * self.real.powf(k - 1.0) * self.eps,
        )
    }

    /// Power with a dual exponent: `self^e`.
    ///
    /// The tangent is `a^b·(b.eps·ln a + b/a·a.eps)`. A term whose tangent
    /// factor is zero is skipped, so a constant exponent on a negative base
    /// does not pick up the NaN from `ln a`.
    pub fn powd(self, e: Dual) -> Self {
        let value = self.real.powf(e.real);
        let exponent_term = if e.eps == 0.0 {
            0.0
        } else {
            e.eps * self.real.ln()
        };
        let base_term = if self.eps == 0.0 {
            0.0
        } else {
            e.real / self.real * self.eps
        };
        Self::new(value, value * (exponent_term + base_term))
    }

    /// Power with a constant base: `base^self`.
    ///
    /// `base` is treated as a true constant: no tangent flows from it. When
    /// the base is itself an expression under differentiation, promote it
    /// to a `Dual` and use [`Dual::powd`] instead.
    ///
    /// # Examples
    /// ```
    /// use autolik_core::types::Dual;
    ///
    /// let p = Dual::variable(3.0).rpow(2.0);
    /// assert_eq!(p.real, 8.0);
    /// assert!((p.eps - 8.0 * 2.0_f64.ln()).abs() < 1e-12);
    ///
    /// // Zero tangent in, zero tangent out
    /// assert_eq!(Dual::constant(3.0).rpow(2.0).eps, 0.0);
    /// ```
    pub fn rpow(self, base: f64) -> Self {
        let value = base.powf(self.real);
        let eps = if self.eps == 0.0 {
            0.0
        } else {
            value * base.ln() * self.eps
        };
        Self::new(value, eps)
    }

    /// Beta function `B(a, b) = Γ(a)Γ(b)/Γ(a+b)`.
    ///
    /// ∂B/∂a = B·(ψ₀(a) − ψ₀(a+b)), and symmetrically in `b`.
    pub fn beta(a: Dual, b: Dual) -> Self {
        let value = special::beta(a.real, b.real);
        let psi_ab = special::digamma(a.real + b.real);
        let eps = value
            * (a.eps * (special::digamma(a.real) - psi_ab)
                + b.eps * (special::digamma(b.real) - psi_ab));
        Self::new(value, eps)
    }
}

impl From<f64> for Dual {
    #[inline]
    fn from(real: f64) -> Self {
        Self::constant(real)
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.eps < 0.0 {
            write!(f, "{} - {}ε", self.real, -self.eps)
        } else {
            write!(f, "{} + {}ε", self.real, self.eps)
        }
    }
}

impl PartialEq for Dual {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real
    }
}

impl PartialOrd for Dual {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.real.partial_cmp(&other.real)
    }
}

impl PartialEq<f64> for Dual {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.real == *other
    }
}

impl PartialOrd<f64> for Dual {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.real.partial_cmp(other)
    }
}

impl PartialEq<Dual> for f64 {
    #[inline]
    fn eq(&self, other: &Dual) -> bool {
        *self == other.real
    }
}

impl PartialOrd<Dual> for f64 {
    #[inline]
    fn partial_cmp(&self, other: &Dual) -> Option<Ordering> {
        self.partial_cmp(&other.real)
    }
}

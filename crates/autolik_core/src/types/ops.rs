//! Operator overloads for [`Dual`].
//!
//! Mixed operands follow one rule: a plain `f64` behaves as a zero-tangent
//! dual. For the commutative operators (`+`, `*`) the `f64 op Dual` form
//! simply swaps operands. Subtraction, division and power are not
//! commutative, so `f64 - Dual`, `f64 / Dual` and `f64.pow(Dual)` each have
//! their own implementation with the operands in reflected position.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{One, Pow, Zero};

use super::dual::Dual;

impl Neg for Dual {
    type Output = Dual;

    #[inline]
    fn neg(self) -> Dual {
        Dual::new(-self.real, -self.eps)
    }
}

// ---------------------------------------------------------------------------
// Addition (commutative)
// ---------------------------------------------------------------------------

impl Add for Dual {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual::new(self.real + rhs.real, self.eps + rhs.eps)
    }
}

impl Add<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: f64) -> Dual {
        Dual::new(self.real + rhs, self.eps)
    }
}

impl Add<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        rhs + self
    }
}

// ---------------------------------------------------------------------------
// Subtraction (reflected form is distinct)
// ---------------------------------------------------------------------------

impl Sub for Dual {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual::new(self.real - rhs.real, self.eps - rhs.eps)
    }
}

impl Sub<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: f64) -> Dual {
        Dual::new(self.real - rhs, self.eps)
    }
}

impl Sub<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual::new(self - rhs.real, -rhs.eps)
    }
}

// ---------------------------------------------------------------------------
// Multiplication (commutative)
// ---------------------------------------------------------------------------

impl Mul for Dual {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        Dual::new(
            self.real * rhs.real,
            self.real * rhs.eps + rhs.real * self.eps,
        )
    }
}

impl Mul<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: f64) -> Dual {
        Dual::new(self.real * rhs, self.eps * rhs)
    }
}

impl Mul<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn mul(self, rhs: Dual) -> Dual {
        rhs * self
    }
}

// ---------------------------------------------------------------------------
// Division (reflected form is distinct)
// ---------------------------------------------------------------------------

impl Div for Dual {
    type Output = Dual;

    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual::new(
            self.real / rhs.real,
            (self.eps * rhs.real - self.real * rhs.eps) / (rhs.real * rhs.real),
        )
    }
}

impl Div<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn div(self, rhs: f64) -> Dual {
        Dual::new(self.real / rhs, self.eps / rhs)
    }
}

impl Div<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn div(self, rhs: Dual) -> Dual {
        Dual::new(self / rhs.real, -self * rhs.eps / (rhs.real * rhs.real))
    }
}

// ---------------------------------------------------------------------------
// Power (reflected form is distinct)
// ---------------------------------------------------------------------------

impl Pow<Dual> for Dual {
    type Output = Dual;

    #[inline]
    fn pow(self, rhs: Dual) -> Dual {
        self.powd(rhs)
    }
}

impl Pow<f64> for Dual {
    type Output = Dual;

    #[inline]
    fn pow(self, rhs: f64) -> Dual {
        self.powf(rhs)
    }
}

impl Pow<Dual> for f64 {
    type Output = Dual;

    #[inline]
    fn pow(self, rhs: Dual) -> Dual {
        rhs.rpow(self)
    }
}

// ---------------------------------------------------------------------------
// num-traits identities and iterator sums
// ---------------------------------------------------------------------------

impl Zero for Dual {
    #[inline]
    fn zero() -> Self {
        Dual::constant(0.0)
    }

    /// Tests the primal only, consistent with `PartialEq`.
    #[inline]
    fn is_zero(&self) -> bool {
        self.real == 0.0
    }
}

impl One for Dual {
    #[inline]
    fn one() -> Self {
        Dual::constant(1.0)
    }
}

impl Sum for Dual {
    fn sum<I: Iterator<Item = Dual>>(iter: I) -> Dual {
        iter.fold(Dual::zero(), |acc, d| acc + d)
    }
}

impl<'a> Sum<&'a Dual> for Dual {
    fn sum<I: Iterator<Item = &'a Dual>>(iter: I) -> Dual {
        iter.fold(Dual::zero(), |acc, d| acc + *d)
    }
}

//! Univariate probability density functions.
//!
//! Every parameterised density has the shape
//!
//! ```text
//! fn name<S: Scalar>(x: f64, θ₁: impl Into<S>, …) -> Result<S>
//! ```
//!
//! `S` is `f64` for plain evaluation or `Dual` for differentiation. Each
//! parameter converts into `S` independently, so any subset of parameters
//! may carry tangents while the rest are plain constants. Passing a `Dual`
//! where `S = f64` does not compile:
//!
//! ```compile_fail
//! use autolik_core::types::Dual;
//! use autolik_models::pdf;
//!
//! let _: f64 = pdf::normal(0.0, Dual::variable(0.0), 1.0).unwrap();
//! ```
//!
//! The same call with a `Dual` result is fine:
//!
//! ```
//! use autolik_core::types::Dual;
//! use autolik_models::pdf;
//!
//! let d: Dual = pdf::normal(0.0, Dual::variable(0.0), 1.0).unwrap();
//! assert_eq!(d.eps, 0.0); // ∂f/∂μ vanishes at x = μ
//! ```
//!
//! ## Design Principles
//!
//! - **Validate, never clamp**: support and parameter constraints are
//!   checked on primal values before evaluation and reported as
//!   [`DistributionError`]
//! - **Dual-aware throughout**: every sub-expression goes through
//!   [`Scalar`](autolik_core::traits::Scalar), so tangents flow through
//!   normalisers as well as kernels
//! - **Standard forms** (`std_cauchy`, `std_normal`, `std_uniform`) have no
//!   parameters and are evaluated on `f64` only

pub mod bounded;
pub mod error;
pub mod gamma_family;
pub mod lifetime;
pub mod real_line;
pub mod wald;

// Re-export every density at module level
pub use bounded::{beta, minimax, power, std_power};
pub use error::{DistributionError, Result};
pub use gamma_family::{chi, chisqr, gamma, ggamma, inv_gamma};
pub use lifetime::{
    exponential, gpareto, log_logistic, log_normal, logistic_exp, lomax, makeham, muth, pareto,
    rayleigh, weibull,
};
pub use real_line::{
    cauchy, laplace, log_gamma, logistic, normal, std_cauchy, std_normal, std_uniform, student_t,
    uniform,
};
pub use wald::{inv_gaussian, std_wald};

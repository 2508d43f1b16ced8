//! # autolik_diff: Gradient Extraction over Dual Numbers
//!
//! ## Layer 2 (Engine) Role
//!
//! autolik_diff turns a model written against
//! [`Scalar`](autolik_core::traits::Scalar) into gradients:
//! - Primal evaluation and per-parameter tangent seeding (`gradient`)
//! - Batched evaluation with per-point failure isolation
//! - A rayon-backed [`GradientEngine`] configured by [`GradientConfig`]
//! - Finite-difference cross-checks (`verify`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use autolik_core::traits::Scalar;
//! use autolik_core::types::Dual;
//! use autolik_diff::{gradient, value};
//!
//! // f(x, y) = -x^3 - 2x^y + e^x + e^(y^2)
//! fn f<S: Scalar>(p: &[S]) -> S {
//!     let (x, y) = (p[0], p[1]);
//!     -x.powf(3.0) - x.powd(y) * 2.0_f64 + x.exp() + y.powf(2.0).exp()
//! }
//!
//! let e = std::f64::consts::E;
//! let g = gradient(f::<Dual>, &[1.0, 1.0]);
//! assert!((g[0] - (e - 5.0)).abs() < 1e-12);
//! assert!((g[1] - 2.0 * e).abs() < 1e-12);
//!
//! assert!((value(f::<Dual>, &[1.0, 1.0]) - (2.0 * e - 3.0)).abs() < 1e-12);
//! ```
//!
//! ## Logging
//!
//! Evaluation emits `tracing` events (`debug` per gradient, `trace` per
//! partial, `warn` per failed batch point). No subscriber is installed.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): rayon execution in [`GradientEngine`]
//! - `serde`: Serialisation for [`GradientConfig`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod gradient;
pub mod verify;

pub use config::GradientConfig;
pub use gradient::{
    grad, gradient, gradient_batch, primal, try_gradient, try_gradient_batch, try_value, value,
    GradientEngine,
};

//! # autolik_models (L2: Statistical Models)
//!
//! Univariate densities and log-likelihoods for maximum-likelihood work.
//!
//! This crate provides:
//! - Probability density functions (`distributions`, also available as `pdf`)
//! - Log-likelihood aggregation over samples (`likelihood`, also `ll`)
//! - `DistributionError` for support and parameter violations
//!
//! ## Design Principles
//!
//! - **Generic over `S: Scalar`**: one formula serves plain evaluation
//!   (`f64`) and forward-mode differentiation (`Dual`)
//! - **Per-parameter promotion**: each parameter is `impl Into<S>`
//! - **Explicit preconditions**: violations are returned as errors, never
//!   clamped
//!
//! ## Usage Examples
//!
//! ```rust
//! use autolik_diff::try_gradient;
//! use autolik_models::{ll, DistributionError};
//!
//! let y = [1.2, 0.7, 2.9, 1.8];
//!
//! // Gradient of the gamma log-likelihood in (scale α, shape β)
//! let g = try_gradient(|p| ll::gamma(&y, p[0], p[1]), &[1.0, 1.5])?;
//!
//! // ∂/∂α = Σyᵢ/α² − nβ/α
//! assert!((g[0] - (6.6 - 4.0 * 1.5)).abs() < 1e-12);
//! # Ok::<(), DistributionError>(())
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod likelihood;

pub use distributions as pdf;
pub use distributions::{DistributionError, Result};
pub use likelihood as ll;

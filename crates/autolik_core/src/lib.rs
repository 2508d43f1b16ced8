//! # autolik_core: Numeric Foundation for Likelihood Differentiation
//!
//! ## Layer 1 (Foundation) Role
//!
//! autolik_core is the bottom layer of the workspace, providing:
//! - Forward-mode dual numbers (`types::dual`)
//! - The `Scalar` abstraction over `f64` and `Dual` (`traits::scalar`)
//! - Special functions: gamma, log-gamma, digamma, beta (`math::special`)
//!
//! ## Minimal Dependency Principle
//!
//! Layer 1 has no dependencies on other autolik_* crates:
//! - num-traits: `Zero`, `One` and `Pow` for `Dual`
//! - statrs: gamma and digamma for real arguments
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use autolik_core::traits::Scalar;
//! use autolik_core::types::Dual;
//!
//! // Written once, evaluated as f64 or Dual
//! fn model<S: Scalar>(x: S) -> S {
//!     x * x + x.exp()
//! }
//!
//! let value: f64 = model(1.0);
//! let dual = model(Dual::variable(1.0));
//!
//! assert_eq!(dual.real, value);
//! assert!((dual.eps - (2.0 + 1.0_f64.exp())).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Dual`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;

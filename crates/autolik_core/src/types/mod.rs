//! Core numeric types.
//!
//! This module provides:
//! - `dual`: The forward-mode `Dual` number and its elementary functions
//! - `ops`: Operator overloads for `Dual`/`Dual`, `Dual`/`f64` and `f64`/`Dual`
//!
//! # Re-exports
//!
//! [`Dual`] is re-exported at this module level.

pub mod dual;
mod ops;

pub use dual::Dual;

//! Core traits for generic numerical computation.
//!
//! This module defines:
//! - `Scalar`: The numeric interface shared by `f64` and `Dual`
//!
//! Model code written against `Scalar` is monomorphised for each type, so
//! operand dispatch is resolved at compile time.

pub mod scalar;

pub use scalar::Scalar;

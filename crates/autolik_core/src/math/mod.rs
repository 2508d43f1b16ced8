//! Mathematical utilities.
//!
//! This module provides:
//! - `special`: Gamma, log-gamma, digamma and beta functions for real arguments

pub mod special;

//! Error types for density and log-likelihood evaluation.
//!
//! This module provides:
//! - `DistributionError`: Precondition violations reported by densities
//! - `Result<T>`: Alias used throughout the crate

use thiserror::Error;

/// Density and log-likelihood precondition errors.
///
/// Every variant names the distribution that rejected its input. Arithmetic
/// domain problems inside an accepted evaluation (overflow, `ln 0`) are not
/// errors: they surface as NaN or infinity in the result.
///
/// # Variants
/// - `OutOfSupport`: Observation outside the distribution's support
/// - `InvalidParameter`: Parameter values violate a constraint
/// - `EmptySample`: Log-likelihood requested for an empty sample
///
/// # Examples
/// ```
/// use autolik_models::DistributionError;
///
/// let err = DistributionError::OutOfSupport {
///     distribution: "beta",
///     x: 1.5,
///     support: "0 < x < 1",
/// };
/// assert_eq!(format!("{}", err), "beta: x = 1.5 is outside the support 0 < x < 1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Observation outside the support.
    #[error("{distribution}: x = {x} is outside the support {support}")]
    OutOfSupport {
        /// Distribution name
        distribution: &'static str,
        /// The rejected observation
        x: f64,
        /// Support of the distribution
        support: &'static str,
    },

    /// Parameter constraint violated.
    #[error("{distribution}: wrong parameterisation, requires {constraint}")]
    InvalidParameter {
        /// Distribution name
        distribution: &'static str,
        /// The violated constraint
        constraint: &'static str,
    },

    /// Empty sample passed to a log-likelihood.
    #[error("{distribution}: log-likelihood of an empty sample")]
    EmptySample {
        /// Distribution name
        distribution: &'static str,
    },
}

/// Result alias for density and log-likelihood evaluation.
pub type Result<T> = std::result::Result<T, DistributionError>;

/// Fails with `OutOfSupport` unless `inside` holds.
#[inline]
pub(crate) fn ensure_support(
    inside: bool,
    distribution: &'static str,
    x: f64,
    support: &'static str,
) -> Result<()> {
    if inside {
        Ok(())
    } else {
        Err(DistributionError::OutOfSupport {
            distribution,
            x,
            support,
        })
    }
}

/// Fails with `InvalidParameter` unless `valid` holds.
///
/// Callers phrase the check so that NaN parameters fail it.
#[inline]
pub(crate) fn ensure_parameters(
    valid: bool,
    distribution: &'static str,
    constraint: &'static str,
) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(DistributionError::InvalidParameter {
            distribution,
            constraint,
        })
    }
}

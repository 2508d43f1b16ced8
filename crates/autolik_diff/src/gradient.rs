//! Gradient extraction by tangent seeding.
//!
//! For a function of N parameters the gradient takes N evaluations: each
//! evaluation sets one argument's tangent to 1 and reads the tangent of the
//! result. The free functions run sequentially and reuse a single argument
//! buffer, toggling one tangent at a time and resetting it before the next
//! seeding. [`GradientEngine`] adds optional rayon parallelism.
//!
//! # Fallible models
//!
//! Log-likelihoods return `Result`, so every operation has a `try_` form
//! taking `Fn(&[Dual]) -> Result<Dual, E>`. Batched evaluation isolates
//! failures: one bad point yields an `Err` in its slot and the remaining
//! points are still evaluated.

use std::convert::Infallible;
use std::fmt::Display;

use autolik_core::types::Dual;
use tracing::{debug, trace, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::GradientConfig;

/// Wraps each coordinate as a zero-tangent dual.
fn promote(at: &[f64]) -> Vec<Dual> {
    at.iter().copied().map(Dual::constant).collect()
}

fn unwrap_infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

fn log_failure<T, E: Display>(index: usize, result: &Result<T, E>) {
    if let Err(err) = result {
        warn!(point = index, error = %err, "gradient evaluation failed");
    }
}

/// Evaluates a fallible model at `at` without derivatives.
pub fn try_value<F, E>(f: F, at: &[f64]) -> Result<f64, E>
where
    F: Fn(&[Dual]) -> Result<Dual, E>,
{
    let args = promote(at);
    Ok(f(&args)?.real)
}

/// Evaluates `f` at `at` without derivatives.
///
/// # Examples
/// ```
/// use autolik_diff::value;
///
/// let v = value(|p| p[0] * p[1], &[3.0, 4.0]);
/// assert_eq!(v, 12.0);
/// ```
pub fn value<F>(f: F, at: &[f64]) -> f64
where
    F: Fn(&[Dual]) -> Dual,
{
    unwrap_infallible(try_value(|p: &[Dual]| Ok(f(p)), at))
}

/// Gradient of a fallible model at `at`.
///
/// Returns the first error produced by any seeding.
pub fn try_gradient<F, E>(f: F, at: &[f64]) -> Result<Vec<f64>, E>
where
    F: Fn(&[Dual]) -> Result<Dual, E>,
{
    debug!(n_params = at.len(), "seeding gradient");

    let mut args = promote(at);
    let mut partials = Vec::with_capacity(args.len());

    for i in 0..args.len() {
        args[i].eps = 1.0;
        let out = f(&args);
        args[i].eps = 0.0;

        let partial = out?.eps;
        trace!(index = i, partial, "partial derivative");
        partials.push(partial);
    }

    Ok(partials)
}

/// Gradient of `f` at `at`.
///
/// # Examples
/// ```
/// use autolik_diff::gradient;
///
/// // f(x, y) = x^2 y
/// let g = gradient(|p| p[0] * p[0] * p[1], &[3.0, 2.0]);
/// assert_eq!(g, vec![12.0, 9.0]);
/// ```
pub fn gradient<F>(f: F, at: &[f64]) -> Vec<f64>
where
    F: Fn(&[Dual]) -> Dual,
{
    unwrap_infallible(try_gradient(|p: &[Dual]| Ok(f(p)), at))
}

/// Gradients of a fallible model at each point, failures isolated per point.
pub fn try_gradient_batch<F, E, P>(f: F, points: &[P]) -> Vec<Result<Vec<f64>, E>>
where
    F: Fn(&[Dual]) -> Result<Dual, E>,
    E: Display,
    P: AsRef<[f64]>,
{
    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let result = try_gradient(&f, point.as_ref());
            log_failure(index, &result);
            result
        })
        .collect()
}

/// Gradients of `f` at each point.
///
/// # Examples
/// ```
/// use autolik_diff::gradient_batch;
///
/// let grads = gradient_batch(|p| p[0] * p[0], &[[1.0], [2.0], [3.0]]);
/// assert_eq!(grads, vec![vec![2.0], vec![4.0], vec![6.0]]);
/// ```
pub fn gradient_batch<F, P>(f: F, points: &[P]) -> Vec<Vec<f64>>
where
    F: Fn(&[Dual]) -> Dual,
    P: AsRef<[f64]>,
{
    points
        .iter()
        .map(|point| gradient(&f, point.as_ref()))
        .collect()
}

/// Turns `f` into a gradient function of the evaluation point.
///
/// # Examples
/// ```
/// use autolik_diff::grad;
///
/// let g = grad(|p| p[0].exp());
/// assert_eq!(g(&[0.0]), vec![1.0]);
/// ```
pub fn grad<F>(f: F) -> impl Fn(&[f64]) -> Vec<f64>
where
    F: Fn(&[Dual]) -> Dual,
{
    move |at: &[f64]| gradient(&f, at)
}

/// Turns `f` into a plain-valued function of the evaluation point.
pub fn primal<F>(f: F) -> impl Fn(&[f64]) -> f64
where
    F: Fn(&[Dual]) -> Dual,
{
    move |at: &[f64]| value(&f, at)
}

/// Gradient engine with configurable parallelism.
///
/// # Examples
/// ```
/// use autolik_diff::{GradientConfig, GradientEngine};
///
/// let engine = GradientEngine::new(GradientConfig::parallel());
/// let grads = engine.gradient_batch(|p| p[0] * p[1], &[[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(grads, vec![vec![2.0, 1.0], vec![4.0, 3.0]]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientEngine {
    config: GradientConfig,
}

impl GradientEngine {
    /// Creates an engine with the given configuration.
    pub fn new(config: GradientConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &GradientConfig {
        &self.config
    }

    /// Evaluates `f` at `at` without derivatives.
    pub fn value<F>(&self, f: F, at: &[f64]) -> f64
    where
        F: Fn(&[Dual]) -> Dual,
    {
        value(f, at)
    }

    /// Gradient of a fallible model at `at`.
    pub fn try_gradient<F, E>(&self, f: F, at: &[f64]) -> Result<Vec<f64>, E>
    where
        F: Fn(&[Dual]) -> Result<Dual, E> + Sync,
        E: Send,
    {
        #[cfg(feature = "parallel")]
        {
            if self.config.parallel_seeding && at.len() > 1 {
                return seed_parallel(&f, at);
            }
        }
        try_gradient(f, at)
    }

    /// Gradient of `f` at `at`.
    pub fn gradient<F>(&self, f: F, at: &[f64]) -> Vec<f64>
    where
        F: Fn(&[Dual]) -> Dual + Sync,
    {
        unwrap_infallible(self.try_gradient(|p: &[Dual]| Ok(f(p)), at))
    }

    /// Gradients of a fallible model at each point, failures isolated per point.
    pub fn try_gradient_batch<F, E, P>(&self, f: F, points: &[P]) -> Vec<Result<Vec<f64>, E>>
    where
        F: Fn(&[Dual]) -> Result<Dual, E> + Sync,
        E: Display + Send,
        P: AsRef<[f64]> + Sync,
    {
        debug!(n_points = points.len(), "batched gradient");

        let evaluate = |index: usize, point: &P| {
            let result = self.try_gradient(&f, point.as_ref());
            log_failure(index, &result);
            result
        };

        #[cfg(feature = "parallel")]
        {
            if self.config.should_parallelize(points.len()) {
                return points
                    .par_iter()
                    .enumerate()
                    .map(|(index, point)| evaluate(index, point))
                    .collect();
            }
        }

        points
            .iter()
            .enumerate()
            .map(|(index, point)| evaluate(index, point))
            .collect()
    }

    /// Gradients of `f` at each point.
    pub fn gradient_batch<F, P>(&self, f: F, points: &[P]) -> Vec<Vec<f64>>
    where
        F: Fn(&[Dual]) -> Dual + Sync,
        P: AsRef<[f64]> + Sync,
    {
        self.try_gradient_batch(|p: &[Dual]| Ok::<_, Infallible>(f(p)), points)
            .into_iter()
            .map(unwrap_infallible)
            .collect()
    }
}

/// Runs each seeding on its own copy of the argument buffer.
#[cfg(feature = "parallel")]
fn seed_parallel<F, E>(f: &F, at: &[f64]) -> Result<Vec<f64>, E>
where
    F: Fn(&[Dual]) -> Result<Dual, E> + Sync,
    E: Send,
{
    debug!(n_params = at.len(), "seeding gradient in parallel");

    let base = promote(at);
    (0..base.len())
        .into_par_iter()
        .map(|i| {
            let mut args = base.clone();
            args[i].eps = 1.0;
            f(&args).map(|out| out.eps)
        })
        .collect()
}

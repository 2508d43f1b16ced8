//! Gradient engine configuration.

/// Default minimum batch size before points are spread across threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for [`GradientEngine`](crate::GradientEngine).
///
/// Controls when the engine hands work to rayon. Parallel and sequential
/// execution produce identical results in the same order; the settings only
/// trade thread overhead against throughput.
///
/// # Example
///
/// ```
/// use autolik_diff::GradientConfig;
///
/// let config = GradientConfig::default();
/// assert_eq!(config.parallel_threshold, 64);
/// assert!(!config.parallel_seeding);
///
/// let custom = GradientConfig::new(8).with_parallel_seeding(true);
/// assert!(custom.parallel_seeding);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GradientConfig {
    /// Minimum number of evaluation points before a batch runs in parallel.
    pub parallel_threshold: usize,

    /// Evaluate the per-parameter seedings of one point in parallel.
    ///
    /// Each seeding then works on its own copy of the argument buffer.
    pub parallel_seeding: bool,
}

impl Default for GradientConfig {
    /// Default values:
    /// - `parallel_threshold`: 64
    /// - `parallel_seeding`: false
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            parallel_seeding: false,
        }
    }
}

impl GradientConfig {
    /// Creates a configuration with the given batch threshold.
    ///
    /// # Panics
    ///
    /// Panics if `parallel_threshold == 0`.
    pub fn new(parallel_threshold: usize) -> Self {
        assert!(parallel_threshold > 0, "parallel_threshold must be > 0");
        Self {
            parallel_threshold,
            parallel_seeding: false,
        }
    }

    /// Never uses threads.
    pub fn sequential() -> Self {
        Self {
            parallel_threshold: usize::MAX,
            parallel_seeding: false,
        }
    }

    /// Uses threads for every batch and every seeding.
    pub fn parallel() -> Self {
        Self {
            parallel_threshold: 1,
            parallel_seeding: true,
        }
    }

    /// Sets `parallel_seeding`.
    pub fn with_parallel_seeding(mut self, enabled: bool) -> Self {
        self.parallel_seeding = enabled;
        self
    }

    /// Returns whether a batch of `n_points` should run in parallel.
    ///
    /// Always false without the `parallel` feature.
    #[inline]
    pub fn should_parallelize(&self, n_points: usize) -> bool {
        cfg!(feature = "parallel") && n_points >= self.parallel_threshold
    }
}

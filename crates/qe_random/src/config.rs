//! Sampler configuration.
//!
//! This module provides configuration types and builders controlling how
//! the sampling routines execute: whether independent rows and trials are
//! processed in parallel, and which pool representation the
//! without-replacement sampler uses. None of these settings change the
//! values produced for a given random state.

use thiserror::Error;

/// Default number of rows/trials at which parallel processing starts.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Default ratio `n / k` up to which a dense index pool is used.
pub const DEFAULT_DENSE_POOL_RATIO: usize = 4;

/// Configuration error for [`SamplerConfig`].
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Parallel threshold of zero.
    #[error("Invalid parallel threshold {0}: must be at least 1")]
    InvalidParallelThreshold(usize),

    /// Dense pool ratio of zero.
    #[error("Invalid dense pool ratio {0}: must be at least 1")]
    InvalidDensePoolRatio(usize),
}

/// Sampling execution configuration.
///
/// Immutable configuration consumed by [`Sampler`](crate::Sampler).
/// Use [`SamplerConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use qe_random::SamplerConfig;
///
/// let config = SamplerConfig::builder()
///     .parallel(false)
///     .dense_pool_ratio(8)
///     .build()
///     .expect("valid configuration");
///
/// assert!(!config.parallel());
/// assert_eq!(config.dense_pool_ratio(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SamplerConfig {
    /// Process independent rows/trials on the rayon pool.
    parallel: bool,
    /// Minimum number of rows/trials before parallel processing is used.
    parallel_threshold: usize,
    /// Dense pool is used when `n <= k * dense_pool_ratio`.
    dense_pool_ratio: usize,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            dense_pool_ratio: DEFAULT_DENSE_POOL_RATIO,
        }
    }
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns whether parallel processing is enabled.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns the minimum row/trial count for parallel processing.
    #[inline]
    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns the dense pool ratio.
    #[inline]
    pub fn dense_pool_ratio(&self) -> usize {
        self.dense_pool_ratio
    }

    /// Returns true if `units` independent rows/trials should run in parallel.
    #[inline]
    pub fn use_parallel(&self, units: usize) -> bool {
        self.parallel && units >= self.parallel_threshold
    }

    /// Returns true if a dense pool should back a `k`-of-`n` sample.
    #[inline]
    pub fn use_dense_pool(&self, n: usize, k: usize) -> bool {
        n <= k.saturating_mul(self.dense_pool_ratio)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `parallel_threshold` is 0
    /// - `dense_pool_ratio` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parallel_threshold == 0 {
            return Err(ConfigError::InvalidParallelThreshold(
                self.parallel_threshold,
            ));
        }
        if self.dense_pool_ratio == 0 {
            return Err(ConfigError::InvalidDensePoolRatio(self.dense_pool_ratio));
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// Unset fields take their defaults; validation runs at build time.
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    parallel: Option<bool>,
    parallel_threshold: Option<usize>,
    dense_pool_ratio: Option<usize>,
}

impl SamplerConfigBuilder {
    /// Enables or disables parallel processing.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = Some(parallel);
        self
    }

    /// Sets the minimum row/trial count for parallel processing.
    ///
    /// # Arguments
    ///
    /// * `threshold` - Row/trial count, at least 1
    #[inline]
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Sets the dense pool ratio.
    ///
    /// # Arguments
    ///
    /// * `ratio` - At least 1; larger values favour the dense pool
    #[inline]
    pub fn dense_pool_ratio(mut self, ratio: usize) -> Self {
        self.dense_pool_ratio = Some(ratio);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field is out of range.
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let defaults = SamplerConfig::default();
        let config = SamplerConfig {
            parallel: self.parallel.unwrap_or(defaults.parallel),
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(defaults.parallel_threshold),
            dense_pool_ratio: self.dense_pool_ratio.unwrap_or(defaults.dense_pool_ratio),
        };

        config.validate()?;
        Ok(config)
    }
}

//! Configured entry point for every sampling routine.
//!
//! [`Sampler`] validates arguments, turns the caller's
//! [`RandomState`] into a generator, draws the uniform batch in row-major
//! order and hands independent rows/trials to the per-row kernels in
//! [`probvec`](mod@crate::probvec), [`sample`](mod@crate::sample) and
//! [`draw`](mod@crate::draw). The free functions of those modules delegate to
//! `Sampler::default()`.

use ndarray::{Array1, Array2};
use qe_core::rng::{check_random_state, RandomState};
use qe_core::{QeError, QeResult};
use rayon::prelude::*;

use crate::config::{ConfigError, SamplerConfig};
use crate::draw::{check_cdf, draw_index};
use crate::probvec::fill_probvec;
use crate::sample::fill_sample;

/// Sampling routines bound to a [`SamplerConfig`].
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::{Sampler, SamplerConfig};
///
/// let sampler = Sampler::new(SamplerConfig::builder().parallel(false).build().unwrap()).unwrap();
/// let trials = sampler
///     .sample_without_replacement_trials(5, 3, 4, RandomState::Seed(1234))
///     .unwrap();
/// assert_eq!(trials.dim(), (4, 3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Sampler {
    config: SamplerConfig,
}

impl Sampler {
    /// Creates a sampler after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SamplerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the sampler's configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Returns `m` probability vectors of dimension `k` as the rows of an
    /// `(m, k)` matrix.
    ///
    /// Every row is non-negative and sums to one. `k == 1` yields a column
    /// of ones and leaves the random state untouched; otherwise exactly
    /// `m * (k - 1)` uniforms are consumed.
    ///
    /// # Errors
    ///
    /// * `QeError::InvalidArgument` - `k == 0`, `m * k` overflows, or a
    ///   negative seed
    pub fn probvec(
        &self,
        m: usize,
        k: usize,
        random_state: RandomState<'_>,
    ) -> QeResult<Array2<f64>> {
        if k == 0 {
            return Err(QeError::invalid("k must be greater than 0"));
        }
        if k == 1 {
            return Ok(Array2::ones((m, 1)));
        }

        let len = m
            .checked_mul(k)
            .ok_or_else(|| QeError::invalid(format!("m * k overflows: m = {}, k = {}", m, k)))?;

        let mut rng = check_random_state(random_state)?;
        let mut r = rng.uniform(m * (k - 1));
        let mut out = vec![0.0; len];

        let parallel = self.config.use_parallel(m);
        tracing::debug!(m, k, parallel, seed = ?rng.seed(), "sampling probability vectors");

        if parallel {
            out.par_chunks_mut(k)
                .zip(r.par_chunks_mut(k - 1))
                .for_each(|(row, r_row)| fill_probvec(r_row, row));
        } else {
            out.chunks_mut(k)
                .zip(r.chunks_mut(k - 1))
                .for_each(|(row, r_row)| fill_probvec(r_row, row));
        }

        Array2::from_shape_vec((m, k), out).map_err(|e| QeError::Shape(e.to_string()))
    }

    /// Draws `k` distinct integers from `0..n`.
    ///
    /// Consumes exactly `k` uniforms. `k == n` yields a random permutation.
    ///
    /// # Errors
    ///
    /// * `QeError::InvalidArgument` - `n == 0`, `k > n`, or a negative seed
    pub fn sample_without_replacement(
        &self,
        n: usize,
        k: usize,
        random_state: RandomState<'_>,
    ) -> QeResult<Array1<usize>> {
        check_sample_args(n, k)?;

        let mut rng = check_random_state(random_state)?;
        let r = rng.uniform(k);
        let mut out = vec![0; k];

        let dense = self.config.use_dense_pool(n, k);
        tracing::debug!(n, k, dense, seed = ?rng.seed(), "sampling without replacement");

        fill_sample(n, &r, &mut out, dense);
        Ok(Array1::from_vec(out))
    }

    /// Runs `num_trials` independent [`Sampler::sample_without_replacement`]
    /// trials and returns them as the rows of a `(num_trials, k)` matrix.
    ///
    /// The `num_trials * k` uniforms are drawn trial-major before any trial
    /// runs; trial `t` consumes row `t` of that batch.
    ///
    /// # Errors
    ///
    /// * `QeError::InvalidArgument` - `n == 0`, `k > n`, `num_trials * k`
    ///   overflows, or a negative seed
    pub fn sample_without_replacement_trials(
        &self,
        n: usize,
        k: usize,
        num_trials: usize,
        random_state: RandomState<'_>,
    ) -> QeResult<Array2<usize>> {
        check_sample_args(n, k)?;

        let len = num_trials.checked_mul(k).ok_or_else(|| {
            QeError::invalid(format!(
                "num_trials * k overflows: num_trials = {}, k = {}",
                num_trials, k
            ))
        })?;

        let mut rng = check_random_state(random_state)?;
        let r = rng.uniform(len);
        let mut out = vec![0; len];

        let dense = self.config.use_dense_pool(n, k);
        let parallel = self.config.use_parallel(num_trials);
        tracing::debug!(
            n,
            k,
            num_trials,
            dense,
            parallel,
            seed = ?rng.seed(),
            "sampling trials without replacement"
        );

        // Zero-width trials have nothing to fill, and chunking by zero panics.
        if k > 0 {
            if parallel {
                out.par_chunks_mut(k)
                    .zip(r.par_chunks(k))
                    .for_each(|(trial, r_trial)| fill_sample(n, r_trial, trial, dense));
            } else {
                out.chunks_mut(k)
                    .zip(r.chunks(k))
                    .for_each(|(trial, r_trial)| fill_sample(n, r_trial, trial, dense));
            }
        }

        Array2::from_shape_vec((num_trials, k), out).map_err(|e| QeError::Shape(e.to_string()))
    }

    /// Draws one category index from the cumulative distribution `cdf`.
    ///
    /// # Errors
    ///
    /// * `QeError::InvalidArgument` - empty `cdf`, a final entry that is not
    ///   positive and finite, or a negative seed
    pub fn draw(&self, cdf: &[f64], random_state: RandomState<'_>) -> QeResult<usize> {
        let total = check_cdf(cdf)?;
        let mut rng = check_random_state(random_state)?;
        let u = rng.gen_uniform();
        tracing::trace!(categories = cdf.len(), u, "categorical draw");
        Ok(draw_index(cdf, total, u))
    }

    /// Draws `size` independent category indices from `cdf`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Sampler::draw`].
    pub fn draw_n(
        &self,
        cdf: &[f64],
        size: usize,
        random_state: RandomState<'_>,
    ) -> QeResult<Array1<usize>> {
        let total = check_cdf(cdf)?;
        let mut rng = check_random_state(random_state)?;
        let r = rng.uniform(size);
        tracing::debug!(categories = cdf.len(), size, seed = ?rng.seed(), "categorical draws");

        Ok(r.iter().map(|&u| draw_index(cdf, total, u)).collect())
    }
}

fn check_sample_args(n: usize, k: usize) -> QeResult<()> {
    if n == 0 {
        return Err(QeError::invalid("n must be greater than 0"));
    }
    if k > n {
        return Err(QeError::invalid("k must be smaller than or equal to n"));
    }
    Ok(())
}

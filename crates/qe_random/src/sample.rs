//! Sampling without replacement.
//!
//! Draws `k` distinct integers from `0..n` by a partial Fisher-Yates
//! shuffle over an implicit identity pool: step `j` picks slot
//! `floor(r[j] * (n - j))` of the `n - j` remaining slots and moves the
//! last remaining value into the picked slot. Only touched slots are ever
//! materialised when the sparse pool is used, so a trial costs O(k) rather
//! than O(n).

use std::collections::HashMap;

use ndarray::{Array1, Array2};
use qe_core::rng::RandomState;
use qe_core::QeResult;

use crate::sampler::Sampler;

/// Randomly chooses `k` integers without replacement from `0..n`.
///
/// Shorthand for [`Sampler::sample_without_replacement`] with the default
/// configuration.
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::sample_without_replacement;
///
/// let s = sample_without_replacement(5, 3, RandomState::Seed(1234)).unwrap();
/// assert_eq!(s.to_vec(), vec![0, 4, 1]);
///
/// assert!(sample_without_replacement(0, 1, RandomState::Fresh).is_err());
/// assert!(sample_without_replacement(5, 6, RandomState::Fresh).is_err());
/// ```
pub fn sample_without_replacement(
    n: usize,
    k: usize,
    random_state: RandomState<'_>,
) -> QeResult<Array1<usize>> {
    Sampler::default().sample_without_replacement(n, k, random_state)
}

/// Runs `num_trials` independent without-replacement samples.
///
/// Shorthand for [`Sampler::sample_without_replacement_trials`] with the
/// default configuration. Row `t` of the result is trial `t`.
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::sample_without_replacement_trials;
///
/// let s = sample_without_replacement_trials(5, 3, 4, RandomState::Seed(1234)).unwrap();
/// assert_eq!(s.dim(), (4, 3));
/// ```
pub fn sample_without_replacement_trials(
    n: usize,
    k: usize,
    num_trials: usize,
    random_state: RandomState<'_>,
) -> QeResult<Array2<usize>> {
    Sampler::default().sample_without_replacement_trials(n, k, num_trials, random_state)
}

/// Index pool for one trial. Slot `i` holds `i` until overwritten.
enum Pool {
    /// Every slot materialised up front.
    Dense(Vec<usize>),
    /// Only overwritten slots stored.
    Sparse(HashMap<usize, usize>),
}

impl Pool {
    fn new(n: usize, k: usize, dense: bool) -> Self {
        if dense {
            Pool::Dense((0..n).collect())
        } else {
            Pool::Sparse(HashMap::with_capacity(k))
        }
    }

    #[inline]
    fn get(&self, slot: usize) -> usize {
        match self {
            Pool::Dense(values) => values[slot],
            Pool::Sparse(touched) => touched.get(&slot).copied().unwrap_or(slot),
        }
    }

    #[inline]
    fn set(&mut self, slot: usize, value: usize) {
        match self {
            Pool::Dense(values) => values[slot] = value,
            Pool::Sparse(touched) => {
                touched.insert(slot, value);
            }
        }
    }
}

/// Fills `out` with `r.len()` distinct values from `0..n`.
///
/// Requires `r.len() == out.len() <= n`.
pub(crate) fn fill_sample(n: usize, r: &[f64], out: &mut [usize], dense: bool) {
    debug_assert_eq!(r.len(), out.len());
    debug_assert!(r.len() <= n);

    let mut pool = Pool::new(n, r.len(), dense);
    for (j, (&u, slot)) in r.iter().zip(out.iter_mut()).enumerate() {
        let remaining = n - j;
        // u * remaining can round up to remaining when u is within an ulp of 1.
        let idx = ((u * remaining as f64) as usize).min(remaining - 1);
        *slot = pool.get(idx);
        let last = pool.get(remaining - 1);
        pool.set(idx, last);
    }
}

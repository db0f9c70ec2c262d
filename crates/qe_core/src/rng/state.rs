//! Normalisation of caller-supplied random states.
//!
//! Sampling routines accept a [`RandomState`] and turn it into a generator
//! with [`check_random_state`]. The three accepted forms are an unseeded
//! request, an integer seed and an existing generator.

use std::ops::{Deref, DerefMut};

use super::prng::QeRng;
use crate::error::{QeError, QeResult};

/// Random-state argument accepted by every sampling routine.
///
/// # Variants
/// - `Fresh`: Generator seeded from OS entropy (not reproducible)
/// - `Seed`: Generator seeded with a non-negative integer
/// - `Rng`: Caller-owned generator, advanced in place
#[derive(Debug, Default)]
pub enum RandomState<'a> {
    /// Fresh, unseeded generator.
    #[default]
    Fresh,
    /// Integer seed; must be non-negative.
    Seed(i64),
    /// Existing generator passed through by mutable reference.
    Rng(&'a mut QeRng),
}

impl<'a> From<&'a mut QeRng> for RandomState<'a> {
    fn from(rng: &'a mut QeRng) -> Self {
        RandomState::Rng(rng)
    }
}

impl From<i64> for RandomState<'_> {
    fn from(seed: i64) -> Self {
        RandomState::Seed(seed)
    }
}

impl From<Option<i64>> for RandomState<'_> {
    fn from(seed: Option<i64>) -> Self {
        seed.map_or(RandomState::Fresh, RandomState::Seed)
    }
}

/// Generator produced by [`check_random_state`].
///
/// Either owns a freshly constructed [`QeRng`] or borrows the caller's.
/// Dereferences to [`QeRng`] in both cases.
#[derive(Debug)]
pub enum RngHandle<'a> {
    /// Generator created for this call.
    Owned(QeRng),
    /// Caller's generator.
    Borrowed(&'a mut QeRng),
}

impl Deref for RngHandle<'_> {
    type Target = QeRng;

    fn deref(&self) -> &QeRng {
        match self {
            RngHandle::Owned(rng) => rng,
            RngHandle::Borrowed(rng) => rng,
        }
    }
}

impl DerefMut for RngHandle<'_> {
    fn deref_mut(&mut self) -> &mut QeRng {
        match self {
            RngHandle::Owned(rng) => rng,
            RngHandle::Borrowed(rng) => rng,
        }
    }
}

/// Turns a [`RandomState`] into a ready-to-use generator.
///
/// # Returns
///
/// * `Ok(RngHandle::Owned)` - for `Fresh` and non-negative `Seed`
/// * `Ok(RngHandle::Borrowed)` - for `Rng`
/// * `Err(QeError::InvalidArgument)` - for a negative seed
///
/// # Examples
///
/// ```
/// use qe_core::rng::{check_random_state, RandomState};
///
/// let a = check_random_state(RandomState::Seed(7)).unwrap().gen_uniform();
/// let b = check_random_state(RandomState::Seed(7)).unwrap().gen_uniform();
/// assert_eq!(a, b);
///
/// assert!(check_random_state(RandomState::Seed(-1)).is_err());
/// ```
pub fn check_random_state(state: RandomState<'_>) -> QeResult<RngHandle<'_>> {
    match state {
        RandomState::Fresh => Ok(RngHandle::Owned(QeRng::from_entropy())),
        RandomState::Seed(seed) => {
            let seed = u64::try_from(seed).map_err(|_| {
                QeError::invalid(format!(
                    "random_state seed must be non-negative, got {}",
                    seed
                ))
            })?;
            tracing::trace!(seed, "seeding random state");
            Ok(RngHandle::Owned(QeRng::from_seed(seed)))
        }
        RandomState::Rng(rng) => Ok(RngHandle::Borrowed(rng)),
    }
}

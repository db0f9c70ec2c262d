//! Categorical draws from a cumulative distribution.
//!
//! A uniform `u` in [0, 1) is scaled by the final cdf entry and located
//! with [`searchsorted`]: the result is the leftmost `i` with
//! `cdf[i] > u * cdf[L - 1]`. For a normalised cdf the scale is one and
//! this is the plain insertion index of `u`; for an unnormalised cdf
//! (cumulative weights) it draws proportionally to the weights. The index
//! is always a valid category.

use ndarray::Array1;
use qe_core::rng::RandomState;
use qe_core::search::searchsorted;
use qe_core::{QeError, QeResult};

use crate::sampler::Sampler;

/// Draws one category index according to `cdf`.
///
/// Shorthand for [`Sampler::draw`] with the default configuration.
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::draw;
///
/// let cdf = [0.4, 1.0];
/// let i = draw(&cdf, RandomState::Fresh).unwrap();
/// assert!(i < 2);
/// ```
pub fn draw(cdf: &[f64], random_state: RandomState<'_>) -> QeResult<usize> {
    Sampler::default().draw(cdf, random_state)
}

/// Draws `size` independent category indices according to `cdf`.
///
/// Shorthand for [`Sampler::draw_n`] with the default configuration.
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::draw_n;
///
/// let cdf = [0.4, 1.0];
/// let d = draw_n(&cdf, 10, RandomState::Fresh).unwrap();
/// assert_eq!(d.len(), 10);
/// ```
pub fn draw_n(cdf: &[f64], size: usize, random_state: RandomState<'_>) -> QeResult<Array1<usize>> {
    Sampler::default().draw_n(cdf, size, random_state)
}

/// Validates `cdf` and returns its total mass (final entry).
pub(crate) fn check_cdf(cdf: &[f64]) -> QeResult<f64> {
    let total = *cdf
        .last()
        .ok_or_else(|| QeError::invalid("cdf must not be empty"))?;
    if !(total.is_finite() && total > 0.0) {
        return Err(QeError::invalid(format!(
            "cdf total mass must be positive and finite, got {}",
            total
        )));
    }
    Ok(total)
}

#[inline]
pub(crate) fn draw_index(cdf: &[f64], total: f64, u: f64) -> usize {
    // u * total can round up to total.
    searchsorted(cdf, u * total).min(cdf.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qe_core::rng::QeRng;

    fn cumsum(pmf: &[f64]) -> Vec<f64> {
        pmf.iter()
            .scan(0.0, |acc, &p| {
                *acc += p;
                Some(*acc)
            })
            .collect()
    }

    #[test]
    fn test_draw_index_intervals() {
        let cdf = [0.4, 1.0];
        assert_eq!(draw_index(&cdf, 1.0, 0.0), 0);
        assert_eq!(draw_index(&cdf, 1.0, 0.39), 0);
        assert_eq!(draw_index(&cdf, 1.0, 0.4), 1);
        assert_eq!(draw_index(&cdf, 1.0, 0.999), 1);
    }

    #[test]
    fn test_draw_index_unnormalised() {
        let weights = [2.0, 6.0];
        assert_eq!(draw_index(&weights, 6.0, 0.3), 0);
        assert_eq!(draw_index(&weights, 6.0, 0.34), 1);
    }

    #[test]
    fn test_draw_index_never_out_of_range() {
        let cdf = [0.5, 0.9];
        assert_eq!(draw_index(&cdf, 0.9, 1.0 - f64::EPSILON / 2.0), 1);
    }

    #[test]
    fn test_draw_single_in_range() {
        let cdf = cumsum(&[0.4, 0.6]);
        for seed in 0..50 {
            let i = draw(&cdf, RandomState::Seed(seed)).unwrap();
            assert!(i == 0 || i == 1);
        }
    }

    #[test]
    fn test_draw_n_shape() {
        let cdf = cumsum(&[0.4, 0.6]);
        let d = draw_n(&cdf, 10, RandomState::Fresh).unwrap();
        assert_eq!(d.len(), 10);
        assert!(d.iter().all(|&i| i == 0 || i == 1));
    }

    #[test]
    fn test_draw_n_zero_size() {
        let cdf = [1.0];
        assert!(draw_n(&cdf, 0, RandomState::Seed(1)).unwrap().is_empty());
    }

    #[test]
    fn test_long_run_frequencies() {
        let cdf = cumsum(&[0.4, 0.6]);
        let n = 100_000;
        let d = draw_n(&cdf, n, RandomState::Seed(1234)).unwrap();
        let zeros = d.iter().filter(|&&i| i == 0).count();
        let freq = zeros as f64 / n as f64;
        assert!((freq - 0.4).abs() < 0.01, "frequency of 0 was {}", freq);
    }

    #[test]
    fn test_repeated_single_draws_frequency() {
        let cdf = cumsum(&[0.4, 0.6]);
        let mut rng = QeRng::from_seed(77);
        let n = 20_000;
        let zeros = (0..n)
            .filter(|_| draw(&cdf, RandomState::from(&mut rng)).unwrap() == 0)
            .count();
        let freq = zeros as f64 / n as f64;
        assert!((freq - 0.4).abs() < 0.02, "frequency of 0 was {}", freq);
    }

    #[test]
    fn test_zero_mass_category_never_drawn() {
        let cdf = cumsum(&[0.5, 0.0, 0.5]);
        let d = draw_n(&cdf, 5_000, RandomState::Seed(3)).unwrap();
        assert!(d.iter().all(|&i| i != 1));
    }

    #[test]
    fn test_single_and_batch_share_stream() {
        let cdf = cumsum(&[0.2, 0.3, 0.5]);
        let mut rng = QeRng::from_seed(5);
        let singles: Vec<usize> = (0..20)
            .map(|_| draw(&cdf, RandomState::from(&mut rng)).unwrap())
            .collect();
        let batch = draw_n(&cdf, 20, RandomState::Seed(5)).unwrap();
        assert_eq!(batch.to_vec(), singles);
    }

    #[test]
    fn test_invalid_cdf() {
        assert!(matches!(
            draw(&[], RandomState::Fresh),
            Err(QeError::InvalidArgument(_))
        ));
        assert!(draw_n(&[0.0, 0.0], 3, RandomState::Fresh).is_err());
        assert!(draw(&[0.5, f64::NAN], RandomState::Fresh).is_err());
        assert!(draw(&[0.5, f64::INFINITY], RandomState::Fresh).is_err());
    }
}

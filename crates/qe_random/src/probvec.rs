//! Random probability vectors.
//!
//! A probability vector of dimension `k` is drawn uniformly from the
//! simplex by sorting `k - 1` uniforms and taking the gaps between
//! consecutive order statistics, with `0` and `1` as the outer endpoints.
//! The gaps are non-negative and telescope to one.

use ndarray::Array2;
use qe_core::rng::RandomState;
use qe_core::QeResult;

use crate::sampler::Sampler;

/// Returns `m` randomly sampled probability vectors of dimension `k`.
///
/// Shorthand for [`Sampler::probvec`] with the default configuration.
///
/// # Examples
///
/// ```rust
/// use qe_core::rng::RandomState;
/// use qe_random::probvec;
///
/// let x = probvec(2, 3, RandomState::Seed(1234)).unwrap();
/// for row in x.rows() {
///     assert!((row.sum() - 1.0).abs() < 1e-12);
/// }
/// ```
pub fn probvec(m: usize, k: usize, random_state: RandomState<'_>) -> QeResult<Array2<f64>> {
    Sampler::default().probvec(m, k, random_state)
}

/// Fills `out` with the sorted-gap transform of `r`.
///
/// `r` holds `k - 1` uniforms and is sorted in place; `out` holds `k`
/// entries. `r` must be non-empty.
pub(crate) fn fill_probvec(r: &mut [f64], out: &mut [f64]) {
    debug_assert_eq!(out.len(), r.len() + 1);

    let n = r.len();
    r.sort_unstable_by(|a, b| a.total_cmp(b));
    out[0] = r[0];
    for i in 1..n {
        out[i] = r[i] - r[i - 1];
    }
    out[n] = 1.0 - r[n - 1];
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qe_core::rng::QeRng;
    use qe_core::QeError;

    #[test]
    fn test_fill_probvec_gaps() {
        let mut r = [0.7, 0.2, 0.5];
        let mut out = [0.0; 4];
        fill_probvec(&mut r, &mut out);

        assert_eq!(r, [0.2, 0.5, 0.7]);
        assert_relative_eq!(out[0], 0.2, epsilon = 1e-15);
        assert_relative_eq!(out[1], 0.3, epsilon = 1e-15);
        assert_relative_eq!(out[2], 0.2, epsilon = 1e-15);
        assert_relative_eq!(out[3], 0.3, epsilon = 1e-15);
    }

    #[test]
    fn test_fill_probvec_ties() {
        let mut r = [0.4, 0.4];
        let mut out = [0.0; 3];
        fill_probvec(&mut r, &mut out);
        assert_eq!(out, [0.4, 0.0, 0.6]);
    }

    #[test]
    fn test_rows_are_probability_vectors() {
        let x = probvec(100, 5, RandomState::Seed(3)).unwrap();
        assert_eq!(x.dim(), (100, 5));

        for row in x.rows() {
            assert!(row.iter().all(|&v| v >= 0.0));
            assert_relative_eq!(row.sum(), 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_single_category_is_ones() {
        let x = probvec(4, 1, RandomState::Seed(3)).unwrap();
        assert_eq!(x, Array2::<f64>::ones((4, 1)));
    }

    #[test]
    fn test_single_category_consumes_no_draws() {
        let mut rng = QeRng::from_seed(10);
        let mut reference = QeRng::from_seed(10);

        probvec(6, 1, RandomState::from(&mut rng)).unwrap();
        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }

    #[test]
    fn test_consumes_m_times_k_minus_one_draws() {
        let mut rng = QeRng::from_seed(10);
        let mut reference = QeRng::from_seed(10);

        probvec(3, 4, RandomState::from(&mut rng)).unwrap();
        reference.uniform(3 * 3);
        assert_eq!(rng.gen_uniform(), reference.gen_uniform());
    }

    #[test]
    fn test_zero_rows() {
        let x = probvec(0, 3, RandomState::Seed(1)).unwrap();
        assert_eq!(x.dim(), (0, 3));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = probvec(2, 0, RandomState::Seed(1)).unwrap_err();
        assert!(matches!(err, QeError::InvalidArgument(_)));
    }

    #[test]
    fn test_negative_seed_rejected() {
        assert!(probvec(2, 3, RandomState::Seed(-1)).is_err());
    }

    #[test]
    fn test_seeded_reproducibility() {
        let a = probvec(10, 4, RandomState::Seed(2024)).unwrap();
        let b = probvec(10, 4, RandomState::Seed(2024)).unwrap();
        assert_eq!(a, b);
    }

    /// Pinned against `StdRng::seed_from_u64(1234)` (ChaCha12).
    #[test]
    fn test_seeded_regression() {
        let x = probvec(2, 3, RandomState::Seed(1234)).unwrap();
        let expected = [
            [0.1184592584745442, 0.05119022842021004, 0.8303505131052458],
            [0.37960620799655265, 0.23581243367195504, 0.3845813583314923],
        ];

        for (row, expected_row) in x.rows().into_iter().zip(expected.iter()) {
            for (&v, &e) in row.iter().zip(expected_row.iter()) {
                assert_relative_eq!(v, e, epsilon = 1e-15);
            }
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(200))]

            #[test]
            fn test_simplex_invariant(
                seed in 0i64..10_000,
                m in 0usize..20,
                k in 1usize..12,
            ) {
                let x = probvec(m, k, RandomState::Seed(seed)).unwrap();
                prop_assert_eq!(x.dim(), (m, k));
                for row in x.rows() {
                    prop_assert!(row.iter().all(|&v| v >= 0.0));
                    prop_assert!((row.sum() - 1.0).abs() < 1e-9);
                }
            }
        }
    }
}

//! Rank-size data.
//!
//! For a power-law (Pareto) sample the log of an observation's size is
//! linear in the log of its rank; the rank-size pairs returned here are
//! the input to that diagnostic.

use ndarray::Array1;
use qe_core::{QeError, QeResult};

use crate::check_no_nan;

/// Rank-size pairs, largest observation first.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankSize {
    /// Ranks `1..=len`.
    pub rank: Array1<usize>,
    /// Observations sorted descending, aligned with `rank`.
    pub size: Array1<f64>,
}

impl RankSize {
    /// Returns the number of retained observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.rank.len()
    }

    /// Returns true if no observations were retained.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rank.is_empty()
    }
}

/// Generates rank-size data from `data`.
///
/// Observations are sorted descending and the first `floor(len * c)` are
/// kept, so `c` selects the top fraction of the sample.
///
/// # Errors
///
/// * `QeError::InvalidArgument` - `c` outside (0, 1] or a NaN observation
///
/// # Examples
///
/// ```
/// use qe_inequality::rank_size;
///
/// let rs = rank_size(&[1.0, 4.0, 2.0, 8.0], 0.5).unwrap();
/// assert_eq!(rs.rank.to_vec(), vec![1, 2]);
/// assert_eq!(rs.size.to_vec(), vec![8.0, 4.0]);
/// ```
pub fn rank_size(data: &[f64], c: f64) -> QeResult<RankSize> {
    if !(c > 0.0 && c <= 1.0) {
        return Err(QeError::invalid(format!("c must be in (0, 1], got {}", c)));
    }

    check_no_nan(data, "data")?;

    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| b.total_cmp(a));

    let kept = (sorted.len() as f64 * c) as usize;
    sorted.truncate(kept);
    tracing::debug!(len = data.len(), kept, c, "rank-size data");

    Ok(RankSize {
        rank: (1..=kept).collect(),
        size: Array1::from_vec(sorted),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Exp, StandardNormal};

    /// Coefficient of determination of the least-squares line through (x, y).
    fn r_squared(x: &[f64], y: &[f64]) -> f64 {
        let n = x.len() as f64;
        let mx = x.iter().sum::<f64>() / n;
        let my = y.iter().sum::<f64>() / n;
        let sxy: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
        let sxx: f64 = x.iter().map(|a| (a - mx).powi(2)).sum();
        let syy: f64 = y.iter().map(|b| (b - my).powi(2)).sum();
        sxy * sxy / (sxx * syy)
    }

    fn log_log_r_squared(rs: &RankSize) -> f64 {
        let log_rank: Vec<f64> = rs.rank.iter().map(|&r| (r as f64).ln()).collect();
        let log_size: Vec<f64> = rs.size.iter().map(|&s| s.ln()).collect();
        r_squared(&log_rank, &log_size)
    }

    #[test]
    fn test_full_sample_sorted_descending() {
        let rs = rank_size(&[3.0, 1.0, 2.0], 1.0).unwrap();
        assert_eq!(rs.rank.to_vec(), vec![1, 2, 3]);
        assert_eq!(rs.size.to_vec(), vec![3.0, 2.0, 1.0]);
        assert_eq!(rs.len(), 3);
    }

    #[test]
    fn test_truncation_floors() {
        let rs = rank_size(&[5.0, 4.0, 3.0, 2.0, 1.0], 0.5).unwrap();
        assert_eq!(rs.len(), 2);

        let none = rank_size(&[5.0, 4.0], 0.4).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_invalid_c() {
        assert!(rank_size(&[1.0], 0.0).is_err());
        assert!(rank_size(&[1.0], 1.5).is_err());
        assert!(rank_size(&[1.0], f64::NAN).is_err());
    }

    #[test]
    fn test_nan_observation_rejected() {
        assert!(matches!(
            rank_size(&[1.0, f64::NAN], 1.0),
            Err(QeError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pareto_is_log_linear() {
        let mut rng = StdRng::seed_from_u64(15);
        let sample_size = 10_000;
        let c = 0.74;

        let exp = Exp::<f64>::new(1.0).unwrap();
        let pareto: Vec<f64> = (0..sample_size)
            .map(|_| exp.sample(&mut rng).exp())
            .collect();
        let rs = rank_size(&pareto, c).unwrap();
        assert_eq!(rs.rank.len(), rs.size.len());
        assert_eq!(rs.len(), (c * sample_size as f64) as usize);

        let pareto_r2 = log_log_r_squared(&rs);
        assert!(pareto_r2 > 0.99, "pareto r^2 = {}", pareto_r2);

        let lognormal: Vec<f64> = (0..sample_size)
            .map(|_| {
                let z: f64 = StandardNormal.sample(&mut rng);
                z.exp()
            })
            .collect();
        let lognormal_r2 = log_log_r_squared(&rank_size(&lognormal, c).unwrap());
        assert!(
            lognormal_r2 < pareto_r2,
            "lognormal r^2 = {} should fall below pareto r^2 = {}",
            lognormal_r2,
            pareto_r2
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let rs = rank_size(&[3.0, 1.0], 1.0).unwrap();
        let json = serde_json::to_string(&rs).unwrap();
        let back: RankSize = serde_json::from_str(&json).unwrap();
        assert_eq!(rs, back);
    }
}

//! Gini coefficient.

use num_traits::Float;
use qe_core::{QeError, QeResult};

use crate::{check_no_nan, len_as};

/// Computes the Gini coefficient of a sample.
///
/// Defined as `sum_i sum_j |y_i - y_j| / (2 n sum_i y_i)`. Evaluated in
/// O(n log n) through the equivalent sorted form
/// `sum_i (2i - n - 1) y_(i) / (n sum_i y_i)` with 1-based ranks.
///
/// # Errors
///
/// * `QeError::InvalidArgument` - empty sample, a NaN observation or zero total
///
/// # Examples
///
/// ```
/// use qe_inequality::gini_coefficient;
///
/// // One holder of everything among four.
/// let g = gini_coefficient(&[0.0_f64, 0.0, 0.0, 1.0]).unwrap();
/// assert!((g - 0.75).abs() < 1e-12);
/// ```
pub fn gini_coefficient<T: Float>(y: &[T]) -> QeResult<T> {
    if y.is_empty() {
        return Err(QeError::invalid("y must not be empty"));
    }
    check_no_nan(y, "y")?;

    let mut sorted = y.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let n_t: T = len_as(n)?;
    let total = sorted.iter().fold(T::zero(), |acc, &v| acc + v);
    if total == T::zero() {
        return Err(QeError::invalid("y must have a non-zero total"));
    }

    let two = T::one() + T::one();
    let mut weighted = T::zero();
    for (i, &v) in sorted.iter().enumerate() {
        let rank: T = len_as(i + 1)?;
        weighted = weighted + (two * rank - n_t - T::one()) * v;
    }

    let g = weighted / (n_t * total);
    tracing::trace!(n, "computed gini coefficient");
    Ok(g)
}

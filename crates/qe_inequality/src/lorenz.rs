//! Lorenz curve.

use ndarray::Array1;
use num_traits::Float;
use qe_core::{QeError, QeResult};

use crate::{check_no_nan, len_as};

/// Computes the Lorenz curve of a sample.
///
/// The sample is sorted ascending. Both returned arrays have length
/// `n + 1` and start at zero: entry `i` of the first is the population
/// share `i / n`, entry `i` of the second is the share of the total held
/// by the `i` smallest observations.
///
/// # Errors
///
/// * `QeError::InvalidArgument` - empty sample, a NaN observation or zero total
///
/// # Examples
///
/// ```
/// use qe_inequality::lorenz_curve;
///
/// let (people, income) = lorenz_curve(&[3.0, 1.0]).unwrap();
/// assert_eq!(people.to_vec(), vec![0.0, 0.5, 1.0]);
/// assert_eq!(income.to_vec(), vec![0.0, 0.25, 1.0]);
/// ```
pub fn lorenz_curve<T: Float>(y: &[T]) -> QeResult<(Array1<T>, Array1<T>)> {
    if y.is_empty() {
        return Err(QeError::invalid("y must not be empty"));
    }
    check_no_nan(y, "y")?;

    let mut sorted = y.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let n = sorted.len();
    let mut partial = Vec::with_capacity(n + 1);
    partial.push(T::zero());
    let mut acc = T::zero();
    for &v in &sorted {
        acc = acc + v;
        partial.push(acc);
    }

    if acc == T::zero() {
        return Err(QeError::invalid("y must have a non-zero total"));
    }

    let n_t: T = len_as(n)?;
    let cum_people = (0..=n)
        .map(|i| len_as::<T>(i).map(|i| i / n_t))
        .collect::<QeResult<Array1<T>>>()?;
    let cum_income = partial.into_iter().map(|s| s / acc).collect::<Array1<T>>();

    Ok((cum_people, cum_income))
}

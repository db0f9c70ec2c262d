//! Empirical cumulative distribution function.

use ndarray::Array1;
use num_traits::Float;
use qe_core::search::searchsorted;
use qe_core::{QeError, QeResult};

use crate::{check_no_nan, len_as};

/// Empirical CDF of a sample.
///
/// `F(x)` is the fraction of observations less than or equal to `x`.
/// Observations are sorted once at construction; each evaluation is a
/// binary search.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Examples
///
/// ```
/// use qe_inequality::Ecdf;
///
/// let f = Ecdf::new(&[3.0_f64, 1.0, 2.0, 2.0]).unwrap();
/// assert_eq!(f.evaluate(0.5), 0.0);
/// assert_eq!(f.evaluate(2.0), 0.75);
/// assert_eq!(f.evaluate(10.0), 1.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Ecdf<T: Float> {
    /// Observations sorted ascending.
    observations: Vec<T>,
    /// Sample size in the working float type.
    n: T,
}

impl<T: Float> Ecdf<T> {
    /// Builds the empirical CDF of `observations`.
    ///
    /// # Errors
    ///
    /// * `QeError::InvalidArgument` - empty sample or a NaN observation
    pub fn new(observations: &[T]) -> QeResult<Self> {
        if observations.is_empty() {
            return Err(QeError::invalid("observations must not be empty"));
        }
        check_no_nan(observations, "observations")?;

        let mut sorted = observations.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = len_as(sorted.len())?;
        Ok(Self {
            observations: sorted,
            n,
        })
    }

    /// Returns the sorted observations.
    #[inline]
    pub fn observations(&self) -> &[T] {
        &self.observations
    }

    /// Returns the number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always false; construction rejects empty samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Evaluates `F(x)`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        // Counts never exceed the sample size, which converted at construction.
        let count = T::from(searchsorted(&self.observations, x)).unwrap_or(self.n);
        count / self.n
    }

    /// Evaluates `F` at every point of `xs`.
    pub fn evaluate_many(&self, xs: &[T]) -> Array1<T> {
        xs.iter().map(|&x| self.evaluate(x)).collect()
    }
}

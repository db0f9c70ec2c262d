//! Shorrocks mobility index.

use ndarray::{ArrayBase, Data, Ix2};
use qe_core::{QeError, QeResult};

/// Computes the Shorrocks mobility index of a transition matrix.
///
/// For an `m x m` stochastic matrix `P` the index is
/// `(m - trace(P)) / (m - 1)`: zero for the identity (no mobility) and one
/// when every row is the same distribution.
///
/// Rows are not checked to sum to one.
///
/// # Errors
///
/// * `QeError::InvalidArgument` - non-square matrix or `m < 2`
///
/// # Examples
///
/// ```
/// use ndarray::array;
/// use qe_inequality::shorrocks_index;
///
/// let p = array![[0.5, 0.5], [0.5, 0.5]];
/// assert_eq!(shorrocks_index(&p).unwrap(), 1.0);
/// ```
pub fn shorrocks_index<S>(p: &ArrayBase<S, Ix2>) -> QeResult<f64>
where
    S: Data<Elem = f64>,
{
    let (rows, cols) = p.dim();
    if rows != cols {
        return Err(QeError::invalid(format!(
            "P must be square, got {} x {}",
            rows, cols
        )));
    }
    if rows < 2 {
        return Err(QeError::invalid(format!(
            "P must be at least 2 x 2, got {} x {}",
            rows, cols
        )));
    }

    let m = rows as f64;
    Ok((m - p.diag().sum()) / (m - 1.0))
}

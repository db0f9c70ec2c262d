//! Ordered search over non-decreasing sequences.

/// Returns the leftmost index `i` such that `a[i] > v`.
///
/// `a` must be non-decreasing. When no element exceeds `v` the length of
/// `a` is returned, i.e. the position at which `v` would be inserted after
/// any equal entries to keep `a` sorted.
///
/// Applied to a cumulative distribution this yields the category whose
/// cumulative interval `[a[i-1], a[i])` contains `v`.
///
/// # Complexity
///
/// O(log L) via binary search.
///
/// # Examples
///
/// ```
/// use qe_core::search::searchsorted;
///
/// let a = [0.1, 0.5, 0.5, 1.0];
/// assert_eq!(searchsorted(&a, 0.0), 0);
/// assert_eq!(searchsorted(&a, 0.5), 3);
/// assert_eq!(searchsorted(&a, 1.0), 4);
/// ```
#[inline]
pub fn searchsorted<T: PartialOrd>(a: &[T], v: T) -> usize {
    a.partition_point(|x| *x <= v)
}

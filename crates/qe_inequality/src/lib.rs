//! # qe_inequality: Inequality and Mobility Statistics (Layer 2)
//!
//! ## Layer 2 Role
//!
//! qe_inequality evaluates standard distributional statistics over
//! in-memory samples:
//! - Lorenz curve (`lorenz`)
//! - Gini coefficient (`gini`)
//! - Shorrocks mobility index of a transition matrix (`mobility`)
//! - Rank-size data for power-law diagnostics (`rank_size`)
//! - Empirical cumulative distribution function (`ecdf`)
//!
//! ## Usage Example
//!
//! ```rust
//! use qe_inequality::{gini_coefficient, lorenz_curve};
//!
//! let y = [1.0, 1.0, 1.0, 1.0];
//! assert_eq!(gini_coefficient(&y).unwrap(), 0.0);
//!
//! let (people, income) = lorenz_curve(&y).unwrap();
//! assert_eq!(people, income);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`RankSize`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ecdf;
pub mod gini;
pub mod lorenz;
pub mod mobility;
pub mod rank_size;

pub use ecdf::Ecdf;
pub use gini::gini_coefficient;
pub use lorenz::lorenz_curve;
pub use mobility::shorrocks_index;
pub use rank_size::{rank_size, RankSize};

use num_traits::Float;
use qe_core::{QeError, QeResult};

/// Converts a sample length into the working float type.
pub(crate) fn len_as<T: Float>(n: usize) -> QeResult<T> {
    T::from(n).ok_or_else(|| QeError::invalid(format!("length {} not representable", n)))
}

/// Rejects samples containing NaN, which have no meaningful sort order.
pub(crate) fn check_no_nan<T: Float>(y: &[T], name: &str) -> QeResult<()> {
    if y.iter().any(|v| v.is_nan()) {
        return Err(QeError::invalid(format!("{} must not contain NaN", name)));
    }
    Ok(())
}

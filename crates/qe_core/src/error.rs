//! Error types for structured error handling.
//!
//! Every failure in this workspace is a caller precondition violation:
//! there is no I/O and nothing to retry. Operations either return a
//! complete result or fail before producing any output.

use thiserror::Error;

/// Categorised errors for QuantEcon numerical routines.
///
/// # Variants
/// - `InvalidArgument`: Caller supplied an argument outside the operation's domain
/// - `Shape`: Result container could not be assembled with the requested shape
///
/// # Examples
/// ```
/// use qe_core::QeError;
///
/// let err = QeError::InvalidArgument("n must be greater than 0".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: n must be greater than 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QeError {
    /// Argument outside the operation's domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Container shape mismatch.
    #[error("Shape error: {0}")]
    Shape(String),
}

impl QeError {
    /// Shorthand for [`QeError::InvalidArgument`].
    #[inline]
    pub fn invalid(msg: impl Into<String>) -> Self {
        QeError::InvalidArgument(msg.into())
    }
}

/// Result alias used throughout the workspace.
pub type QeResult<T> = Result<T, QeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = QeError::invalid("k must be smaller than or equal to n");
        assert_eq!(
            err.to_string(),
            "Invalid argument: k must be smaller than or equal to n"
        );
    }

    #[test]
    fn test_shape_display() {
        let err = QeError::Shape("expected (2, 3)".to_string());
        assert!(err.to_string().contains("(2, 3)"));
    }
}

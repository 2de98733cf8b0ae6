//! Error types for recurrence classification.
//!
//! Classifiers never print or log; every failure is handed back to the
//! caller as a [`SolverError`]. The command layer wraps these in
//! `anyhow::Error` with context before presenting them to the user.
//!
//! # Example
//!
//! ```rust
//! use recursolve::errors::SolverError;
//!
//! let err = SolverError::invalid_argument("b must be greater than 1 (got 1)");
//! assert!(err.is_invalid_argument());
//! assert_eq!(err.to_string(), "Invalid argument: b must be greater than 1 (got 1)");
//! ```

use thiserror::Error;

/// Failure modes shared by every classifier.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// Malformed or out-of-domain parameters: mismatched or empty sequences,
    /// `b <= 1`, non-finite values, negative weights.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The Akra-Bazzi root finder could not bracket or isolate `p`.
    #[error("No convergence after {iterations} iterations: {reason}")]
    NoConvergence { iterations: usize, reason: String },
}

impl SolverError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a no-convergence error.
    pub fn no_convergence(iterations: usize, reason: impl Into<String>) -> Self {
        Self::NoConvergence {
            iterations,
            reason: reason.into(),
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    pub fn is_no_convergence(&self) -> bool {
        matches!(self, Self::NoConvergence { .. })
    }
}

/// Result alias used throughout the classifier core.
pub type Result<T> = std::result::Result<T, SolverError>;

/// Reject `NaN` and infinities with a message naming the parameter.
pub(crate) fn ensure_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SolverError::invalid_argument(format!(
            "{} must be a finite number (got {})",
            name, value
        )))
    }
}

/// Reject a pair of parallel sequences that are empty or differ in length.
pub(crate) fn ensure_parallel(
    left_name: &str,
    left_len: usize,
    right_name: &str,
    right_len: usize,
) -> Result<()> {
    if left_len == 0 || right_len == 0 {
        return Err(SolverError::invalid_argument(format!(
            "{} and {} must not be empty",
            left_name, right_name
        )));
    }
    if left_len != right_len {
        return Err(SolverError::invalid_argument(format!(
            "{} and {} must have the same length (got {} and {})",
            left_name, right_name, left_len, right_len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SolverError::no_convergence(200, "bracket did not shrink");
        assert_eq!(
            err.to_string(),
            "No convergence after 200 iterations: bracket did not shrink"
        );
        assert!(err.is_no_convergence());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite("a", 2.0).is_ok());
        assert!(ensure_finite("a", f64::NAN).unwrap_err().is_invalid_argument());
        assert!(ensure_finite("k", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_parallel() {
        assert!(ensure_parallel("a", 2, "b", 2).is_ok());

        let err = ensure_parallel("a", 2, "b", 1).unwrap_err();
        assert!(err.to_string().contains("same length"));

        let err = ensure_parallel("sizes", 0, "weights", 0).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}

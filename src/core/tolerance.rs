use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default epsilon for case-boundary comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Floating-point tolerance for case boundaries.
///
/// Two values are treated as equal when `|x - y| <= epsilon * max(1, |x|, |y|)`.
/// The comparison is absolute near zero and relative for large magnitudes, so
/// `log_2(8)` (which evaluates to `2.9999999999999996`) still lands in the
/// balanced case against `k = 3`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tolerance {
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
        }
    }
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

impl Tolerance {
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Whether `x` and `y` are equal within this tolerance.
    pub fn approx_eq(&self, x: f64, y: f64) -> bool {
        let scale = 1.0_f64.max(x.abs()).max(y.abs());
        (x - y).abs() <= self.epsilon * scale
    }

    /// Three-way comparison that collapses near-equal values to `Equal`.
    pub fn compare(&self, x: f64, y: f64) -> Ordering {
        if self.approx_eq(x, y) {
            Ordering::Equal
        } else if x < y {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }

    /// A tolerance at least as loose as `epsilon`.
    pub fn widened_to(&self, epsilon: f64) -> Self {
        Self {
            epsilon: self.epsilon.max(epsilon),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(format!(
                "tolerance.epsilon must be a positive number (got {})",
                self.epsilon
            ));
        }
        if self.epsilon >= 0.1 {
            return Err(format!(
                "tolerance.epsilon must be smaller than 0.1 (got {})",
                self.epsilon
            ));
        }
        Ok(())
    }
}

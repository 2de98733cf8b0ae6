//! Closed-form recurrence classifiers.
//!
//! Each submodule implements one theorem as a pure `classify` function over
//! its parameter record. Classifiers share no state and never call each
//! other; all of them validate their input before computing anything.
//!
//! | Module              | Recurrence shape                          |
//! |---------------------|-------------------------------------------|
//! | [`master`]          | `T(n) = a T(n/b) + Θ(n^k)`                |
//! | [`extended_master`] | `T(n) = a T(n/b) + Θ(n^k (log n)^i)`      |
//! | [`akra_bazzi`]      | `T(n) = Σ a_i T(n/b_i) + Θ(n^k)`          |
//! | [`subtractive`]     | `T(n) = a T(n-b) + Θ(n^k)`                |
//! | [`approximation`]   | `T(n) = Σ w_i T(s_i n) + Θ(n^k)` (bounds) |

pub mod akra_bazzi;
pub mod approximation;
pub mod explain;
pub mod extended_master;
pub mod master;
pub mod root_finder;
pub mod subtractive;

pub use explain::{narrative, APPROXIMATION_NOTE};
pub use root_finder::{characteristic_function, find_root, Root, RootFinding};

use crate::core::{Tolerance, DEFAULT_PRECISION};

/// Numeric settings shared by every classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifyOptions {
    /// Case-boundary tolerance.
    pub tolerance: Tolerance,
    /// Akra-Bazzi root finder settings.
    pub root_finding: RootFinding,
    /// Decimals shown for exponents and parameters in rendered text.
    pub precision: usize,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            tolerance: Tolerance::default(),
            root_finding: RootFinding::default(),
            precision: DEFAULT_PRECISION,
        }
    }
}

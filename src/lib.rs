// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod solver;
pub mod theorems;

// Re-export commonly used types
pub use crate::core::{
    ApproximationParams, Bound, Classification, DividingParams, LogFactorParams,
    MultiBranchParams, Notation, SubtractiveParams, Theorem, Tolerance,
};

pub use crate::config::SolverConfig;
pub use crate::errors::SolverError;
pub use crate::solver::{Recurrence, Solution, Solver};
pub use crate::theorems::{ClassifyOptions, RootFinding};

/// Master Theorem with default settings.
pub fn master(a: f64, b: f64, k: f64) -> errors::Result<Classification> {
    theorems::master::classify(&DividingParams::new(a, b, k), &ClassifyOptions::default())
}

/// Extended Master Theorem with default settings.
pub fn extended_master(a: f64, b: f64, k: f64, i: f64) -> errors::Result<Classification> {
    theorems::extended_master::classify(
        &LogFactorParams::new(a, b, k, i),
        &ClassifyOptions::default(),
    )
}

/// Akra-Bazzi method with default settings.
pub fn akra_bazzi(a: &[f64], b: &[f64], k: f64) -> errors::Result<Classification> {
    theorems::akra_bazzi::classify(
        &MultiBranchParams::new(a.to_vec(), b.to_vec(), k),
        &ClassifyOptions::default(),
    )
}

/// Subtractive Master Theorem with default settings.
pub fn subtractive(a: f64, b: f64, k: f64) -> errors::Result<Classification> {
    theorems::subtractive::classify(&SubtractiveParams::new(a, b, k), &ClassifyOptions::default())
}

/// Approximation method with default settings.
pub fn approximation(sizes: &[f64], weights: &[f64], k: f64) -> errors::Result<Classification> {
    theorems::approximation::classify(
        &ApproximationParams::new(sizes.to_vec(), weights.to_vec(), k),
        &ClassifyOptions::default(),
    )
}

//! Well-known recurrences used as worked examples.

use crate::core::{
    ApproximationParams, DividingParams, LogFactorParams, MultiBranchParams, SubtractiveParams,
};
use crate::errors::Result;
use crate::solver::{Recurrence, Solution, Solver};
use serde::Serialize;

/// A named sample recurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub recurrence: Recurrence,
}

/// A catalog entry together with its solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub name: &'static str,
    #[serde(flatten)]
    pub solution: Solution,
}

fn entry(name: &'static str, recurrence: Recurrence) -> CatalogEntry {
    CatalogEntry { name, recurrence }
}

pub fn sample_recurrences() -> Vec<CatalogEntry> {
    vec![
        entry(
            "Merge sort",
            Recurrence::Master(DividingParams::new(2.0, 2.0, 1.0)),
        ),
        entry(
            "Binary search",
            Recurrence::Master(DividingParams::new(1.0, 2.0, 0.0)),
        ),
        entry(
            "Karatsuba multiplication",
            Recurrence::Master(DividingParams::new(3.0, 2.0, 1.0)),
        ),
        entry(
            "Strassen matrix multiplication",
            Recurrence::Master(DividingParams::new(7.0, 2.0, 2.0)),
        ),
        entry(
            "Naive blocked matrix multiplication",
            Recurrence::Master(DividingParams::new(8.0, 2.0, 2.0)),
        ),
        entry(
            "Merge sort with n log n merge",
            Recurrence::ExtendedMaster(LogFactorParams::new(2.0, 2.0, 1.0, 1.0)),
        ),
        entry(
            "Three-way split with n / log n combine",
            Recurrence::ExtendedMaster(LogFactorParams::new(3.0, 3.0, 1.0, -1.0)),
        ),
        entry(
            "Multiple recursion",
            Recurrence::AkraBazzi(MultiBranchParams::new(vec![3.0, 2.0], vec![2.0, 3.0], 1.0)),
        ),
        entry(
            "Unbalanced split",
            Recurrence::AkraBazzi(MultiBranchParams::new(vec![1.0, 1.0], vec![3.0, 1.5], 1.0)),
        ),
        entry(
            "Linear recursion",
            Recurrence::Subtractive(SubtractiveParams::new(1.0, 1.0, 0.0)),
        ),
        entry(
            "Selection sort",
            Recurrence::Subtractive(SubtractiveParams::new(1.0, 1.0, 1.0)),
        ),
        entry(
            "Towers of Hanoi",
            Recurrence::Subtractive(SubtractiveParams::new(2.0, 1.0, 0.0)),
        ),
        entry(
            "Exponential recursion with linear work",
            Recurrence::Subtractive(SubtractiveParams::new(2.0, 1.0, 1.0)),
        ),
        entry(
            "Different size subproblems",
            Recurrence::Approximation(ApproximationParams::new(
                vec![1.0 / 2.0, 1.0 / 3.0],
                vec![1.0, 1.0],
                1.0,
            )),
        ),
        entry(
            "Different sizes and weights",
            Recurrence::Approximation(ApproximationParams::new(
                vec![1.0 / 2.0, 1.0 / 4.0],
                vec![2.0, 3.0],
                2.0,
            )),
        ),
    ]
}

/// Solve every sample recurrence, stopping at the first failure.
pub fn solve_catalog(solver: &Solver) -> Result<Vec<CatalogRow>> {
    sample_recurrences()
        .into_iter()
        .map(|entry| {
            solver.solve(&entry.recurrence).map(|solution| CatalogRow {
                name: entry.name,
                solution,
            })
        })
        .collect()
}

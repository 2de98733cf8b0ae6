//! Heuristic bounds for recurrences with mixed subproblem sizes,
//! `T(n) = Σ w_i T(s_i n) + Θ(n^k)`.
//!
//! Instead of an exact answer this brackets the complexity between the
//! shallowest branch (largest `s_i`, shrinks slowest) and the deepest branch
//! (smallest `s_i`). The bound rows depend only on `k`:
//!
//! | `k`      | lower      | upper          |
//! |----------|------------|----------------|
//! | `0`      | `Ω(log n)` | `O(log n)`     |
//! | `1`      | `Ω(n)`     | `O(n log n)`   |
//! | other    | `Ω(n^k)`   | `O(n^k log n)` |
//!
//! The branch sizes are reported in the explanation but do not influence
//! the bounds. A per-branch recursion depth of `log_{1/s}(1/s)` is always
//! one, so it carries no information and is not computed.

use super::ClassifyOptions;
use crate::core::bound::{log_power, power_of_n, product};
use crate::core::{
    format_number, precision_apart, ApproximationParams, Bound, Classification, Theorem,
};
use crate::errors::{ensure_finite, ensure_parallel, Result, SolverError};

/// One branch of the recursion tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Branch {
    pub index: usize,
    pub size: f64,
    pub weight: f64,
}

/// Shallowest (largest size) and deepest (smallest size) branches.
///
/// Ties resolve to the first branch in input order.
pub fn extreme_branches(params: &ApproximationParams) -> Result<(Branch, Branch)> {
    validate(params)?;
    let branch = |index: usize| Branch {
        index,
        size: params.sizes[index],
        weight: params.weights[index],
    };

    let mut shallowest = 0;
    let mut deepest = 0;
    for (index, &size) in params.sizes.iter().enumerate().skip(1) {
        if size > params.sizes[shallowest] {
            shallowest = index;
        }
        if size < params.sizes[deepest] {
            deepest = index;
        }
    }
    Ok((branch(shallowest), branch(deepest)))
}

pub fn classify(params: &ApproximationParams, options: &ClassifyOptions) -> Result<Classification> {
    let (shallowest, deepest) = extreme_branches(params)?;

    let precision = options.precision;
    let tolerance = &options.tolerance;

    let (case, lower, upper) = if tolerance.approx_eq(params.k, 0.0) {
        (1, Bound::omega("log n"), Bound::big_o("log n"))
    } else if tolerance.approx_eq(params.k, 1.0) {
        (2, Bound::omega("n"), Bound::big_o("n log n"))
    } else {
        // k just off 0 or 1 must not print like those rows
        let digits = precision_apart(params.k, 0.0, precision_apart(params.k, 1.0, precision));
        let polynomial = power_of_n(params.k, digits);
        (
            3,
            Bound::omega(product([polynomial.clone()])),
            Bound::big_o(product([polynomial, log_power(1.0, precision)])),
        )
    };

    let comparison = format!(
        "Lower bound from shallowest branch (size factor: {}): {}\n\
         Upper bound from deepest branch (size factor: {}): {}",
        format_number(shallowest.size, precision),
        lower,
        format_number(deepest.size, precision),
        upper
    );

    Ok(Classification {
        theorem: Theorem::Approximation,
        case,
        complexity: upper,
        lower_bound: Some(lower),
        comparison,
        critical_exponent: None,
    })
}

fn validate(params: &ApproximationParams) -> Result<()> {
    ensure_parallel("sizes", params.sizes.len(), "weights", params.weights.len())?;
    ensure_finite("k", params.k)?;
    if params.k < 0.0 {
        return Err(SolverError::invalid_argument(format!(
            "k must be non-negative (got {})",
            params.k
        )));
    }
    for (index, (&size, &weight)) in params.sizes.iter().zip(&params.weights).enumerate() {
        ensure_finite(&format!("sizes[{}]", index), size)?;
        ensure_finite(&format!("weights[{}]", index), weight)?;
        if size <= 0.0 || size >= 1.0 {
            return Err(SolverError::invalid_argument(format!(
                "sizes[{}] must be strictly between 0 and 1 (got {})",
                index, size
            )));
        }
    }
    Ok(())
}

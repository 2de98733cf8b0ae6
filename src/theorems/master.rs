//! Master Theorem for `T(n) = a T(n/b) + Θ(n^k)`.
//!
//! With `x = log_b(a)`:
//!
//! - Case 1, `x > k`: the subproblems dominate, `Θ(n^x)`
//! - Case 2, `x ≈ k`: balanced, `Θ(n^k log n)`
//! - Case 3, `x < k`: the combine step dominates, `Θ(n^k)`

use super::explain::{log_expression, relation_symbol};
use super::ClassifyOptions;
use crate::core::bound::{log_power, power_of_n, product};
use crate::core::{
    format_number, precision_apart, Bound, Classification, DividingParams, Theorem,
};
use crate::errors::{ensure_finite, Result, SolverError};
use std::cmp::Ordering;

pub fn classify(params: &DividingParams, options: &ClassifyOptions) -> Result<Classification> {
    validate(params)?;

    let precision = options.precision;
    let x = params.a.ln() / params.b.ln();
    let ordering = options.tolerance.compare(x, params.k);

    // off the boundary, x must not print as k
    let digits = match ordering {
        Ordering::Equal => precision,
        _ => precision_apart(x, params.k, precision),
    };

    let (case, expression) = match ordering {
        Ordering::Greater => (1, product([power_of_n(x, digits)])),
        Ordering::Equal => (
            2,
            product([power_of_n(params.k, precision), log_power(1.0, precision)]),
        ),
        Ordering::Less => (3, product([power_of_n(params.k, precision)])),
    };

    let comparison = format!(
        "{} {} {}",
        log_expression(params.a, params.b, x, digits),
        relation_symbol(ordering),
        format_number(params.k, digits)
    );

    Ok(Classification {
        theorem: Theorem::Master,
        case,
        complexity: Bound::theta(expression),
        lower_bound: None,
        comparison,
        critical_exponent: Some(x),
    })
}

/// `a >= 1`, `b > 1`, `k >= 0`, all finite.
pub(crate) fn validate(params: &DividingParams) -> Result<()> {
    validate_dividing(params.a, params.b, params.k)
}

pub(crate) fn validate_dividing(a: f64, b: f64, k: f64) -> Result<()> {
    ensure_finite("a", a)?;
    ensure_finite("b", b)?;
    ensure_finite("k", k)?;
    if a < 1.0 {
        return Err(SolverError::invalid_argument(format!(
            "a must be at least 1 (got {})",
            a
        )));
    }
    if b <= 1.0 {
        return Err(SolverError::invalid_argument(format!(
            "b must be greater than 1 (got {})",
            b
        )));
    }
    if k < 0.0 {
        return Err(SolverError::invalid_argument(format!(
            "k must be non-negative (got {})",
            k
        )));
    }
    Ok(())
}

//! Subtractive ("decreasing") recurrences `T(n) = a T(n-b) + Θ(n^k)`.
//!
//! `a = 1` is a structural boundary rather than a measured quantity, so it
//! is tested with exact equality.

use super::ClassifyOptions;
use crate::core::bound::{exponential, power_of_n, product};
use crate::core::{
    format_number, precision_apart, Bound, Classification, SubtractiveParams, Theorem,
};
use crate::errors::{ensure_finite, Result, SolverError};

pub fn classify(params: &SubtractiveParams, options: &ClassifyOptions) -> Result<Classification> {
    validate(params)?;

    // a is never shown as 1 unless it is exactly 1
    let precision = precision_apart(params.a, 1.0, options.precision);
    let a = format_number(params.a, precision);

    let (case, expression, comparison) = if params.a < 1.0 {
        (
            1,
            product([power_of_n(params.k, precision)]),
            format!("a = {} < 1, dominated by the combine step", a),
        )
    } else if params.a == 1.0 {
        (
            2,
            product([power_of_n(params.k + 1.0, precision)]),
            "a = 1, sum of polynomial terms increases degree by 1".to_string(),
        )
    } else {
        let growth = exponential(params.a, params.b, precision);
        match power_of_n(params.k, precision) {
            None => (
                3,
                growth,
                format!("a = {} > 1, exponential growth dominates", a),
            ),
            Some(polynomial) => (
                3,
                format!("{}·{}", growth, polynomial),
                format!("a = {} > 1, exponential times polynomial growth", a),
            ),
        }
    };

    Ok(Classification {
        theorem: Theorem::Subtractive,
        case,
        complexity: Bound::theta(expression),
        lower_bound: None,
        comparison,
        critical_exponent: None,
    })
}

fn validate(params: &SubtractiveParams) -> Result<()> {
    ensure_finite("a", params.a)?;
    ensure_finite("b", params.b)?;
    ensure_finite("k", params.k)?;
    if params.b <= 0.0 {
        return Err(SolverError::invalid_argument(format!(
            "b must be greater than 0 (got {})",
            params.b
        )));
    }
    if params.k < 0.0 {
        return Err(SolverError::invalid_argument(format!(
            "k must be non-negative (got {})",
            params.k
        )));
    }
    Ok(())
}

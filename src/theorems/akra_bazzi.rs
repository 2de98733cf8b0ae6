//! Akra-Bazzi method for `T(n) = Σ a_i T(n/b_i) + Θ(n^k)`.
//!
//! Solves `Σ a_i · b_i^(-p) = 1` for the characteristic exponent `p`, then
//! compares the combine-step exponent against it:
//!
//! - Case 1, `k < p`: `Θ(n^p)`
//! - Case 2, `k ≈ p`: `Θ(n^p log n)`
//! - Case 3, `k > p`: `Θ(n^k)`
//!
//! `p` is only known to the root finder's tolerance, so the `k ≈ p` test
//! uses whichever of that tolerance and the case-boundary epsilon is looser.

use super::explain::relation_symbol;
use super::root_finder::find_root;
use super::ClassifyOptions;
use crate::core::bound::{log_power, power_of_n, product};
use crate::core::{
    format_number, precision_apart, Bound, Classification, MultiBranchParams, Theorem,
};
use crate::errors::{ensure_finite, ensure_parallel, Result, SolverError};
use std::cmp::Ordering;

pub fn classify(params: &MultiBranchParams, options: &ClassifyOptions) -> Result<Classification> {
    validate(params)?;

    let precision = options.precision;
    let root = find_root(&params.a, &params.b, &options.root_finding)?;
    let p = root.value;

    let tolerance = options
        .tolerance
        .widened_to(options.root_finding.tolerance);
    let ordering = tolerance.compare(params.k, p);

    let digits = match ordering {
        Ordering::Equal => precision,
        _ => precision_apart(p, params.k, precision),
    };

    let (case, expression) = match ordering {
        Ordering::Less => (1, product([power_of_n(p, digits)])),
        Ordering::Equal => (
            2,
            product([power_of_n(p, precision), log_power(1.0, precision)]),
        ),
        Ordering::Greater => (3, product([power_of_n(params.k, precision)])),
    };

    let comparison = format!(
        "k = {} {} p = {:.*}",
        format_number(params.k, digits),
        relation_symbol(ordering),
        digits,
        p
    );

    Ok(Classification {
        theorem: Theorem::AkraBazzi,
        case,
        complexity: Bound::theta(expression),
        lower_bound: None,
        comparison,
        critical_exponent: Some(p),
    })
}

fn validate(params: &MultiBranchParams) -> Result<()> {
    ensure_parallel("a", params.a.len(), "b", params.b.len())?;
    ensure_finite("k", params.k)?;
    if params.k < 0.0 {
        return Err(SolverError::invalid_argument(format!(
            "k must be non-negative (got {})",
            params.k
        )));
    }
    for (index, (&a, &b)) in params.a.iter().zip(&params.b).enumerate() {
        ensure_finite(&format!("a[{}]", index), a)?;
        ensure_finite(&format!("b[{}]", index), b)?;
        if a < 0.0 {
            return Err(SolverError::invalid_argument(format!(
                "a[{}] must be non-negative (got {})",
                index, a
            )));
        }
        if b <= 1.0 {
            return Err(SolverError::invalid_argument(format!(
                "b[{}] must be greater than 1 (got {})",
                index, b
            )));
        }
    }
    Ok(())
}

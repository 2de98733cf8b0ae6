//! Extended Master Theorem for `T(n) = a T(n/b) + Θ(n^k (log n)^i)`.
//!
//! Case numbering follows [`super::master`]: Case 1 is `log_b(a) > k`
//! (subproblems dominate) and Case 3 is `log_b(a) < k` (combine step
//! dominates). The balanced case splits on `i`:
//!
//! | `i`      | bound                     |
//! |----------|---------------------------|
//! | `> -1`   | `Θ(n^k (log n)^(i+1))`    |
//! | `≈ -1`   | `Θ(n^k log log n)`        |
//! | `< -1`   | `Θ(n^k)`                  |

use super::explain::{log_expression, relation_symbol};
use super::master::validate_dividing;
use super::ClassifyOptions;
use crate::core::bound::{log_power, power_of_n, product};
use crate::core::{
    format_number, precision_apart, Bound, Classification, LogFactorParams, Theorem,
};
use crate::errors::{ensure_finite, Result};
use std::cmp::Ordering;

pub fn classify(params: &LogFactorParams, options: &ClassifyOptions) -> Result<Classification> {
    validate_dividing(params.a, params.b, params.k)?;
    ensure_finite("i", params.i)?;

    let precision = options.precision;
    let tolerance = &options.tolerance;
    let x = params.a.ln() / params.b.ln();
    let ordering = tolerance.compare(x, params.k);

    let x_digits = match ordering {
        Ordering::Equal => precision,
        _ => precision_apart(x, params.k, precision),
    };
    let lhs = log_expression(params.a, params.b, x, x_digits);
    let k = format_number(params.k, x_digits);

    let (case, expression, comparison) = match ordering {
        Ordering::Greater => (
            1,
            product([power_of_n(x, x_digits)]),
            format!("{} > k = {}", lhs, k),
        ),
        Ordering::Less => (
            3,
            product([
                power_of_n(params.k, precision),
                log_power(params.i, precision),
            ]),
            format!("{} < k = {}", lhs, k),
        ),
        Ordering::Equal => {
            let log_ordering = tolerance.compare(params.i, -1.0);
            let expression = match log_ordering {
                Ordering::Greater => {
                    // (log n)^(i+1) must not collapse to nothing near i = -1
                    let exponent = params.i + 1.0;
                    product([
                        power_of_n(params.k, precision),
                        log_power(exponent, precision_apart(exponent, 0.0, precision)),
                    ])
                }
                Ordering::Equal => product([
                    power_of_n(params.k, precision),
                    Some("log log n".to_string()),
                ]),
                Ordering::Less => product([power_of_n(params.k, precision)]),
            };
            let comparison = match log_ordering {
                Ordering::Equal => format!(
                    "{} ≈ k = {}, i = {}",
                    lhs,
                    k,
                    format_number(params.i, precision)
                ),
                other => format!(
                    "{} ≈ k = {}, i = {} {} -1",
                    lhs,
                    k,
                    format_number(params.i, precision_apart(params.i, -1.0, precision)),
                    relation_symbol(other)
                ),
            };
            (2, expression, comparison)
        }
    };

    Ok(Classification {
        theorem: Theorem::ExtendedMaster,
        case,
        complexity: Bound::theta(expression),
        lower_bound: None,
        comparison,
        critical_exponent: Some(x),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: f64, b: f64, k: f64, i: f64) -> Classification {
        classify(
            &LogFactorParams::new(a, b, k, i),
            &ClassifyOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_balanced_without_log_factor() {
        let result = run(2.0, 2.0, 1.0, 0.0);
        assert_eq!(result.case, 2);
        assert_eq!(result.complexity.to_string(), "Θ(n log n)");
        assert_eq!(result.comparison, "log_2(2) = 1.000 ≈ k = 1, i = 0 > -1");
    }

    #[test]
    fn test_balanced_raises_log_power() {
        let result = run(2.0, 2.0, 1.0, 2.0);
        assert_eq!(result.complexity.to_string(), "Θ(n (log n)^3)");

        let result = run(8.0, 2.0, 3.0, 5.0);
        assert_eq!(result.complexity.to_string(), "Θ(n^3 (log n)^6)");
    }

    #[test]
    fn test_balanced_log_log() {
        let result = run(3.0, 3.0, 1.0, -1.0);
        assert_eq!(result.case, 2);
        assert_eq!(result.complexity.to_string(), "Θ(n log log n)");
        assert_eq!(result.comparison, "log_3(3) = 1.000 ≈ k = 1, i = -1");
    }

    #[test]
    fn test_balanced_below_minus_one() {
        let result = run(3.0, 3.0, 1.0, -2.0);
        assert_eq!(result.case, 2);
        assert_eq!(result.complexity.to_string(), "Θ(n)");
    }

    #[test]
    fn test_log_exponent_near_minus_one() {
        for i in [-1.0 - 1e-12, -1.0 + 1e-12] {
            let result = run(2.0, 2.0, 1.0, i);
            assert_eq!(result.complexity.to_string(), "Θ(n log log n)");
            assert_eq!(result.comparison, "log_2(2) = 1.000 ≈ k = 1, i = -1");
        }

        let below = run(2.0, 2.0, 1.0, -1.0000001);
        assert_eq!(below.complexity.to_string(), "Θ(n)");
        assert_eq!(
            below.comparison,
            "log_2(2) = 1.000 ≈ k = 1, i = -1.0000001 < -1"
        );

        let above = run(2.0, 2.0, 1.0, -0.9999999);
        assert_eq!(above.complexity.to_string(), "Θ(n (log n)^0.0000001)");
        assert_eq!(
            above.comparison,
            "log_2(2) = 1.000 ≈ k = 1, i = -0.9999999 > -1"
        );
        assert_ne!(above.complexity, below.complexity);
        assert_ne!(above.complexity.to_string(), "Θ(n log log n)");
    }

    #[test]
    fn test_subproblems_dominate() {
        let result = run(4.0, 2.0, 1.0, 1.0);
        assert_eq!(result.case, 1);
        assert_eq!(result.complexity.to_string(), "Θ(n^2)");
    }

    #[test]
    fn test_combine_step_dominates() {
        let result = run(2.0, 2.0, 2.0, 1.0);
        assert_eq!(result.case, 3);
        assert_eq!(result.complexity.to_string(), "Θ(n^2 log n)");

        let result = run(16.0, 2.0, 5.0, 3.0);
        assert_eq!(result.case, 3);
        assert_eq!(result.complexity.to_string(), "Θ(n^5 (log n)^3)");
    }

    #[test]
    fn test_rejects_non_finite_log_exponent() {
        let err = classify(
            &LogFactorParams::new(2.0, 2.0, 1.0, f64::NAN),
            &ClassifyOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }
}

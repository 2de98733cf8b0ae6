//! Asymptotic bounds and the growth-expression helpers that render them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of decimals used when printing exponents and parameters.
pub const DEFAULT_PRECISION: usize = 3;

/// Most decimals [`precision_apart`] will add; enough to separate any two
/// distinct finite `f64` of ordinary magnitude.
pub const MAX_DISTINCT_PRECISION: usize = 17;

/// Asymptotic notation family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Tight bound
    Theta,
    /// Upper bound
    BigO,
    /// Lower bound
    Omega,
}

impl Notation {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Theta => "Θ",
            Self::BigO => "O",
            Self::Omega => "Ω",
        }
    }
}

/// An asymptotic bound such as `Θ(n log n)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bound {
    pub notation: Notation,
    pub expression: String,
}

impl Bound {
    pub fn new(notation: Notation, expression: impl Into<String>) -> Self {
        Self {
            notation,
            expression: expression.into(),
        }
    }

    pub fn theta(expression: impl Into<String>) -> Self {
        Self::new(Notation::Theta, expression)
    }

    pub fn big_o(expression: impl Into<String>) -> Self {
        Self::new(Notation::BigO, expression)
    }

    pub fn omega(expression: impl Into<String>) -> Self {
        Self::new(Notation::Omega, expression)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.notation.symbol(), self.expression)
    }
}

/// Render `value` with at most `precision` decimals, trailing zeros trimmed.
///
/// `2.0` renders as `2`, `log_2(3)` as `1.585`, and `-0.0` as `0`.
pub fn format_number(value: f64, precision: usize) -> String {
    let rendered = format!("{:.*}", precision, value);
    let trimmed = if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.')
    } else {
        rendered.as_str()
    };
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Decimals needed for `value` not to print the same as `boundary`.
///
/// Starts from `precision` and adds digits until the two renderings differ.
/// Equal values keep `precision`. Classifiers use this once a case has put a
/// value strictly on one side of a boundary, so that `1.0000001` is not shown
/// as `1` and `n^1.0000001` is not collapsed to `n`.
pub fn precision_apart(value: f64, boundary: f64, precision: usize) -> usize {
    if value == boundary {
        return precision;
    }
    (precision..=MAX_DISTINCT_PRECISION.max(precision))
        .find(|&digits| format_number(value, digits) != format_number(boundary, digits))
        .unwrap_or(precision)
}

/// `n^e`, collapsing `n^0` to nothing and `n^1` to `n`.
pub fn power_of_n(exponent: f64, precision: usize) -> Option<String> {
    match format_number(exponent, precision).as_str() {
        "0" => None,
        "1" => Some("n".to_string()),
        e => Some(format!("n^{}", e)),
    }
}

/// `(log n)^e`, collapsing `(log n)^0` to nothing and `(log n)^1` to `log n`.
pub fn log_power(exponent: f64, precision: usize) -> Option<String> {
    match format_number(exponent, precision).as_str() {
        "0" => None,
        "1" => Some("log n".to_string()),
        e => Some(format!("(log n)^{}", e)),
    }
}

/// `a^(n/b)`, written `a^n` when `b` is one.
pub fn exponential(base: f64, divisor: f64, precision: usize) -> String {
    let base = format_number(base, precision);
    match format_number(divisor, precision).as_str() {
        "1" => format!("{}^n", base),
        d => format!("{}^(n/{})", base, d),
    }
}

/// Join growth factors with spaces; an empty product is `1`.
pub fn product<I>(factors: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    let parts: Vec<String> = factors.into_iter().flatten().collect();
    if parts.is_empty() {
        "1".to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0, 3), "2");
        assert_eq!(format_number(3.0_f64.log2(), 3), "1.585");
        assert_eq!(format_number(0.5, 3), "0.5");
        assert_eq!(format_number(-1.0, 3), "-1");
        assert_eq!(format_number(-0.0001, 3), "0");
        assert_eq!(format_number(1.0 / 3.0, 5), "0.33333");
    }

    #[test]
    fn test_growth_factors() {
        assert_eq!(power_of_n(0.0, 3), None);
        assert_eq!(power_of_n(1.0, 3).as_deref(), Some("n"));
        assert_eq!(power_of_n(2.0, 3).as_deref(), Some("n^2"));
        assert_eq!(log_power(1.0, 3).as_deref(), Some("log n"));
        assert_eq!(log_power(-2.0, 3).as_deref(), Some("(log n)^-2"));
        assert_eq!(exponential(2.0, 1.0, 3), "2^n");
        assert_eq!(exponential(3.0, 2.0, 3), "3^(n/2)");
    }

    #[test]
    fn test_precision_apart() {
        assert_eq!(precision_apart(1.5, 1.0, 3), 3);
        assert_eq!(precision_apart(1.0, 1.0, 3), 3);
        assert_eq!(precision_apart(1.0000001, 1.0, 3), 7);
        assert_eq!(precision_apart(-0.9999999, -1.0, 3), 7);
        assert_eq!(precision_apart(1e-7, 0.0, 3), 7);
        assert_eq!(precision_apart(2.0001, 2.0, 5), 5);
    }

    #[test]
    fn test_near_boundary_exponents_stay_distinct() {
        let digits = precision_apart(1e-7, 0.0, 3);
        assert_eq!(log_power(1e-7, digits).as_deref(), Some("(log n)^0.0000001"));

        let digits = precision_apart(1.0000002, 1.0, 3);
        assert_eq!(power_of_n(1.0000002, digits).as_deref(), Some("n^1.0000002"));
    }

    #[test]
    fn test_product() {
        assert_eq!(product([power_of_n(1.0, 3), log_power(1.0, 3)]), "n log n");
        assert_eq!(product([power_of_n(0.0, 3), log_power(0.0, 3)]), "1");
        assert_eq!(product([None, log_power(1.0, 3)]), "log n");
    }

    #[test]
    fn test_bound_display() {
        assert_eq!(Bound::theta("n log n").to_string(), "Θ(n log n)");
        assert_eq!(Bound::big_o("n").to_string(), "O(n)");
        assert_eq!(Bound::omega("log n").to_string(), "Ω(log n)");
    }
}

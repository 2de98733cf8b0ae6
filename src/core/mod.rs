pub mod bound;
pub mod tolerance;

pub use bound::{format_number, precision_apart, Bound, Notation, DEFAULT_PRECISION};
pub use tolerance::{Tolerance, DEFAULT_EPSILON};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed-form method used to classify a recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theorem {
    Master,
    ExtendedMaster,
    AkraBazzi,
    Subtractive,
    Approximation,
}

impl Theorem {
    pub const ALL: [Theorem; 5] = [
        Theorem::Master,
        Theorem::ExtendedMaster,
        Theorem::AkraBazzi,
        Theorem::Subtractive,
        Theorem::Approximation,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Master => "Master Theorem",
            Self::ExtendedMaster => "Extended Master Theorem",
            Self::AkraBazzi => "Akra-Bazzi Method",
            Self::Subtractive => "Subtractive Master Theorem",
            Self::Approximation => "Approximation Method",
        }
    }

    /// General shape of the recurrences the method accepts.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Master => "T(n) = a T(n/b) + Θ(n^k)",
            Self::ExtendedMaster => "T(n) = a T(n/b) + Θ(n^k (log n)^i)",
            Self::AkraBazzi => "T(n) = Σ a_i T(n/b_i) + Θ(n^k)",
            Self::Subtractive => "T(n) = a T(n-b) + Θ(n^k)",
            Self::Approximation => "T(n) = Σ w_i T(s_i n) + Θ(n^k)",
        }
    }
}

impl fmt::Display for Theorem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// `T(n) = a T(n/b) + Θ(n^k)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DividingParams {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

impl DividingParams {
    pub fn new(a: f64, b: f64, k: f64) -> Self {
        Self { a, b, k }
    }

    pub fn render(&self, precision: usize) -> String {
        format!(
            "T(n) = {} T(n/{}) + Θ(n^{})",
            format_number(self.a, precision),
            format_number(self.b, precision),
            format_number(self.k, precision)
        )
    }
}

/// `T(n) = a T(n/b) + Θ(n^k (log n)^i)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogFactorParams {
    pub a: f64,
    pub b: f64,
    pub k: f64,
    pub i: f64,
}

impl LogFactorParams {
    pub fn new(a: f64, b: f64, k: f64, i: f64) -> Self {
        Self { a, b, k, i }
    }

    pub fn render(&self, precision: usize) -> String {
        format!(
            "T(n) = {} T(n/{}) + Θ(n^{} (log n)^{})",
            format_number(self.a, precision),
            format_number(self.b, precision),
            format_number(self.k, precision),
            format_number(self.i, precision)
        )
    }
}

/// `T(n) = Σ a_i T(n/b_i) + Θ(n^k)`, with `a` and `b` as parallel sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiBranchParams {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub k: f64,
}

impl MultiBranchParams {
    pub fn new(a: Vec<f64>, b: Vec<f64>, k: f64) -> Self {
        Self { a, b, k }
    }

    pub fn render(&self, precision: usize) -> String {
        let branches: Vec<String> = self
            .a
            .iter()
            .zip(&self.b)
            .map(|(&a, &b)| {
                format!(
                    "{}T(n/{})",
                    weight_prefix(a, precision),
                    format_number(b, precision)
                )
            })
            .collect();
        format!(
            "T(n) = {} + Θ(n^{})",
            branches.join(" + "),
            format_number(self.k, precision)
        )
    }
}

/// `T(n) = a T(n-b) + Θ(n^k)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubtractiveParams {
    pub a: f64,
    pub b: f64,
    pub k: f64,
}

impl SubtractiveParams {
    pub fn new(a: f64, b: f64, k: f64) -> Self {
        Self { a, b, k }
    }

    pub fn render(&self, precision: usize) -> String {
        format!(
            "T(n) = {} T(n-{}) + Θ(n^{})",
            format_number(self.a, precision),
            format_number(self.b, precision),
            format_number(self.k, precision)
        )
    }
}

/// `T(n) = Σ w_i T(s_i n) + Θ(n^k)` with subproblem size fractions `0 < s_i < 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApproximationParams {
    pub sizes: Vec<f64>,
    pub weights: Vec<f64>,
    pub k: f64,
}

impl ApproximationParams {
    pub fn new(sizes: Vec<f64>, weights: Vec<f64>, k: f64) -> Self {
        Self { sizes, weights, k }
    }

    pub fn render(&self, precision: usize) -> String {
        let branches: Vec<String> = self
            .sizes
            .iter()
            .zip(&self.weights)
            .map(|(&s, &w)| {
                format!(
                    "{}T({})",
                    weight_prefix(w, precision),
                    fraction_of_n(s, precision)
                )
            })
            .collect();
        format!(
            "T(n) = {} + Θ(n^{})",
            branches.join(" + "),
            format_number(self.k, precision)
        )
    }
}

/// Coefficient in front of a branch; a unit weight is left implicit.
fn weight_prefix(weight: f64, precision: usize) -> String {
    match format_number(weight, precision).as_str() {
        "1" => String::new(),
        w => w.to_string(),
    }
}

/// `n/d` when `1/s` is a whole number, otherwise `n·s`.
fn fraction_of_n(size: f64, precision: usize) -> String {
    let denominator = 1.0 / size;
    let rounded = denominator.round();
    if rounded >= 1.0 && (denominator - rounded).abs() <= 1e-9 * denominator {
        format!("n/{}", format_number(rounded, 0))
    } else {
        format!("n·{}", format_number(size, precision))
    }
}

/// Outcome of classifying one recurrence.
///
/// Exact methods fill `complexity` with a tight bound and leave
/// `lower_bound` empty. The approximation method brackets the answer:
/// `lower_bound` holds the `Ω` bound and `complexity` the `O` bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub theorem: Theorem,
    /// Theorem-specific case number, starting at 1.
    pub case: u8,
    pub complexity: Bound,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<Bound>,
    /// The inequality that selected the case, with the actual values substituted.
    pub comparison: String,
    /// `log_b(a)` for the divide-and-conquer theorems, `p` for Akra-Bazzi.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_exponent: Option<f64>,
}

impl Classification {
    pub fn is_exact(&self) -> bool {
        self.lower_bound.is_none()
    }

    /// `Θ(n log n)`, or `Ω(n) to O(n log n)` for bracketed results.
    pub fn summary(&self) -> String {
        match &self.lower_bound {
            Some(lower) => format!("{} to {}", lower, self.complexity),
            None => self.complexity.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dividing() {
        let params = DividingParams::new(2.0, 2.0, 1.0);
        assert_eq!(params.render(3), "T(n) = 2 T(n/2) + Θ(n^1)");

        let params = LogFactorParams::new(3.0, 3.0, 1.0, -1.0);
        assert_eq!(params.render(3), "T(n) = 3 T(n/3) + Θ(n^1 (log n)^-1)");
    }

    #[test]
    fn test_render_subtractive() {
        let params = SubtractiveParams::new(0.5, 1.0, 2.0);
        assert_eq!(params.render(3), "T(n) = 0.5 T(n-1) + Θ(n^2)");
    }

    #[test]
    fn test_render_branches() {
        let params = MultiBranchParams::new(vec![3.0, 2.0], vec![2.0, 3.0], 1.0);
        assert_eq!(params.render(3), "T(n) = 3T(n/2) + 2T(n/3) + Θ(n^1)");

        let params = ApproximationParams::new(vec![0.5, 1.0 / 3.0], vec![1.0, 1.0], 1.0);
        assert_eq!(params.render(3), "T(n) = T(n/2) + T(n/3) + Θ(n^1)");

        let params = ApproximationParams::new(vec![2.0 / 3.0], vec![2.0], 2.0);
        assert_eq!(params.render(3), "T(n) = 2T(n·0.667) + Θ(n^2)");
    }

    #[test]
    fn test_summary() {
        let exact = Classification {
            theorem: Theorem::Master,
            case: 2,
            complexity: Bound::theta("n log n"),
            lower_bound: None,
            comparison: String::new(),
            critical_exponent: Some(1.0),
        };
        assert!(exact.is_exact());
        assert_eq!(exact.summary(), "Θ(n log n)");

        let bracketed = Classification {
            theorem: Theorem::Approximation,
            case: 2,
            complexity: Bound::big_o("n log n"),
            lower_bound: Some(Bound::omega("n")),
            comparison: String::new(),
            critical_exponent: None,
        };
        assert!(!bracketed.is_exact());
        assert_eq!(bracketed.summary(), "Ω(n) to O(n log n)");
    }
}

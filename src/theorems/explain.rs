//! Plain-language explanations attached to classification results.

use crate::core::{format_number, Theorem};

/// Caveat printed with every approximation result.
pub const APPROXIMATION_NOTE: &str = "This is an approximation based on the depth of recursion \
     trees on the shallowest and deepest branches.";

/// One-line explanation of what dominates in a given case.
///
/// Returns `None` for a case number the theorem does not define.
pub fn narrative(theorem: Theorem, case: u8) -> Option<&'static str> {
    let text = match (theorem, case) {
        (Theorem::Master | Theorem::ExtendedMaster | Theorem::AkraBazzi, 1) => {
            "The subproblems dominate."
        }
        (Theorem::Master | Theorem::ExtendedMaster | Theorem::AkraBazzi, 2) => {
            "The subproblems and the combine step contribute equally."
        }
        (Theorem::Master | Theorem::ExtendedMaster | Theorem::AkraBazzi, 3) => {
            "The combine step dominates."
        }
        (Theorem::Subtractive, 1) => {
            "The combine step dominates, resulting in a polynomial time complexity."
        }
        (Theorem::Subtractive, 2) => {
            "Each level adds a polynomial factor, increasing the degree by 1."
        }
        (Theorem::Subtractive, 3) => {
            "The recursive calls dominate, resulting in exponential time complexity."
        }
        (Theorem::Approximation, 1) => "Constant work per level across the recursion tree.",
        (Theorem::Approximation, 2) => "Linear work per level across the recursion tree.",
        (Theorem::Approximation, 3) => "Polynomial work per level across the recursion tree.",
        _ => return None,
    };
    Some(text)
}

/// `log_2(3) = 1.585`, the left-hand side of every divide-and-conquer comparison.
pub(crate) fn log_expression(a: f64, b: f64, x: f64, precision: usize) -> String {
    format!(
        "log_{}({}) = {:.*}",
        format_number(b, precision),
        format_number(a, precision),
        precision,
        x
    )
}

pub(crate) fn relation_symbol(ordering: std::cmp::Ordering) -> &'static str {
    match ordering {
        std::cmp::Ordering::Less => "<",
        std::cmp::Ordering::Equal => "≈",
        std::cmp::Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;

    #[test]
    fn test_every_case_has_narrative() {
        for theorem in Theorem::ALL {
            for case in 1..=3 {
                assert!(
                    narrative(theorem, case).is_some(),
                    "{} case {} has no narrative",
                    theorem,
                    case
                );
            }
            assert!(narrative(theorem, 4).is_none());
        }
    }

    #[test]
    fn test_log_expression() {
        assert_eq!(
            log_expression(3.0, 2.0, 3.0_f64.log2(), 3),
            "log_2(3) = 1.585"
        );
        assert_eq!(log_expression(2.0, 2.0, 1.0, 3), "log_2(2) = 1.000");
    }

    #[test]
    fn test_relation_symbol() {
        assert_eq!(relation_symbol(Ordering::Less), "<");
        assert_eq!(relation_symbol(Ordering::Equal), "≈");
        assert_eq!(relation_symbol(Ordering::Greater), ">");
    }
}

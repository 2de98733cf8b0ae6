//! Bisection solver for the Akra-Bazzi characteristic equation.
//!
//! `g(p) = Σ a_i · b_i^(-p) - 1` is strictly decreasing whenever every
//! `b_i > 1` and at least one `a_i > 0`, so a single sign change brackets
//! the unique root and bisection is enough.

use crate::errors::{Result, SolverError};
use serde::{Deserialize, Serialize};

/// Root finder settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootFinding {
    /// Stop once the bracket is narrower than this.
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Bisection steps allowed before giving up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Centre of the initial bracket.
    #[serde(default = "default_seed")]
    pub seed: f64,

    /// Largest half-width the bracket may grow to while searching for a sign change.
    #[serde(default = "default_max_bracket")]
    pub max_bracket: f64,
}

impl Default for RootFinding {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: default_seed(),
            max_bracket: default_max_bracket(),
        }
    }
}

fn default_tolerance() -> f64 {
    1e-6
}
fn default_max_iterations() -> usize {
    200
}
fn default_seed() -> f64 {
    0.5
}
fn default_max_bracket() -> f64 {
    1024.0
}

impl RootFinding {
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(format!(
                "root_finding.tolerance must be a positive number (got {})",
                self.tolerance
            ));
        }
        if self.max_iterations == 0 {
            return Err("root_finding.max_iterations must be greater than 0".to_string());
        }
        if !self.seed.is_finite() {
            return Err(format!(
                "root_finding.seed must be finite (got {})",
                self.seed
            ));
        }
        if !self.max_bracket.is_finite() || self.max_bracket < 1.0 {
            return Err(format!(
                "root_finding.max_bracket must be at least 1 (got {})",
                self.max_bracket
            ));
        }
        Ok(())
    }
}

/// A located root and the number of bisection steps it took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Root {
    pub value: f64,
    pub iterations: usize,
}

/// `g(p) = Σ a_i · b_i^(-p) - 1`.
///
/// Zero weights are skipped so that an overflowing `b_i^(-p)` cannot turn
/// into `0 · ∞ = NaN`.
pub fn characteristic_function(a: &[f64], b: &[f64], p: f64) -> f64 {
    a.iter()
        .zip(b)
        .filter(|(&weight, _)| weight != 0.0)
        .map(|(&weight, &factor)| weight * factor.powf(-p))
        .sum::<f64>()
        - 1.0
}

/// Find the root of [`characteristic_function`].
///
/// Callers are expected to have validated the inputs (equal lengths,
/// `b_i > 1`, `a_i >= 0`).
pub fn find_root(a: &[f64], b: &[f64], settings: &RootFinding) -> Result<Root> {
    let g = |p: f64| characteristic_function(a, b, p);
    let (mut lo, mut hi) = bracket(&g, settings)?;

    for iteration in 1..=settings.max_iterations {
        let mid = lo + (hi - lo) / 2.0;
        let value = g(mid);
        if value == 0.0 || (hi - lo) / 2.0 < settings.tolerance {
            return Ok(Root {
                value: mid,
                iterations: iteration,
            });
        }
        if value > 0.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(SolverError::no_convergence(
        settings.max_iterations,
        format!(
            "bracket [{}, {}] is still wider than tolerance {}",
            lo, hi, settings.tolerance
        ),
    ))
}

/// Grow `[seed - w, seed + w]` by doubling `w` until `g(lo) >= 0 >= g(hi)`.
fn bracket<G>(g: &G, settings: &RootFinding) -> Result<(f64, f64)>
where
    G: Fn(f64) -> f64,
{
    let mut half_width = 1.0;
    let mut expansions = 0;
    loop {
        let lo = settings.seed - half_width;
        let hi = settings.seed + half_width;
        if g(lo) >= 0.0 && g(hi) <= 0.0 {
            return Ok((lo, hi));
        }
        if half_width >= settings.max_bracket {
            return Err(SolverError::no_convergence(
                expansions,
                format!("g(p) has no sign change in [{}, {}]", lo, hi),
            ));
        }
        half_width *= 2.0;
        expansions += 1;
    }
}

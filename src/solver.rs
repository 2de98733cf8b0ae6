//! Dispatch from a recurrence description to the matching classifier.

use crate::config::SolverConfig;
use crate::core::{
    ApproximationParams, Classification, DividingParams, LogFactorParams, MultiBranchParams,
    SubtractiveParams, Theorem,
};
use crate::errors::Result;
use crate::theorems::{
    akra_bazzi, approximation, extended_master, master, narrative, subtractive, ClassifyOptions,
    APPROXIMATION_NOTE,
};
use serde::{Deserialize, Serialize};

/// A recurrence in one of the shapes the classifiers understand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "theorem", rename_all = "snake_case")]
pub enum Recurrence {
    Master(DividingParams),
    ExtendedMaster(LogFactorParams),
    AkraBazzi(MultiBranchParams),
    Subtractive(SubtractiveParams),
    Approximation(ApproximationParams),
}

impl Recurrence {
    pub fn theorem(&self) -> Theorem {
        match self {
            Self::Master(_) => Theorem::Master,
            Self::ExtendedMaster(_) => Theorem::ExtendedMaster,
            Self::AkraBazzi(_) => Theorem::AkraBazzi,
            Self::Subtractive(_) => Theorem::Subtractive,
            Self::Approximation(_) => Theorem::Approximation,
        }
    }

    /// `T(n) = ...` with parameters printed at `precision` decimals.
    pub fn render(&self, precision: usize) -> String {
        match self {
            Self::Master(p) => p.render(precision),
            Self::ExtendedMaster(p) => p.render(precision),
            Self::AkraBazzi(p) => p.render(precision),
            Self::Subtractive(p) => p.render(precision),
            Self::Approximation(p) => p.render(precision),
        }
    }

    pub fn classify(&self, options: &ClassifyOptions) -> Result<Classification> {
        match self {
            Self::Master(p) => master::classify(p, options),
            Self::ExtendedMaster(p) => extended_master::classify(p, options),
            Self::AkraBazzi(p) => akra_bazzi::classify(p, options),
            Self::Subtractive(p) => subtractive::classify(p, options),
            Self::Approximation(p) => approximation::classify(p, options),
        }
    }
}

/// A classified recurrence ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub recurrence: String,
    #[serde(flatten)]
    pub classification: Classification,
    /// Plain-language reading of the case.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<&'static str>,
    /// Caveat attached to non-exact results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<&'static str>,
}

/// Classifies recurrences under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Solver {
    options: ClassifyOptions,
}

impl Solver {
    pub fn new(config: &SolverConfig) -> Self {
        Self {
            options: config.classify_options(),
        }
    }

    pub fn with_options(options: ClassifyOptions) -> Self {
        Self { options }
    }

    pub fn solve(&self, recurrence: &Recurrence) -> Result<Solution> {
        let classification = recurrence.classify(&self.options)?;
        let narrative = narrative(classification.theorem, classification.case);
        let note = if classification.is_exact() {
            None
        } else {
            Some(APPROXIMATION_NOTE)
        };
        Ok(Solution {
            recurrence: recurrence.render(self.options.precision),
            classification,
            narrative,
            note,
        })
    }
}

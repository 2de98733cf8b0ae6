//! Solver configuration loaded from `.recursolve.toml`.
//!
//! ```toml
//! [tolerance]
//! epsilon = 1e-9
//!
//! [root_finding]
//! tolerance = 1e-6
//! max_iterations = 200
//! seed = 0.5
//! max_bracket = 1024.0
//!
//! [display]
//! precision = 3
//! color = "auto"
//! ```
//!
//! Every section and field is optional; missing values fall back to the
//! defaults shown above.

pub mod display;
pub mod loader;

pub use display::DisplayConfig;
pub use loader::{
    directory_ancestors, load_config, load_config_from, parse_and_validate_config,
    CONFIG_FILE_NAME,
};

use crate::core::Tolerance;
use crate::theorems::{ClassifyOptions, RootFinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    #[serde(default)]
    pub tolerance: Tolerance,

    #[serde(default)]
    pub root_finding: RootFinding,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl SolverConfig {
    /// Numeric settings handed to the classifiers.
    pub fn classify_options(&self) -> ClassifyOptions {
        ClassifyOptions {
            tolerance: self.tolerance,
            root_finding: self.root_finding,
            precision: self.display.precision,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        self.tolerance.validate()?;
        self.root_finding.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

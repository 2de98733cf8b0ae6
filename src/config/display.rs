use crate::core::DEFAULT_PRECISION;
use crate::formatting::ColorMode;
use serde::{Deserialize, Serialize};

/// Largest number of decimals accepted for `display.precision`.
pub const MAX_PRECISION: usize = 12;

/// Display settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimals shown for exponents and parameters
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Terminal color mode (auto, always, never)
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            color: ColorMode::default(),
        }
    }
}

fn default_precision() -> usize {
    DEFAULT_PRECISION
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.precision > MAX_PRECISION {
            return Err(format!(
                "display.precision must be at most {} (got {})",
                MAX_PRECISION, self.precision
            ));
        }
        Ok(())
    }
}

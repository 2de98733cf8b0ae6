pub mod catalog;
pub mod init;
pub mod solve;

use crate::cli::Cli;
use crate::config::{load_config, SolverConfig};
use crate::formatting::{ColorMode, FormattingConfig};

/// Settings shared by every command after config and flags are merged.
pub struct CommandContext {
    pub config: SolverConfig,
    pub formatting: FormattingConfig,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Self {
        let config = load_config(cli.config.as_deref());
        let formatting = resolve_formatting(&config, cli.color, cli.plain);
        Self { config, formatting }
    }
}

/// `--plain` beats `--color`, which beats the environment, which beats the config file.
pub fn resolve_formatting(
    config: &SolverConfig,
    color: Option<ColorMode>,
    plain: bool,
) -> FormattingConfig {
    if plain {
        return FormattingConfig::plain();
    }
    match color {
        Some(mode) => FormattingConfig::new(mode),
        None => FormattingConfig::from_env(config.display.color),
    }
}

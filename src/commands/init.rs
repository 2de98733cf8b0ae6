use crate::config::CONFIG_FILE_NAME;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG: &str = r#"# recursolve configuration

[tolerance]
# Values within epsilon * max(1, |x|, |y|) are treated as equal at case boundaries
epsilon = 1e-9

[root_finding]
# Akra-Bazzi bisection settings
tolerance = 1e-6
max_iterations = 200
seed = 0.5
max_bracket = 1024.0

[display]
precision = 3
color = "auto"
"#;

pub fn init_config(force: bool) -> Result<()> {
    write_default_config(Path::new(CONFIG_FILE_NAME), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    log::debug!("Wrote default config to {}", config_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{parse_and_validate_config, SolverConfig};

    #[test]
    fn test_default_config_round_trips() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, SolverConfig::default());
    }

    #[test]
    fn test_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        write_default_config(&path, false).unwrap();
        let err = write_default_config(&path, false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        write_default_config(&path, true).unwrap();
    }
}

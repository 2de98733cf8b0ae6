use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::SolverConfig;

pub const CONFIG_FILE_NAME: &str = ".recursolve.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Contents of `path`, or `None` when it does not exist or cannot be read.
pub(crate) fn read_config_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Failed to read config file {}: {}", path.display(), e);
            None
        }
    }
}

/// Pure function to parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<SolverConfig, String> {
    let config = toml::from_str::<SolverConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;
    config
        .validate()
        .map_err(|e| format!("Invalid {}: {}", CONFIG_FILE_NAME, e))?;
    Ok(config)
}

/// Try loading config from a specific path, warning on anything but a missing file
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<SolverConfig> {
    let contents = read_config_file(config_path)?;
    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{} ({}). Using defaults.", e, config_path.display());
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its parents for `.recursolve.toml`.
pub fn load_config_from(start: PathBuf) -> SolverConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            SolverConfig::default()
        })
}

/// Load config from an explicit path, or search from the current directory.
pub fn load_config(explicit: Option<&Path>) -> SolverConfig {
    if let Some(path) = explicit {
        return try_load_config_from_path(path).unwrap_or_default();
    }

    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            SolverConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_and_validate_config("[display]\nprecision = 5\n").unwrap();
        assert_eq!(config.display.precision, 5);
        assert_eq!(config.tolerance.epsilon, 1e-9);
        assert_eq!(config.root_finding.max_iterations, 200);
    }

    #[test]
    fn test_parse_rejects_invalid_values() {
        let err = parse_and_validate_config("[root_finding]\nmax_iterations = 0\n").unwrap_err();
        assert!(err.contains("max_iterations"));

        let err = parse_and_validate_config("[tolerance]\nepsilon = -1.0\n").unwrap_err();
        assert!(err.contains("epsilon"));
    }

    #[test]
    fn test_parse_rejects_malformed_toml() {
        let err = parse_and_validate_config("[display\n").unwrap_err();
        assert!(err.starts_with("Failed to parse"));
    }

    #[test]
    fn test_missing_or_unreadable_file_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_config_file(&dir.path().join(CONFIG_FILE_NAME)), None);
        // a directory cannot be read as a file
        assert_eq!(read_config_file(dir.path()), None);
        assert!(try_load_config_from_path(dir.path()).is_none());

        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display]\nprecision = 4\n").unwrap();
        assert_eq!(read_config_file(&path).as_deref(), Some("[display]\nprecision = 4\n"));
        assert_eq!(try_load_config_from_path(&path).unwrap().display.precision, 4);
    }

    #[test]
    fn test_directory_ancestors() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c"), 10).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b"),
                PathBuf::from("/a"),
                PathBuf::from("/"),
            ]
        );
        assert_eq!(directory_ancestors(PathBuf::from("/a/b/c"), 2).count(), 2);
    }
}

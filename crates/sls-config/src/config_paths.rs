//! Resolution of the configuration file location
//!
//! The lookup order is:
//! - an explicit path (the `--config` flag)
//! - the `SLSGEN_CONFIG` environment variable, when set and non-empty
//! - `slsgen.toml` in the working directory, when it exists
//!
//! When none of these apply the generator runs on built-in defaults.

use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "SLSGEN_CONFIG";

/// Config file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "slsgen.toml";

/// Resolve which config file should be loaded, if any
///
/// # Arguments
///
/// * `explicit` - Path given on the command line
/// * `cwd` - Directory searched for [`DEFAULT_CONFIG_FILE`]
///
/// # Returns
///
/// The config file to load, or `None` to use defaults
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        let trimmed = env_path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }

    let local = cwd.join(DEFAULT_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_path_wins() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "").ok();

        let explicit = PathBuf::from("/etc/slsgen/custom.toml");
        let resolved = resolve_config_path(Some(&explicit), temp_dir.path());
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn test_local_config_file_detected() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        if std::env::var(CONFIG_ENV_VAR).is_ok() {
            return;
        }
        assert!(fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "").is_ok());

        let resolved = resolve_config_path(None, temp_dir.path());
        assert_eq!(resolved, Some(temp_dir.path().join(DEFAULT_CONFIG_FILE)));
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        if std::env::var(CONFIG_ENV_VAR).is_ok() {
            return;
        }
        assert_eq!(resolve_config_path(None, temp_dir.path()), None);
    }
}

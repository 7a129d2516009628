use crate::commands::load_config;
use crate::logger;
use crate::GlobalOpts;
use anyhow::{bail, Result};
use clap::Subcommand;
use colored::*;
use sls_config::{resolve_config_path, GeneratorConfig, DEFAULT_CONFIG_FILE};
use std::fs;
use std::path::PathBuf;

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file that would be loaded
    Path,
    /// Write a config file with the default settings
    Init {
        /// Target file (default: slsgen.toml)
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

pub fn handle_config(action: ConfigAction, opts: &GlobalOpts) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = load_config(opts, None)?;
            println!("{}", "Configuration:".bold().green());
            for (key, value) in config.values_iter() {
                println!("  {}: {}", key.cyan(), value);
            }
        }
        ConfigAction::Path => {
            let cwd = std::env::current_dir()?;
            match resolve_config_path(opts.config.as_deref(), &cwd) {
                Some(path) => println!("{}", path.display()),
                None => println!("{}", "(none, using defaults)".yellow()),
            }
        }
        ConfigAction::Init { file, force } => {
            let path = file.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            fs::write(&path, GeneratorConfig::default().to_toml_string()?)?;
            logger::success(&format!("Created {}", path.display()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn normal_opts() -> GlobalOpts {
        GlobalOpts {
            no_stdout: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_config_show() {
        assert!(handle_config(ConfigAction::Show, &normal_opts()).is_ok());
    }

    #[test]
    fn test_config_init_writes_defaults() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("slsgen.toml");
        let action = ConfigAction::Init {
            file: Some(path.clone()),
            force: false,
        };
        assert!(handle_config(action, &normal_opts()).is_ok());

        let loaded = GeneratorConfig::load(Some(&path));
        assert!(loaded.is_ok_and(|c| c == GeneratorConfig::default()));
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let path = temp_dir.path().join("slsgen.toml");
        assert!(fs::write(&path, "manifest-name = \"custom.xml\"\n").is_ok());

        let action = ConfigAction::Init {
            file: Some(path.clone()),
            force: false,
        };
        assert!(handle_config(action, &normal_opts()).is_err());
        assert_eq!(
            fs::read_to_string(&path).unwrap_or_default(),
            "manifest-name = \"custom.xml\"\n"
        );
    }
}

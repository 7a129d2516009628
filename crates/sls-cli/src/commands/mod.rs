pub mod config;
pub mod generate;

use crate::GlobalOpts;
use anyhow::Result;
use sls_config::{resolve_config_path, GeneratorConfig};
use std::path::PathBuf;

/// Load the effective configuration: config file, then the positional root
pub fn load_config(opts: &GlobalOpts, examples_root: Option<PathBuf>) -> Result<GeneratorConfig> {
    let cwd = std::env::current_dir()?;
    let path = resolve_config_path(opts.config.as_deref(), &cwd);
    let config = GeneratorConfig::load(path.as_deref())?;
    Ok(match examples_root {
        Some(root) => config.with_examples_root(root),
        None => config,
    })
}

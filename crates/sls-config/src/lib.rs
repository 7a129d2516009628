//! Configuration for the slsgen manifest generator
//!
//! [`GeneratorConfig`] names the examples root, the template output
//! directory and file, the SDK placeholder and the directory and extension
//! filters. It is loaded from TOML, validated once at startup and then
//! passed down to the manifest builder.

pub mod config_paths;
pub mod errors;
pub mod generator_config;

pub use config_paths::{resolve_config_path, CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
pub use errors::ConfigError;
pub use generator_config::GeneratorConfig;

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_TEMPLATE_DIR: &str = "_template";
const DEFAULT_MANIFEST_NAME: &str = "manifestPeripheralExamples.xml";
const DEFAULT_SDK_PLACEHOLDER: &str = "../app/mcu_peripheral_examples";

/// Settings for one manifest generation run
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root holding one directory per example category
    pub examples_root: PathBuf,
    /// Output directory, relative to `examples_root` unless absolute
    pub template_dir: PathBuf,
    /// File name of the generated manifest
    pub manifest_name: String,
    /// Replaces every `..` segment of the emitted project file paths
    pub sdk_placeholder: String,
    /// Top-level directory names never scanned (hidden directories are always skipped)
    pub excluded_dirs: Vec<String>,
    /// Extensions of sibling build-tool project files, without the dot
    pub project_extensions: Vec<String>,
    /// Extension of project descriptor files, without the dot
    pub descriptor_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            examples_root: PathBuf::from("."),
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            sdk_placeholder: DEFAULT_SDK_PLACEHOLDER.to_string(),
            excluded_dirs: vec!["Scripts".to_string(), DEFAULT_TEMPLATE_DIR.to_string()],
            project_extensions: vec!["eww".to_string()],
            descriptor_extension: "slsproj".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Load the config from `path`, or return defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        debug!("Loading config from {:?}", path);
        let content =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))
    }

    /// Render the config as pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(ConfigError::Serialize)
    }

    /// Replace the examples root (the positional CLI argument)
    pub fn with_examples_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.examples_root = root.into();
        self
    }

    /// Check the settings before any file is touched
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.examples_root.is_dir() {
            return Err(ConfigError::Validation(format!(
                "examples-root is not a directory: {}",
                self.examples_root.display()
            )));
        }
        if self.manifest_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "manifest-name must not be empty".to_string(),
            ));
        }
        if self.sdk_placeholder.trim().is_empty() {
            return Err(ConfigError::Validation(
                "sdk-placeholder must not be empty".to_string(),
            ));
        }
        if self.project_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "project-extensions must list at least one extension".to_string(),
            ));
        }
        let dotted = self
            .project_extensions
            .iter()
            .chain(std::iter::once(&self.descriptor_extension))
            .find(|ext| ext.is_empty() || ext.starts_with('.'));
        if let Some(ext) = dotted {
            return Err(ConfigError::Validation(format!(
                "extensions must be non-empty and given without a leading dot: '{}'",
                ext
            )));
        }
        Ok(())
    }

    /// Directory the manifest is written to
    pub fn template_path(&self) -> PathBuf {
        self.examples_root.join(&self.template_dir)
    }

    /// Full path of the generated manifest
    pub fn manifest_path(&self) -> PathBuf {
        self.template_path().join(&self.manifest_name)
    }

    /// Whether a top-level directory name must be skipped
    pub fn is_excluded(&self, dir_name: &str) -> bool {
        dir_name.starts_with('.')
            || self.excluded_dirs.iter().any(|d| d == dir_name)
            || self.template_dir.as_os_str() == dir_name
    }

    /// Key/value pairs for display
    pub fn values_iter(&self) -> Vec<(&str, String)> {
        vec![
            ("examples-root", self.examples_root.display().to_string()),
            ("template-dir", self.template_dir.display().to_string()),
            ("manifest-name", self.manifest_name.clone()),
            ("sdk-placeholder", self.sdk_placeholder.clone()),
            ("excluded-dirs", self.excluded_dirs.join(", ")),
            ("project-extensions", self.project_extensions.join(", ")),
            ("descriptor-extension", self.descriptor_extension.clone()),
        ]
    }
}

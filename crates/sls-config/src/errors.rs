use std::path::PathBuf;

/// Error type for loading and validating the generator configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read
    Io(PathBuf, std::io::Error),
    /// The config file is not valid TOML for [`crate::GeneratorConfig`]
    Parse(PathBuf, toml::de::Error),
    /// The config could not be rendered back to TOML
    Serialize(toml::ser::Error),
    /// A value failed startup validation
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "Failed to read config {}: {}", path.display(), err)
            }
            ConfigError::Parse(path, err) => {
                write!(f, "Failed to parse config {}: {}", path.display(), err)
            }
            ConfigError::Serialize(err) => write!(f, "Failed to serialize config: {}", err),
            ConfigError::Validation(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
            ConfigError::Validation(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation("sdk-placeholder must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: sdk-placeholder must not be empty"
        );
    }
}

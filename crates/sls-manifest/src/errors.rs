use quick_xml::events::attributes::AttrError;
use sls_config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a project descriptor file
#[derive(Error, Debug)]
pub enum DescriptorError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid attribute: {0}")]
    Attribute(#[from] AttrError),

    #[error("Descriptor has no root element")]
    MissingRoot,

    #[error("Root element is missing the '{0}' attribute")]
    MissingAttribute(&'static str),

    #[error("Element '{0}' is not closed at end of document")]
    Unclosed(String),
}

/// Per-record readme problems; the record is kept with a degraded description
#[derive(Error, Debug)]
pub enum ReadmeError {
    #[error("Could not find readme for project: {0}")]
    NotFound(String),

    #[error("Could not find description in readme: {}", .0.display())]
    MissingDescription(PathBuf),

    #[error("Failed to read readme {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-record part mapping problems; the record is skipped
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PartCompatibilityError {
    #[error("Descriptor does not declare a partCompatibility attribute")]
    Missing,

    #[error("Part '{0}' is neither an EFM32 nor an EFR32 device")]
    UnknownFamily(String),

    #[error("No family token found in part '{0}'")]
    NoToken(String),
}

/// Fatal errors that abort a manifest generation run
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write manifest XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to parse descriptor {}: {source}", path.display())]
    Descriptor {
        path: PathBuf,
        #[source]
        source: DescriptorError,
    },

    #[error("Examples root not found: {}", .0.display())]
    ExamplesRootMissing(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

//! Template manifest generation
//!
//! This crate turns a tree of example projects into the IDE's template
//! manifest. Each `.slsproj` descriptor becomes one `descriptors` entry whose
//! description comes from the project's readme and whose properties carry the
//! category, part/board compatibility and the project files to import.
//!
//! The entry point is [`ManifestBuilder`] (or [`generate_manifest`] for a
//! one-shot run); the leaf components are usable on their own.

pub mod builder;
pub mod descriptor;
pub mod errors;
pub mod manifest_writer;
pub mod part_compat;
pub mod paths;
pub mod project_files;
pub mod readme;
pub mod synthesizer;
pub mod types;

pub use builder::{generate_manifest, BuildSummary, DiscoveredDescriptor, ManifestBuilder};
pub use errors::{DescriptorError, ManifestError, PartCompatibilityError, ReadmeError};
pub use types::{
    CompatibilityExpression, Folder, Manifest, ManifestEntry, PartFamily, ProjectDescriptor,
};

pub use manifest_writer::{to_xml_string, write_to_path};

//! Assembly of one [`ManifestEntry`] from a parsed descriptor
//!
//! Everything that needs the filesystem (readme text, sibling project
//! files, part mapping) is resolved by the caller and handed in through
//! [`EntryInputs`], so synthesis itself is a pure function.

use crate::types::{keys, CompatibilityExpression, ManifestEntry, ProjectDescriptor};
use std::collections::BTreeMap;

/// Per-descriptor values computed before synthesis
#[derive(Debug, Clone)]
pub struct EntryInputs {
    /// Readme description; `None` falls back to a synthesized sentence
    pub description: Option<String>,
    /// Readme file name from the `src` folder; `None` omits the opened resource
    pub readme: Option<String>,
    /// Sibling build-tool project files, relative to the template directory
    pub project_files: Vec<String>,
    /// The descriptor's own path, relative to the template directory
    pub descriptor_path: String,
    pub part_compatibility: CompatibilityExpression,
}

/// Human label: project name with underscores as spaces
pub fn label_for(name: &str) -> String {
    name.replace('_', " ")
}

/// Description used when the readme does not provide one
pub fn fallback_description(descriptor: &ProjectDescriptor) -> String {
    let label = label_for(&descriptor.name);
    match &descriptor.board_compatibility {
        Some(board) => format!(
            "Create the {} project for the {}.",
            label,
            board.to_uppercase()
        ),
        None => format!("Create the {} project.", label),
    }
}

/// Join project paths, mapping `..` segments to the SDK placeholder
pub fn project_file_paths(paths: &[String], sdk_placeholder: &str) -> String {
    paths
        .iter()
        .map(|path| {
            path.replace('\\', "/")
                .split('/')
                .map(|segment| if segment == ".." { sdk_placeholder } else { segment })
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the manifest entry for one descriptor
pub fn synthesize_entry(
    descriptor: &ProjectDescriptor,
    inputs: EntryInputs,
    category: &str,
    sdk_placeholder: &str,
) -> ManifestEntry {
    let label = label_for(&descriptor.name);
    let description = inputs
        .description
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| fallback_description(descriptor));

    let mut properties = BTreeMap::new();
    properties.insert(keys::CATEGORY.to_string(), category.to_string());

    if let Some(hidden) = descriptor.property(keys::HIDDEN).filter(|v| !v.is_empty()) {
        properties.insert(keys::HIDDEN.to_string(), hidden.to_string());
    }

    let mut paths = inputs.project_files;
    paths.push(inputs.descriptor_path);
    properties.insert(
        keys::PROJECT_FILE_PATHS.to_string(),
        project_file_paths(&paths, sdk_placeholder),
    );

    if let Some(board) = &descriptor.board_compatibility {
        properties.insert(keys::BOARD_COMPATIBILITY.to_string(), board.clone());
    }
    properties.insert(
        keys::PART_COMPATIBILITY.to_string(),
        inputs.part_compatibility.to_string(),
    );
    if let Some(readme) = inputs.readme {
        properties.insert(
            keys::INITIALLY_OPENED_RESOURCE.to_string(),
            format!("src/{}", readme),
        );
    }

    ManifestEntry {
        label,
        name: None,
        description,
        properties,
    }
}

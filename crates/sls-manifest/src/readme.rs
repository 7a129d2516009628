//! Readme lookup and description extraction
//!
//! Example readmes follow a fixed template: a title paragraph, then a
//! paragraph describing the example. The second paragraph becomes the
//! template description.

use crate::errors::ReadmeError;
use crate::types::ProjectDescriptor;
use std::fs;
use std::path::Path;

const README_MARKER: &str = "readme";
const SOURCE_FOLDER: &str = "src";

fn is_readme(file_name: &str) -> bool {
    file_name.to_lowercase().contains(README_MARKER)
}

/// Find the readme file name declared by a descriptor.
///
/// The `src` folder is searched first, then the files declared directly
/// under the root element.
pub fn locate_readme(descriptor: &ProjectDescriptor) -> Result<&str, ReadmeError> {
    let in_sources = descriptor
        .folder(SOURCE_FOLDER)
        .and_then(|folder| folder.files.iter().find(|name| is_readme(name)));

    in_sources
        .or_else(|| descriptor.files.iter().find(|name| is_readme(name)))
        .map(String::as_str)
        .ok_or_else(|| ReadmeError::NotFound(descriptor.name.clone()))
}

/// Second paragraph of `text` on one line, if there is a non-empty one.
pub fn description_from_text(text: &str) -> Option<String> {
    let text = text.replace("\r\n", "\n");
    let paragraph = text.split("\n\n").nth(1)?.trim();
    if paragraph.is_empty() {
        return None;
    }
    Some(paragraph.replace('\n', " "))
}

/// Read a readme and return its description paragraph.
pub fn extract_description(readme_path: &Path) -> Result<String, ReadmeError> {
    let text = fs::read_to_string(readme_path).map_err(|source| ReadmeError::Io {
        path: readme_path.to_path_buf(),
        source,
    })?;

    description_from_text(&text)
        .ok_or_else(|| ReadmeError::MissingDescription(readme_path.to_path_buf()))
}

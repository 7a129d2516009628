//! Data model of the template manifest
//!
//! - [`ProjectDescriptor`]: one parsed `.slsproj` file (input, read-only)
//! - [`ManifestEntry`]: one synthesized template record (output)
//! - [`Manifest`]: the ordered list of entries under the namespaced root
//! - [`CompatibilityExpression`]: the `mcu.arm.<family>.<token>.*` wildcard

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// INPUT - parsed project descriptor
// =============================================================================

/// A `folder` element of a descriptor's file tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub files: Vec<String>,
    pub folders: Vec<Folder>,
}

/// One IDE project file, as declared by its root element and children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Location of the descriptor file itself
    pub path: PathBuf,
    pub name: String,
    /// Source tree root, relative to the descriptor's directory
    pub content_root: String,
    pub board_compatibility: Option<String>,
    pub part_compatibility: Option<String>,
    /// `property` key/value pairs found anywhere in the document, in order
    pub properties: Vec<(String, String)>,
    /// Direct `folder` children of the root
    pub folders: Vec<Folder>,
    /// Direct `file` children of the root
    pub files: Vec<String>,
}

impl ProjectDescriptor {
    /// Value of the first `property` with the given key
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct child folder by exact name
    pub fn folder(&self, name: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.name == name)
    }

    /// Directory containing the descriptor file
    pub fn directory(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Absolute-or-relative path of the project's source tree
    pub fn content_path(&self) -> PathBuf {
        self.directory().join(&self.content_root)
    }
}

// =============================================================================
// OUTPUT - manifest entries
// =============================================================================

/// Property keys written for every template
pub mod keys {
    pub const CATEGORY: &str = "template.category";
    pub const PROJECT_FILE_PATHS: &str = "template.projectFilePaths";
    pub const INITIALLY_OPENED_RESOURCE: &str = "template.initiallyOpenedResource";
    pub const PART_COMPATIBILITY: &str = "core.partCompatibility";
    pub const BOARD_COMPATIBILITY: &str = "core.boardCompatibility";
    pub const HIDDEN: &str = "core.hidden";
}

/// One template record of the manifest
///
/// `properties` is a `BTreeMap`, so iteration (and serialization) is always
/// in lexicographic key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestEntry {
    pub label: String,
    pub name: Option<String>,
    pub description: String,
    pub properties: BTreeMap<String, String>,
}

impl ManifestEntry {
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Namespace URI of the manifest root element
pub const MANIFEST_NAMESPACE: &str = "http://www.silabs.com/ss/Studio.ecore";
/// Prefix bound to [`MANIFEST_NAMESPACE`]
pub const MANIFEST_PREFIX: &str = "model";
/// Local name of the manifest root element
pub const MANIFEST_ROOT: &str = "MDescriptors";

/// The manifest document: entries in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn push(&mut self, entry: ManifestEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// PART COMPATIBILITY
// =============================================================================

/// Device family named in a part number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartFamily {
    Efm32,
    Efr32,
}

impl PartFamily {
    pub fn as_str(self) -> &'static str {
        match self {
            PartFamily::Efm32 => "efm32",
            PartFamily::Efr32 => "efr32",
        }
    }
}

/// Wildcard used by the IDE to match a template to compatible parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityExpression {
    pub family: PartFamily,
    pub token: String,
}

impl fmt::Display for CompatibilityExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mcu.arm.{}.{}.*", self.family.as_str(), self.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_lookup_returns_first_match() {
        let descriptor = ProjectDescriptor {
            properties: vec![
                ("core.hidden".to_string(), "true".to_string()),
                ("core.hidden".to_string(), "false".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(descriptor.property("core.hidden"), Some("true"));
        assert_eq!(descriptor.property("missing"), None);
    }

    #[test]
    fn test_content_path_joins_descriptor_dir() {
        let descriptor = ProjectDescriptor {
            path: PathBuf::from("acmp/acmp/SimplicityStudio/acmp.slsproj"),
            content_root: "../".to_string(),
            ..Default::default()
        };
        assert_eq!(
            descriptor.content_path(),
            PathBuf::from("acmp/acmp/SimplicityStudio/../")
        );
    }

    #[test]
    fn test_entry_properties_iterate_sorted() {
        let mut entry = ManifestEntry::default();
        entry.properties.insert("z".to_string(), "1".to_string());
        entry.properties.insert("a".to_string(), "2".to_string());
        let keys: Vec<&str> = entry.properties.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["a", "z"]);
    }

    #[test]
    fn test_compatibility_expression_display() {
        let expr = CompatibilityExpression {
            family: PartFamily::Efr32,
            token: "bg1".to_string(),
        };
        assert_eq!(expr.to_string(), "mcu.arm.efr32.bg1.*");
    }
}

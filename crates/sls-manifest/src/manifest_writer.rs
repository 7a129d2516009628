//! Manifest XML serialization
//!
//! Output is an XML declaration line followed by the pretty-printed
//! `model:MDescriptors` root, two-space indented, ending with a newline.
//! Writing to disk goes through a temp file and a rename so a failed run
//! never leaves a half-written manifest behind.

use crate::errors::ManifestError;
use crate::types::{Manifest, ManifestEntry, MANIFEST_NAMESPACE, MANIFEST_PREFIX, MANIFEST_ROOT};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

const DESCRIPTOR_ELEMENT: &str = "descriptors";
const PROPERTY_ELEMENT: &str = "properties";

/// Serialize a manifest to its XML text
pub fn to_xml_string(manifest: &Manifest) -> Result<String, ManifestError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let root_name = format!("{}:{}", MANIFEST_PREFIX, MANIFEST_ROOT);
    let xmlns = format!("xmlns:{}", MANIFEST_PREFIX);
    let mut root = BytesStart::new(root_name.as_str());
    root.push_attribute((xmlns.as_str(), MANIFEST_NAMESPACE));

    if manifest.is_empty() {
        writer.write_event(Event::Empty(root))?;
    } else {
        writer.write_event(Event::Start(root))?;
        for entry in &manifest.entries {
            write_entry(&mut writer, entry)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_name.as_str())))?;
    }

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &ManifestEntry) -> Result<(), ManifestError> {
    let mut elem = BytesStart::new(DESCRIPTOR_ELEMENT);
    elem.push_attribute(("label", entry.label.as_str()));
    if let Some(ref name) = entry.name {
        elem.push_attribute(("name", name.as_str()));
    }
    elem.push_attribute(("description", entry.description.as_str()));

    if entry.properties.is_empty() {
        writer.write_event(Event::Empty(elem))?;
        return Ok(());
    }

    writer.write_event(Event::Start(elem))?;
    // BTreeMap iteration is already sorted by key
    for (key, value) in &entry.properties {
        let mut prop = BytesStart::new(PROPERTY_ELEMENT);
        prop.push_attribute(("key", key.as_str()));
        prop.push_attribute(("value", value.as_str()));
        writer.write_event(Event::Empty(prop))?;
    }
    writer.write_event(Event::End(BytesEnd::new(DESCRIPTOR_ELEMENT)))?;
    Ok(())
}

/// Write the manifest to `output_path`, creating its directory if needed
pub fn write_to_path(manifest: &Manifest, output_path: &Path) -> Result<(), ManifestError> {
    debug!("Writing manifest to: {:?}", output_path);

    let xml = to_xml_string(manifest)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| ManifestError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let temp_path = output_path.with_extension("xml.tmp");
    write_file(&temp_path, xml.as_bytes()).map_err(|source| ManifestError::Write {
        path: temp_path.clone(),
        source,
    })?;
    fs::rename(&temp_path, output_path).map_err(|source| ManifestError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!("Manifest written successfully to: {:?}", output_path);
    info!("Total templates: {}", manifest.len());
    Ok(())
}

fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = std::io::BufWriter::new(fs::File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn entry() -> ManifestEntry {
        let mut properties = BTreeMap::new();
        properties.insert("template.category".to_string(), "acmp".to_string());
        properties.insert(
            "core.partCompatibility".to_string(),
            "mcu.arm.efr32.bg1.*".to_string(),
        );
        ManifestEntry {
            label: "acmp".to_string(),
            name: None,
            description: "Compare <analog> & digital.".to_string(),
            properties,
        }
    }

    #[test]
    fn test_empty_manifest() {
        let xml = to_xml_string(&Manifest::default()).unwrap_or_default();
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <model:MDescriptors xmlns:model=\"http://www.silabs.com/ss/Studio.ecore\"/>\n"
        );
    }

    #[test]
    fn test_entry_layout_and_sorted_properties() {
        let mut manifest = Manifest::default();
        manifest.push(entry());

        let xml = to_xml_string(&manifest).unwrap_or_default();
        let expected = concat!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
            "<model:MDescriptors xmlns:model=\"http://www.silabs.com/ss/Studio.ecore\">\n",
            "  <descriptors label=\"acmp\" description=\"Compare &lt;analog&gt; &amp; digital.\">\n",
            "    <properties key=\"core.partCompatibility\" value=\"mcu.arm.efr32.bg1.*\"/>\n",
            "    <properties key=\"template.category\" value=\"acmp\"/>\n",
            "  </descriptors>\n",
            "</model:MDescriptors>\n",
        );
        assert_eq!(xml, expected);
    }

    #[test]
    fn test_optional_name_attribute() {
        let mut named = entry();
        named.name = Some("acmp_polled".to_string());
        let mut manifest = Manifest::default();
        manifest.push(named);

        let xml = to_xml_string(&manifest).unwrap_or_default();
        assert!(xml.contains("<descriptors label=\"acmp\" name=\"acmp_polled\" description="));
    }

    #[test]
    fn test_write_to_path_creates_directory() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let output = temp_dir.path().join("_template").join("manifest.xml");
        let mut manifest = Manifest::default();
        manifest.push(entry());

        assert!(write_to_path(&manifest, &output).is_ok(), "Failed to write manifest");
        let written = fs::read_to_string(&output).unwrap_or_default();
        assert_eq!(Ok(written), to_xml_string(&manifest).map_err(|e| e.to_string()));
        assert!(!output.with_extension("xml.tmp").exists());
    }

    #[test]
    fn test_write_to_path_reports_blocked_directory() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let blocked = temp_dir.path().join("_template");
        assert!(fs::write(&blocked, "not a directory").is_ok());

        let result = write_to_path(&Manifest::default(), &blocked.join("manifest.xml"));
        assert!(
            matches!(&result, Err(ManifestError::Write { path, .. }) if *path == blocked),
            "expected a write error naming {}, got {:?}",
            blocked.display(),
            result
        );
    }
}

//! `.slsproj` descriptor parser.
//!
//! Only the parts of the document the manifest needs are kept: the root
//! attributes, every `property` element, and the `folder`/`file` tree.
//! Elements are matched by local name so a namespaced root such as
//! `<model:project>` parses the same as `<project>`.

use crate::errors::DescriptorError;
use crate::types::{Folder, ProjectDescriptor};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

/// Element currently open while reading
#[derive(Debug)]
enum Frame {
    Root,
    Folder(Folder),
    Other(String),
}

/// Parse a descriptor file from disk.
pub fn parse_descriptor_file(path: &Path) -> Result<ProjectDescriptor, DescriptorError> {
    let xml = fs::read_to_string(path)?;
    parse_descriptor(&xml, path)
}

/// Parse a descriptor from a string; `path` is recorded as its location.
pub fn parse_descriptor(xml: &str, path: &Path) -> Result<ProjectDescriptor, DescriptorError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut descriptor: Option<ProjectDescriptor> = None;
    let mut stack: Vec<Frame> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(ref e) => {
                let frame = open_element(e, &mut stack, &mut descriptor, path)?;
                stack.push(frame);
            }
            Event::Empty(ref e) => {
                let frame = open_element(e, &mut stack, &mut descriptor, path)?;
                close_element(frame, &mut stack, &mut descriptor);
            }
            Event::End(_) => {
                if let Some(frame) = stack.pop() {
                    close_element(frame, &mut stack, &mut descriptor);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(frame) = stack.last() {
        let name = match frame {
            Frame::Root => "root".to_string(),
            Frame::Folder(folder) => format!("folder {}", folder.name),
            Frame::Other(name) => name.clone(),
        };
        return Err(DescriptorError::Unclosed(name));
    }

    descriptor.ok_or(DescriptorError::MissingRoot)
}

fn open_element(
    e: &BytesStart,
    stack: &mut [Frame],
    descriptor: &mut Option<ProjectDescriptor>,
    path: &Path,
) -> Result<Frame, DescriptorError> {
    if descriptor.is_none() {
        *descriptor = Some(read_root(e, path)?);
        return Ok(Frame::Root);
    }
    let Some(project) = descriptor.as_mut() else {
        return Ok(Frame::Root);
    };

    let local = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
    match local.as_str() {
        "folder" => {
            return Ok(Frame::Folder(Folder {
                name: attribute(e, b"name")?.unwrap_or_default(),
                ..Default::default()
            }));
        }
        "file" => {
            if let Some(name) = attribute(e, b"name")? {
                match stack.last_mut() {
                    Some(Frame::Root) => project.files.push(name),
                    Some(Frame::Folder(parent)) => parent.files.push(name),
                    _ => {}
                }
            }
        }
        "property" => {
            if let (Some(key), Some(value)) = (attribute(e, b"key")?, attribute(e, b"value")?) {
                project.properties.push((key, value));
            }
        }
        _ => {}
    }
    Ok(Frame::Other(local))
}

fn close_element(
    frame: Frame,
    stack: &mut [Frame],
    descriptor: &mut Option<ProjectDescriptor>,
) {
    let Frame::Folder(folder) = frame else {
        return;
    };
    match stack.last_mut() {
        Some(Frame::Root) => {
            if let Some(project) = descriptor.as_mut() {
                project.folders.push(folder);
            }
        }
        Some(Frame::Folder(parent)) => parent.folders.push(folder),
        _ => {}
    }
}

fn read_root(e: &BytesStart, path: &Path) -> Result<ProjectDescriptor, DescriptorError> {
    let name = attribute(e, b"name")?.ok_or(DescriptorError::MissingAttribute("name"))?;
    Ok(ProjectDescriptor {
        path: path.to_path_buf(),
        name,
        content_root: attribute(e, b"contentRoot")?.unwrap_or_else(|| ".".to_string()),
        board_compatibility: attribute(e, b"boardCompatibility")?,
        part_compatibility: attribute(e, b"partCompatibility")?,
        ..Default::default()
    })
}

/// Unescaped value of the attribute with the given local name
fn attribute(e: &BytesStart, key: &[u8]) -> Result<Option<String>, DescriptorError> {
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.local_name().as_ref() == key {
            return Ok(Some(attr.unescape_value()?.to_string()));
        }
    }
    Ok(None)
}

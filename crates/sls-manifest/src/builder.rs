//! Manifest generation run
//!
//! A run goes through three phases:
//! - discover: list the category directories under the examples root and
//!   every descriptor file below them
//! - synthesize: parse each descriptor (one retry on failure) and turn it
//!   into a [`ManifestEntry`]; per-record problems are logged and the run
//!   continues
//! - serialize: write the accumulated [`Manifest`] once
//!
//! Directory listings and walks are sorted, so an unchanged tree always
//! produces a byte-identical manifest.

use crate::descriptor::parse_descriptor_file;
use crate::errors::{DescriptorError, ManifestError, PartCompatibilityError};
use crate::manifest_writer::write_to_path;
use crate::part_compat::part_compatibility;
use crate::paths::{absolutize, relative_path, to_slash};
use crate::project_files::collect_project_files;
use crate::readme::{extract_description, locate_readme};
use crate::synthesizer::{synthesize_entry, EntryInputs};
use crate::types::{Manifest, ManifestEntry, ProjectDescriptor};
use sls_config::GeneratorConfig;
use sls_logger as logger;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A descriptor file found during discovery, with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredDescriptor {
    pub path: PathBuf,
    pub category: String,
}

/// Counters reported at the end of a run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub discovered: usize,
    pub written: usize,
    pub skipped: usize,
    pub output: PathBuf,
}

/// Drives discovery and synthesis for one configuration
pub struct ManifestBuilder<'a> {
    config: &'a GeneratorConfig,
    template_path: PathBuf,
    manifest: Manifest,
    summary: BuildSummary,
}

impl<'a> ManifestBuilder<'a> {
    /// Validate the configuration and prepare an empty manifest
    pub fn new(config: &'a GeneratorConfig) -> Result<Self, ManifestError> {
        if !config.examples_root.is_dir() {
            return Err(ManifestError::ExamplesRootMissing(
                config.examples_root.clone(),
            ));
        }
        config.validate()?;

        let template_path = absolutize(&config.template_path())?;
        Ok(Self {
            config,
            template_path,
            manifest: Manifest::default(),
            summary: BuildSummary {
                output: config.manifest_path(),
                ..Default::default()
            },
        })
    }

    /// Category directories under the examples root, sorted by name
    pub fn example_dirs(&self) -> Result<Vec<PathBuf>, ManifestError> {
        let mut dirs = Vec::new();
        for entry in fs::read_dir(&self.config.examples_root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if self.config.is_excluded(&name) {
                debug!("Skipping excluded directory: {}", name);
                continue;
            }
            dirs.push(entry.path());
        }
        dirs.sort();
        Ok(dirs)
    }

    /// Every descriptor file below the example directories
    pub fn discover(&self) -> Result<Vec<DiscoveredDescriptor>, ManifestError> {
        let mut found = Vec::new();
        for dir in self.example_dirs()? {
            let category = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            for entry in WalkDir::new(&dir)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file())
            {
                let is_descriptor = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext == self.config.descriptor_extension);
                if is_descriptor {
                    found.push(DiscoveredDescriptor {
                        path: entry.path().to_path_buf(),
                        category: category.clone(),
                    });
                }
            }
        }
        Ok(found)
    }

    /// Parse, synthesize and append one descriptor.
    ///
    /// Returns `Ok(false)` when the record was skipped.
    pub fn add_descriptor(&mut self, found: &DiscoveredDescriptor) -> Result<bool, ManifestError> {
        self.summary.discovered += 1;
        logger::step(&format!("Processing {}", found.path.display()));

        let descriptor = parse_with_retry(&found.path).map_err(|source| {
            ManifestError::Descriptor {
                path: found.path.clone(),
                source,
            }
        })?;

        match self.synthesize(&descriptor, &found.category)? {
            Some(entry) => {
                self.manifest.push(entry);
                self.summary.written += 1;
                Ok(true)
            }
            None => {
                self.summary.skipped += 1;
                Ok(false)
            }
        }
    }

    fn synthesize(
        &self,
        descriptor: &ProjectDescriptor,
        category: &str,
    ) -> Result<Option<ManifestEntry>, ManifestError> {
        let part = descriptor
            .part_compatibility
            .as_deref()
            .ok_or(PartCompatibilityError::Missing)
            .and_then(part_compatibility);
        let part = match part {
            Ok(part) => part,
            Err(e) => {
                logger::error(&format!(
                    "Skipping {}: {}",
                    descriptor.path.display(),
                    e
                ));
                return Ok(None);
            }
        };

        let readme = match locate_readme(descriptor) {
            Ok(name) => Some(name.to_string()),
            Err(e) => {
                logger::warn(&e.to_string());
                None
            }
        };

        let content_path = descriptor.content_path();
        let description = readme.as_deref().and_then(|name| {
            match extract_description(&content_path.join(name)) {
                Ok(description) => Some(description),
                Err(e) => {
                    logger::debug(&e.to_string());
                    None
                }
            }
        });
        if description.is_none() {
            logger::warn(&format!(
                "Could not find description for project located here: {}",
                content_path.display()
            ));
        }

        let project_files = collect_project_files(
            descriptor.directory(),
            &self.template_path,
            &self.config.project_extensions,
        )?;
        let descriptor_path = to_slash(&relative_path(
            &absolutize(&descriptor.path)?,
            &self.template_path,
        ));

        let inputs = EntryInputs {
            description,
            readme,
            project_files,
            descriptor_path,
            part_compatibility: part,
        };
        Ok(Some(synthesize_entry(
            descriptor,
            inputs,
            category,
            &self.config.sdk_placeholder,
        )))
    }

    /// Discover and synthesize every descriptor without writing anything
    pub fn build(mut self) -> Result<(Manifest, BuildSummary), ManifestError> {
        for found in self.discover()? {
            logger::spinner_message(&format!("Processing {}", found.path.display()));
            self.add_descriptor(&found)?;
        }
        Ok((self.manifest, self.summary))
    }

    /// Full run: discover, synthesize and write the manifest file
    pub fn run(self) -> Result<BuildSummary, ManifestError> {
        let (manifest, summary) = self.build()?;
        write_to_path(&manifest, &summary.output)?;
        Ok(summary)
    }
}

/// Parse a descriptor, retrying once; the second failure is returned
fn parse_with_retry(path: &Path) -> Result<ProjectDescriptor, DescriptorError> {
    match parse_descriptor_file(path) {
        Ok(descriptor) => Ok(descriptor),
        Err(e) => {
            logger::error(&format!("{}: {}", path.display(), e));
            parse_descriptor_file(path)
        }
    }
}

/// Generate the manifest described by `config`
pub fn generate_manifest(config: &GeneratorConfig) -> Result<BuildSummary, ManifestError> {
    ManifestBuilder::new(config)?.run()
}

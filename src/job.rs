//! # Aggregation Jobs
//!
//! An [`AggregationJob`] is the finalized result of one aggregation run. It
//! is produced by [`crate::orchestrator::run`] and cannot be modified
//! afterwards; everything downstream reads from it.
//!
//! ## Auxiliary Resources
//!
//! [`AggregationJob::copy_auxiliary_resources`] is the only operation that
//! writes to the output directory. For each included module it copies the
//! contents of every `doc-files` directory, keeping the path relative to the
//! module's source root:
//!
//! ```text
//! core/src/main/java/io/example/doc-files/figure.svg
//!   -> <output>/<namespace>/io/example/doc-files/figure.svg   (namespaced module)
//!   -> <output>/io/example/doc-files/figure.svg               (unnamed module)
//! ```
//!
//! The configured stylesheets are copied as `stylesheet.css`, the global one
//! into the output root and per-module overrides into the module's output
//! directory. Existing files are overwritten, so the copy can be retried
//! against the same job any number of times.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::module::Module;

/// File name used for copied stylesheets.
pub const STYLESHEET_FILE: &str = "stylesheet.css";

/// The immutable result of an aggregation run.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationJob {
    pub(crate) included_modules: Vec<Module>,
    pub(crate) exclusion_patterns: Vec<String>,
    pub(crate) merged_sources: BTreeSet<PathBuf>,
    pub(crate) merged_classpath: Vec<PathBuf>,
    pub(crate) module_path_mapping: BTreeMap<String, PathBuf>,
    pub(crate) source_names: BTreeSet<String>,
    pub(crate) excluded_names: BTreeSet<String>,
    pub(crate) snippet_path: Option<String>,
    pub(crate) output_directory: PathBuf,
    pub(crate) stylesheet: Option<PathBuf>,
    pub(crate) module_styles: BTreeMap<String, PathBuf>,
}

/// Counts of files written by [`AggregationJob::copy_auxiliary_resources`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub resources_copied: usize,
    pub stylesheets_copied: usize,
}

impl AggregationJob {
    pub fn included_modules(&self) -> &[Module] {
        &self.included_modules
    }

    pub fn exclusion_patterns(&self) -> &[String] {
        &self.exclusion_patterns
    }

    pub fn merged_sources(&self) -> &BTreeSet<PathBuf> {
        &self.merged_sources
    }

    pub fn merged_classpath(&self) -> &[PathBuf] {
        &self.merged_classpath
    }

    pub fn module_path_mapping(&self) -> &BTreeMap<String, PathBuf> {
        &self.module_path_mapping
    }

    /// Every fully-qualified name derived from the merged sources.
    pub fn source_names(&self) -> &BTreeSet<String> {
        &self.source_names
    }

    pub fn excluded_names(&self) -> &BTreeSet<String> {
        &self.excluded_names
    }

    /// Names that remain documented after exclusions.
    pub fn documented_names(&self) -> impl Iterator<Item = &str> {
        self.source_names
            .difference(&self.excluded_names)
            .map(String::as_str)
    }

    pub fn snippet_path(&self) -> Option<&str> {
        self.snippet_path.as_deref()
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Directory receiving a module's auxiliary files.
    pub fn module_output_dir(&self, module: &Module) -> PathBuf {
        match &module.namespace {
            Some(namespace) => self.output_directory.join(namespace),
            None => self.output_directory.clone(),
        }
    }

    /// The job as pretty-printed JSON, for downstream tools.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Copy `doc-files` contents and stylesheets into the output directory.
    pub fn copy_auxiliary_resources(&self) -> Result<CopyReport> {
        let mut report = CopyReport::default();

        for module in &self.included_modules {
            let target_root = self.module_output_dir(module);

            for resource_dir in &module.resource_directories {
                let Some(source_root) = module.source_root_of(resource_dir) else {
                    warn!(
                        "Skipping '{}': not under a source root of module '{}'",
                        resource_dir.display(),
                        module.name
                    );
                    continue;
                };

                for entry in WalkDir::new(resource_dir) {
                    let entry = entry?;
                    if !entry.file_type().is_file() {
                        continue;
                    }
                    let relative = entry.path().strip_prefix(source_root).map_err(|e| {
                        Error::Path {
                            message: format!(
                                "'{}' is not under '{}': {}",
                                entry.path().display(),
                                source_root.display(),
                                e
                            ),
                        }
                    })?;
                    copy_file(entry.path(), &target_root.join(relative))?;
                    report.resources_copied += 1;
                }
            }

            if let Some(style) = self.module_styles.get(&module.name) {
                copy_file(style, &target_root.join(STYLESHEET_FILE))?;
                report.stylesheets_copied += 1;
            }
        }

        if let Some(style) = &self.stylesheet {
            copy_file(style, &self.output_directory.join(STYLESHEET_FILE))?;
            report.stylesheets_copied += 1;
        }

        info!(
            "Copied {} auxiliary resource(s) and {} stylesheet(s) into {}",
            report.resources_copied,
            report.stylesheets_copied,
            self.output_directory.display()
        );
        Ok(report)
    }
}

fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Filesystem {
            message: format!("Failed to create directory '{}': {}", parent.display(), e),
        })?;
    }

    fs::copy(from, to).map_err(|e| Error::Filesystem {
        message: format!(
            "Failed to copy '{}' to '{}': {}",
            from.display(),
            to.display(),
            e
        ),
    })?;
    debug!("Copied {} -> {}", from.display(), to.display());
    Ok(())
}

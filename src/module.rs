//! # Module Descriptors
//!
//! Turns a [`ModuleHandle`] from the project graph into a fully resolved
//! [`Module`]: display name, source directories, classpath, and the
//! conventionally named directories found by scanning the source roots.
//!
//! ## Directory Conventions
//!
//! - `snippet-files`: example code referenced from documentation comments.
//!   All of them are passed to the renderer as one snippet path.
//! - `doc-files`: images and other files referenced from documentation.
//!   These are copied verbatim into the output tree after aggregation.
//!
//! Finding neither kind of directory is normal and yields empty sets.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::graph::ModuleHandle;

/// Name of directories holding documentation snippets.
pub const SNIPPET_DIR_NAME: &str = "snippet-files";

/// Name of directories holding auxiliary documentation resources.
pub const DOC_RESOURCE_DIR_NAME: &str = "doc-files";

/// A module resolved for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Module {
    /// Graph identity, unique within the run.
    pub name: String,
    /// Namespace if declared, else the graph name.
    pub display_name: String,
    pub namespace: Option<String>,
    /// De-duplicated source roots in declaration order; the first is primary.
    pub source_directories: Vec<PathBuf>,
    pub classpath_entries: Vec<PathBuf>,
    pub snippet_directories: BTreeSet<PathBuf>,
    pub resource_directories: BTreeSet<PathBuf>,
}

impl Module {
    /// The source root used for namespace path mappings.
    pub fn primary_source_root(&self) -> Option<&Path> {
        self.source_directories.first().map(PathBuf::as_path)
    }

    /// The source root that contains `path`, if any.
    pub fn source_root_of(&self, path: &Path) -> Option<&Path> {
        self.source_directories
            .iter()
            .map(PathBuf::as_path)
            .find(|root| path.starts_with(root))
    }
}

/// Resolve a module handle into a [`Module`].
///
/// Every declared source root must exist. Each root is walked once to find
/// snippet and doc-resource directories.
pub fn describe(handle: &ModuleHandle) -> Result<Module> {
    if handle.source_roots.is_empty() {
        return Err(Error::NotFound {
            module: handle.name.clone(),
            path: PathBuf::new(),
        });
    }

    let mut source_directories: Vec<PathBuf> = Vec::new();
    for root in &handle.source_roots {
        if !root.is_dir() {
            return Err(Error::NotFound {
                module: handle.name.clone(),
                path: root.clone(),
            });
        }
        if !source_directories.contains(root) {
            source_directories.push(root.clone());
        }
    }

    let mut snippet_directories = BTreeSet::new();
    let mut resource_directories = BTreeSet::new();
    for root in &source_directories {
        scan_conventional_dirs(root, &mut snippet_directories, &mut resource_directories)?;
    }

    debug!(
        "Described module '{}': {} source root(s), {} classpath entries, {} snippet dir(s), {} doc-files dir(s)",
        handle.name,
        source_directories.len(),
        handle.classpath.len(),
        snippet_directories.len(),
        resource_directories.len()
    );

    Ok(Module {
        name: handle.name.clone(),
        display_name: handle
            .namespace
            .clone()
            .unwrap_or_else(|| handle.name.clone()),
        namespace: handle.namespace.clone(),
        source_directories,
        classpath_entries: handle.classpath.clone(),
        snippet_directories,
        resource_directories,
    })
}

fn scan_conventional_dirs(
    root: &Path,
    snippets: &mut BTreeSet<PathBuf>,
    resources: &mut BTreeSet<PathBuf>,
) -> Result<()> {
    // Conventional directories are taken whole; nested ones are not recorded.
    let mut walker = WalkDir::new(root).min_depth(1).into_iter();
    while let Some(entry) = walker.next() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name();
        if name == SNIPPET_DIR_NAME {
            snippets.insert(entry.into_path());
            walker.skip_current_dir();
        } else if name == DOC_RESOURCE_DIR_NAME {
            resources.insert(entry.into_path());
            walker.skip_current_dir();
        }
    }
    Ok(())
}

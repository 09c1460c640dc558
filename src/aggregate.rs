//! Merging per-module paths into the inputs of one documentation run.
//!
//! All functions here are pure: they combine [`Module`] values that were
//! already resolved and never touch the filesystem.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::module::Module;

/// Union of every module's source directories.
pub fn merge_sources(modules: &[Module]) -> BTreeSet<PathBuf> {
    modules
        .iter()
        .flat_map(|m| m.source_directories.iter().cloned())
        .collect()
}

/// Concatenate classpaths in module order, keeping the first occurrence of
/// each entry.
///
/// Downstream tools resolve classes in classpath order, so the relative
/// order of surviving entries is preserved exactly.
pub fn merge_classpath(modules: &[Module]) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();
    for entry in modules.iter().flat_map(|m| m.classpath_entries.iter()) {
        if seen.insert(entry) {
            merged.push(entry.clone());
        }
    }
    merged
}

/// Map each declared namespace to its module's primary source root.
///
/// Modules without a namespace are left out. Two modules declaring the same
/// namespace is a [`Error::Conflict`]; a namespaced module without any
/// source root is [`Error::NotFound`].
pub fn build_module_path_mapping(modules: &[Module]) -> Result<BTreeMap<String, PathBuf>> {
    let mut owners: BTreeMap<&str, &str> = BTreeMap::new();
    let mut mapping = BTreeMap::new();

    for module in modules {
        let Some(namespace) = module.namespace.as_deref() else {
            continue;
        };
        if let Some(first) = owners.insert(namespace, &module.name) {
            return Err(Error::Conflict {
                namespace: namespace.to_string(),
                first: first.to_string(),
                second: module.name.clone(),
            });
        }
        let root = module.primary_source_root().ok_or_else(|| Error::NotFound {
            module: module.name.clone(),
            path: PathBuf::new(),
        })?;
        mapping.insert(namespace.to_string(), root.to_path_buf());
    }

    Ok(mapping)
}

/// Join all snippet directories with the platform path-list separator.
///
/// Returns `None` when no module has snippets, so the caller can leave the
/// renderer flag out entirely.
pub fn join_snippet_paths(modules: &[Module]) -> Result<Option<String>> {
    let snippets: BTreeSet<&PathBuf> = modules
        .iter()
        .flat_map(|m| m.snippet_directories.iter())
        .collect();

    if snippets.is_empty() {
        return Ok(None);
    }
    join_path_list(snippets).map(Some)
}

/// Render a namespace mapping as `namespace=path` arguments.
pub fn module_source_path_arguments(mapping: &BTreeMap<String, PathBuf>) -> Vec<String> {
    mapping
        .iter()
        .map(|(namespace, root)| format!("{}={}", namespace, root.display()))
        .collect()
}

/// Join paths with the platform path-list separator (`:` or `;`).
pub fn join_path_list<I, P>(paths: I) -> Result<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<std::ffi::OsStr>,
{
    let joined = std::env::join_paths(paths).map_err(|e| Error::Path {
        message: format!("Cannot join path list: {}", e),
    })?;
    joined.into_string().map_err(|raw| Error::Path {
        message: format!("Path list is not valid UTF-8: {}", raw.to_string_lossy()),
    })
}

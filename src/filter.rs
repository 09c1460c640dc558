//! # Package Filtering
//!
//! Computes which fully-qualified names are left out of the aggregated
//! documentation.
//!
//! ## Name Derivation
//!
//! A fully-qualified name is derived from a source file path by dropping
//! everything up to and including the first segment equal to the root
//! marker, dropping the file extension, and joining what remains with `.`:
//!
//! ```text
//! core/src/main/java/io/example/Util.java  --(marker "java")-->  io.example.Util
//! ```
//!
//! When the source roots are known, the marker is looked up in the root a
//! file was collected from rather than in the whole path, so a checkout
//! living under some `.../java/...` directory still derives the same names.
//!
//! Module descriptor files (`module-info.java`) never produce a name.
//!
//! ## Pattern Semantics
//!
//! Exclusion patterns are filesystem globs matched against the name written
//! as a slash-joined path, so `io.example.internal.Helper` is matched as
//! `io/example/internal/Helper`. Separators must be matched literally:
//! `io/example/*` covers direct members of `io.example` only, while
//! `io/example/**` covers the whole subtree.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use glob::{MatchOptions, Pattern};
use log::warn;
use walkdir::WalkDir;

use crate::error::Result;
use crate::module::{DOC_RESOURCE_DIR_NAME, SNIPPET_DIR_NAME};

/// File name of the module descriptor, which has no documented name.
pub const MODULE_DESCRIPTOR_FILE: &str = "module-info.java";

/// Delimiter between the segments of a fully-qualified name.
pub const NAME_DELIMITER: &str = ".";

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Derive fully-qualified names from source file paths.
///
/// The name starts after the first segment equal to `root_marker`. Use
/// [`derived_names_under`] when the source roots are known.
pub fn derived_names<I, P>(source_paths: I, root_marker: &str) -> BTreeSet<String>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    source_paths
        .into_iter()
        .filter_map(|path| derive_name(path.as_ref(), root_marker))
        .collect()
}

/// Derive fully-qualified names for files collected from `source_roots`.
///
/// For a file under a root, the marker is looked up in that root's own
/// segments (last occurrence wins) and then in the path below the root, so
/// an ancestor directory that happens to be named like the marker never
/// counts. Files outside every root are derived as in [`derived_names`].
pub fn derived_names_under<R, Q, I, P>(
    source_roots: R,
    source_paths: I,
    root_marker: &str,
) -> BTreeSet<String>
where
    R: IntoIterator<Item = Q>,
    Q: AsRef<Path>,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let roots: Vec<PathBuf> = source_roots
        .into_iter()
        .map(|root| root.as_ref().to_path_buf())
        .collect();

    source_paths
        .into_iter()
        .filter_map(|path| {
            let path = path.as_ref();
            let root = roots
                .iter()
                .filter(|root| path.starts_with(root))
                .max_by_key(|root| root.components().count());
            match root {
                Some(root) => derive_name_under(root, path, root_marker),
                None => derive_name(path, root_marker),
            }
        })
        .collect()
}

fn derive_name(path: &Path, root_marker: &str) -> Option<String> {
    if is_module_descriptor(path) {
        return None;
    }

    let segments = normal_segments(path);
    let Some(marker) = segments.iter().position(|s| *s == root_marker) else {
        warn_unmarked(path, root_marker);
        return None;
    };
    join_name(&segments[marker + 1..])
}

fn derive_name_under(root: &Path, path: &Path, root_marker: &str) -> Option<String> {
    if is_module_descriptor(path) {
        return None;
    }

    let root_segments = normal_segments(root);
    let relative_segments = normal_segments(path.strip_prefix(root).ok()?);

    if let Some(marker) = root_segments.iter().rposition(|s| *s == root_marker) {
        let segments: Vec<&str> = root_segments[marker + 1..]
            .iter()
            .chain(&relative_segments)
            .copied()
            .collect();
        return join_name(&segments);
    }

    let Some(marker) = relative_segments.iter().position(|s| *s == root_marker) else {
        warn_unmarked(path, root_marker);
        return None;
    };
    join_name(&relative_segments[marker + 1..])
}

fn is_module_descriptor(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name == MODULE_DESCRIPTOR_FILE)
}

fn normal_segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

fn warn_unmarked(path: &Path, root_marker: &str) {
    warn!(
        "Skipping '{}': no '{}' segment marks its source root",
        path.display(),
        root_marker
    );
}

/// Join packages and the file stem of the last segment with `.`.
fn join_name(segments: &[&str]) -> Option<String> {
    let (file, packages) = segments.split_last()?;
    let stem = Path::new(file).file_stem()?.to_str()?;

    let mut parts = packages.to_vec();
    parts.push(stem);
    Some(parts.join(NAME_DELIMITER))
}

/// True if every dot-separated segment of `name` is a Java identifier.
///
/// Files such as `package-info.java` derive names that are not, and must
/// not be handed to the renderer as documented types.
pub fn is_qualified_identifier(name: &str) -> bool {
    name.split(NAME_DELIMITER).all(|segment| {
        let mut chars = segment.chars();
        chars
            .next()
            .is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    })
}

/// Compile glob patterns once for repeated matching.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|p| Pattern::new(p.as_ref()).map_err(Into::into))
        .collect()
}

/// True if any pattern matches `name` written as a slash-joined path.
pub fn matches(name: &str, patterns: &[Pattern]) -> bool {
    let path = name.replace(NAME_DELIMITER, "/");
    patterns
        .iter()
        .any(|pattern| pattern.matches_with(&path, MATCH_OPTIONS))
}

/// The subset of `names` matched by any of `patterns`.
pub fn compute_exclusions(names: &BTreeSet<String>, patterns: &[Pattern]) -> BTreeSet<String> {
    if patterns.is_empty() {
        return BTreeSet::new();
    }
    names
        .iter()
        .filter(|name| matches(name, patterns))
        .cloned()
        .collect()
}

/// Recursively list source files with `extension` under `directories`.
///
/// Files inside snippet and doc-resource directories are not API sources
/// and are skipped. The result is sorted and free of duplicates even when
/// the directories overlap.
pub fn collect_source_files<I, P>(directories: I, extension: &str) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut files = BTreeSet::new();
    for dir in directories {
        let walker = WalkDir::new(dir.as_ref()).into_iter().filter_entry(|e| {
            !(e.file_type().is_dir()
                && (e.file_name() == SNIPPET_DIR_NAME || e.file_name() == DOC_RESOURCE_DIR_NAME))
        });
        for entry in walker {
            let entry = entry?;
            if entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == extension)
            {
                files.insert(entry.into_path());
            }
        }
    }
    Ok(files.into_iter().collect())
}

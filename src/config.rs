//! # Configuration Schema and Parsing
//!
//! This module defines the data structures behind the `.doc-aggregate.yaml`
//! configuration file and the logic for loading it.
//!
//! ## Key Components
//!
//! - **`ConfigFile`**: The whole file. It declares the project graph
//!   (`modules:`), the aggregation settings (`aggregate:`) and, optionally,
//!   the release `version:` used to stamp artifact names.
//!
//! - **`AggregationConfig`**: The input of one aggregation run: which
//!   modules to include and in which order, exclusion patterns, the output
//!   directory, and style overrides.
//!
//! ## Example
//!
//! ```yaml
//! modules:
//!   - name: core
//!     namespace: io.example.core
//!     source_roots: [core/src/main/java]
//!     classpath: [core/build/classes]
//! aggregate:
//!   include: [core]
//!   exclude: ["io/example/internal/**"]
//!   output: build/docs/javadoc
//! version: 1.2.3-SNAPSHOT
//! ```
//!
//! ## Path Resolution
//!
//! `from_file` resolves every relative path in the file against the
//! directory containing the file, so the tool behaves the same no matter
//! where it is invoked from. `parse` leaves paths untouched.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::graph::{DeclaredGraph, ModuleHandle};
use crate::version::Version;

/// Default configuration file name.
pub const DEFAULT_CONFIG_FILE: &str = ".doc-aggregate.yaml";

/// Default path segment marking the start of package directories.
pub const DEFAULT_ROOT_MARKER: &str = "java";

/// Default extension of documented source files.
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

fn default_root_marker() -> String {
    DEFAULT_ROOT_MARKER.to_string()
}

fn default_source_extension() -> String {
    DEFAULT_SOURCE_EXTENSION.to_string()
}

/// Settings for one aggregation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationConfig {
    /// Names of the modules to aggregate, in classpath-merge order.
    #[serde(rename = "include", default)]
    pub included_modules: Vec<String>,
    /// Glob patterns over slash-joined fully-qualified names.
    #[serde(rename = "exclude", default)]
    pub exclusion_patterns: Vec<String>,
    /// Root of the unified documentation tree.
    #[serde(rename = "output")]
    pub output_directory: PathBuf,
    /// Path segment after which package directories start.
    #[serde(default = "default_root_marker")]
    pub root_marker: String,
    /// Extension of source files whose names are documented.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Stylesheet copied to the output root.
    #[serde(default)]
    pub stylesheet: Option<PathBuf>,
    /// Per-module stylesheet overrides, keyed by module name.
    #[serde(default)]
    pub module_styles: BTreeMap<String, PathBuf>,
}

impl AggregationConfig {
    /// A configuration with no modules selected yet.
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            included_modules: Vec::new(),
            exclusion_patterns: Vec::new(),
            output_directory: output_directory.into(),
            root_marker: default_root_marker(),
            source_extension: default_source_extension(),
            stylesheet: None,
            module_styles: BTreeMap::new(),
        }
    }
}

/// The `.doc-aggregate.yaml` file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Modules declared in the project graph.
    #[serde(default)]
    pub modules: Vec<ModuleHandle>,
    /// Aggregation settings.
    pub aggregate: AggregationConfig,
    /// Release version of the project, if declared.
    #[serde(default)]
    pub version: Option<Version>,
}

impl ConfigFile {
    /// Build the project graph declared in this file.
    pub fn graph(&self) -> Result<DeclaredGraph> {
        DeclaredGraph::new(self.modules.clone())
    }

    /// Resolve every relative path against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        let resolve = |path: &mut PathBuf| {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        };

        for module in &mut self.modules {
            module.source_roots.iter_mut().for_each(resolve);
            module.classpath.iter_mut().for_each(resolve);
        }

        let aggregate = &mut self.aggregate;
        resolve(&mut aggregate.output_directory);
        if let Some(stylesheet) = aggregate.stylesheet.as_mut() {
            resolve(stylesheet);
        }
        aggregate.module_styles.values_mut().for_each(resolve);
    }
}

/// Parse a configuration from a YAML string.
pub fn parse(yaml_content: &str) -> Result<ConfigFile> {
    serde_yaml::from_str(yaml_content).map_err(Error::Yaml)
}

/// Load a configuration file, resolving relative paths against its directory.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::Configuration {
        message: format!("Cannot read '{}': {}", path.display(), e),
        hint: Some(format!(
            "Create a {} file or pass --config <FILE>",
            DEFAULT_CONFIG_FILE
        )),
    })?;
    let mut config = parse(&content)?;

    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    config.resolve_paths(&base);
    Ok(config)
}

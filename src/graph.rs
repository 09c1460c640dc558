//! # Project Graph
//!
//! The aggregator does not own the build's project model. It queries it
//! through the [`ProjectGraph`] trait, which answers one question: given a
//! module name, what did the build declare for it?
//!
//! ## Design
//!
//! Separating the query interface from its implementation mirrors how the
//! rest of the library treats external collaborators. In the command-line
//! tool the graph is a [`DeclaredGraph`] built from the `modules:` section
//! of the configuration file; embedders can plug in their own project model,
//! and tests use small in-memory graphs.

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What the build graph declares for one module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleHandle {
    /// Graph identity of the module, unique within the graph.
    pub name: String,
    /// Externally declared module identity, if the module has one.
    #[serde(default)]
    pub namespace: Option<String>,
    /// Source roots; the first one is the primary root.
    #[serde(default)]
    pub source_roots: Vec<PathBuf>,
    /// Resolved compile-time dependency paths, in resolution order.
    #[serde(default)]
    pub classpath: Vec<PathBuf>,
}

impl ModuleHandle {
    /// Create a handle with a single source root and no dependencies.
    pub fn new(name: impl Into<String>, source_root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            source_roots: vec![source_root.into()],
            classpath: Vec::new(),
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_classpath<I, P>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.classpath = entries.into_iter().map(Into::into).collect();
        self
    }
}

/// Query interface over the build's project model.
pub trait ProjectGraph {
    /// Look up a module by its graph name.
    fn module(&self, name: &str) -> Option<&ModuleHandle>;

    /// All module names known to the graph, in declaration order.
    fn module_names(&self) -> Vec<&str>;
}

/// A project graph whose modules were declared up front, typically in the
/// configuration file.
#[derive(Debug, Clone, Default)]
pub struct DeclaredGraph {
    modules: Vec<ModuleHandle>,
}

impl DeclaredGraph {
    /// Build a graph from declared modules.
    ///
    /// Fails with a configuration error if two modules share a name.
    pub fn new(modules: Vec<ModuleHandle>) -> Result<Self> {
        let mut seen = HashSet::new();
        for module in &modules {
            if !seen.insert(module.name.as_str()) {
                return Err(Error::Configuration {
                    message: format!("module '{}' is declared more than once", module.name),
                    hint: Some("Module names must be unique within the graph".to_string()),
                });
            }
        }
        Ok(Self { modules })
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl ProjectGraph for DeclaredGraph {
    fn module(&self, name: &str) -> Option<&ModuleHandle> {
        self.modules.iter().find(|m| m.name == name)
    }

    fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_graph_lookup() {
        let graph = DeclaredGraph::new(vec![
            ModuleHandle::new("core", "core/src"),
            ModuleHandle::new("ext", "ext/src").with_namespace("io.example.ext"),
        ])
        .unwrap();

        assert_eq!(graph.len(), 2);
        assert_eq!(graph.module_names(), vec!["core", "ext"]);
        assert_eq!(
            graph.module("ext").unwrap().namespace.as_deref(),
            Some("io.example.ext")
        );
        assert!(graph.module("missing").is_none());
    }

    #[test]
    fn test_declared_graph_rejects_duplicate_names() {
        let result = DeclaredGraph::new(vec![
            ModuleHandle::new("core", "a"),
            ModuleHandle::new("core", "b"),
        ]);
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_module_handle_deserialize_defaults() {
        let handle: ModuleHandle = serde_yaml::from_str("name: core\n").unwrap();
        assert_eq!(handle.name, "core");
        assert!(handle.namespace.is_none());
        assert!(handle.source_roots.is_empty());
        assert!(handle.classpath.is_empty());
    }
}

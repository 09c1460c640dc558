//! Shared test utilities for the E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_two_module_project();
//!     fixture.command().arg("validate").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::configs;
    pub use super::TestFixture;
}

/// Configuration files used across the E2E tests.
#[allow(dead_code)]
pub mod configs {
    /// Two modules, one namespaced, with an internal package excluded.
    pub const TWO_MODULES: &str = r#"
modules:
  - name: core
    namespace: io.example.core
    source_roots: [core/src/main/java]
    classpath: [libs/a.jar]
  - name: ext
    source_roots: [ext/src/main/java]
    classpath: [libs/a.jar, libs/b.jar]
aggregate:
  include: [core, ext]
  exclude: ["io/example/core/internal/**"]
  output: build/docs
  stylesheet: docs/style.css
version: 1.4.0-SNAPSHOT
"#;

    /// Includes a module that is not declared.
    pub const UNKNOWN_MODULE: &str = r#"
modules:
  - name: core
    source_roots: [core/src/main/java]
aggregate:
  include: [core, missing]
  output: build/docs
"#;

    /// Two modules claiming the same namespace.
    pub const NAMESPACE_CONFLICT: &str = r#"
modules:
  - name: core
    namespace: io.example
    source_roots: [core/src/main/java]
  - name: ext
    namespace: io.example
    source_roots: [ext/src/main/java]
aggregate:
  include: [core, ext]
  output: build/docs
"#;

    /// Invalid YAML for error testing.
    pub const INVALID_YAML: &str = "aggregate: [unclosed";
}

/// A temporary project with a `.doc-aggregate.yaml` and module sources.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Add a `.doc-aggregate.yaml` configuration file with the given content.
    #[allow(dead_code)]
    pub fn with_config(self, content: &str) -> Self {
        self.with_file(".doc-aggregate.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Add an empty directory.
    #[allow(dead_code)]
    pub fn with_dir(self, path: &str) -> Self {
        self.temp_dir
            .child(path)
            .create_dir_all()
            .expect("Failed to create directory");
        self
    }

    /// Sources for the `core` and `ext` modules of [`configs::TWO_MODULES`].
    #[allow(dead_code)]
    pub fn with_two_module_sources(self) -> Self {
        self.with_file(
            "core/src/main/java/io/example/core/Api.java",
            "package io.example.core;",
        )
        .with_file(
            "core/src/main/java/io/example/core/internal/Impl.java",
            "package io.example.core.internal;",
        )
        .with_file(
            "core/src/main/java/module-info.java",
            "module io.example.core {}",
        )
        .with_file(
            "core/src/main/java/io/example/core/doc-files/figure.svg",
            "<svg/>",
        )
        .with_file(
            "core/src/main/java/io/example/core/snippet-files/Demo.java",
            "class Demo {}",
        )
        .with_file(
            "ext/src/main/java/io/example/ext/Plugin.java",
            "package io.example.ext;",
        )
        .with_file("docs/style.css", "body { margin: 0; }")
    }

    /// The complete two-module project.
    #[allow(dead_code)]
    pub fn with_two_module_project(self) -> Self {
        self.with_config(configs::TWO_MODULES)
            .with_two_module_sources()
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the path to the config file.
    #[allow(dead_code)]
    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join(".doc-aggregate.yaml")
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("doc-aggregate");
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .env_remove("DOC_AGGREGATE_RENDERER")
            .arg("--color")
            .arg("never");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_temp_dir() {
        let fixture = TestFixture::new();
        assert!(fixture.path().exists());
    }

    #[test]
    fn test_fixture_with_config() {
        let fixture = TestFixture::new().with_config(configs::TWO_MODULES);
        assert!(fixture.config_path().exists());
    }

    #[test]
    fn test_configs_are_valid_yaml() {
        for config in [
            configs::TWO_MODULES,
            configs::UNKNOWN_MODULE,
            configs::NAMESPACE_CONFLICT,
        ] {
            serde_yaml::from_str::<serde_yaml::Value>(config).expect("Config should be valid YAML");
        }
    }

    #[test]
    fn test_invalid_yaml_is_actually_invalid() {
        assert!(serde_yaml::from_str::<serde_yaml::Value>(configs::INVALID_YAML).is_err());
    }
}

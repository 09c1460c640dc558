//! # Documentation Aggregation Library
//!
//! This library merges the API documentation inputs of a multi-module build
//! into a single run: one set of source directories, one classpath, one
//! namespace-to-source mapping and one exclusion list, plus a unified output
//! tree for the auxiliary files each module ships with its documentation.
//! It is used by the `doc-aggregate` command-line tool and can be embedded
//! in other build tooling.
//!
//! ## Quick Example
//!
//! ```no_run
//! use doc_aggregate::graph::{DeclaredGraph, ModuleHandle};
//! use doc_aggregate::orchestrator::Orchestrator;
//!
//! let graph = DeclaredGraph::new(vec![
//!     ModuleHandle::new("core", "core/src/main/java").with_namespace("io.example.core"),
//!     ModuleHandle::new("ext", "ext/src/main/java").with_classpath(["libs/a.jar"]),
//! ])
//! .unwrap();
//!
//! let job = Orchestrator::new("build/docs")
//!     .include("core")
//!     .include("ext")
//!     .exclude("io/example/internal/**")
//!     .run(&graph)
//!     .unwrap();
//!
//! job.copy_auxiliary_resources().unwrap();
//! ```
//!
//! ## Core Concepts
//!
//! - **Project graph (`graph`)**: the query interface to the build's
//!   declared modules.
//! - **Modules (`module`)**: a module resolved for one run, including the
//!   `snippet-files` and `doc-files` directories found under its sources.
//! - **Aggregation (`aggregate`)**: merging sources and classpaths, the
//!   namespace mapping and the snippet path.
//! - **Filtering (`filter`)**: deriving fully-qualified names from source
//!   files and matching them against exclusion globs.
//! - **Orchestration (`orchestrator`, `job`)**: running the above in order
//!   and producing the immutable `AggregationJob`.
//! - **Rendering (`renderer`, `colorize`)**: handing the job to an external
//!   renderer and highlighting code blocks in its output.
//! - **Versions (`version`)**: release versions used to stamp artifacts.
//!
//! ## Execution Flow
//!
//! 1.  **Selection**: validate the caller's ordered module list.
//! 2.  **Description**: resolve each module and scan its source roots.
//! 3.  **Merge**: combine sources, classpaths, namespaces and snippets.
//! 4.  **Filter**: derive names and compute the exclusion set.
//! 5.  **Copy**: copy auxiliary resources into the output tree.
//! 6.  **Render**: run the external renderer, then optionally colorize.
//!
//! Steps 1-4 are pure with respect to the output directory; only steps 5
//! and 6 write to it.

pub mod aggregate;
pub mod colorize;
pub mod config;
pub mod error;
pub mod filter;
pub mod graph;
pub mod job;
pub mod module;
pub mod orchestrator;
pub mod output;
pub mod renderer;
pub mod version;

#[cfg(test)]
mod filter_proptest;

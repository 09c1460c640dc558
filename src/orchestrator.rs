//! # Aggregation Orchestrator
//!
//! Coordinates one aggregation run from configuration to finalized job.
//!
//! ## Lifecycle
//!
//! 1. **Configuring**: an [`Orchestrator`] accumulates module names,
//!    exclusion patterns, the output target and style overrides. A plain
//!    [`AggregationConfig`] loaded from a file works just as well.
//! 2. **Aggregating**: [`run`] validates the selection, describes each
//!    module in the given order, merges paths and computes exclusions.
//! 3. **Finalized**: the returned [`AggregationJob`] is immutable. Its
//!    auxiliary-resource copy may be run any number of times.
//!
//! `Orchestrator::run` consumes the builder, so a finalized run can never go
//! back to configuring. `run` itself never writes to the output directory;
//! a failed run leaves no trace there.

use std::collections::HashSet;
use std::path::PathBuf;

use log::{debug, info};

use crate::aggregate;
use crate::config::AggregationConfig;
use crate::error::{Error, Result};
use crate::filter;
use crate::graph::ProjectGraph;
use crate::job::AggregationJob;
use crate::module::{self, Module};

/// Builder for an aggregation run.
#[derive(Debug, Clone)]
pub struct Orchestrator {
    config: AggregationConfig,
}

impl Orchestrator {
    /// Start configuring a run targeting `output_directory`.
    pub fn new(output_directory: impl Into<PathBuf>) -> Self {
        Self {
            config: AggregationConfig::new(output_directory),
        }
    }

    /// Start from an existing configuration.
    pub fn from_config(config: AggregationConfig) -> Self {
        Self { config }
    }

    /// Append a module to the selection.
    pub fn include(mut self, module_name: impl Into<String>) -> Self {
        self.config.included_modules.push(module_name.into());
        self
    }

    /// Add an exclusion pattern.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.config.exclusion_patterns.push(pattern.into());
        self
    }

    pub fn stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.stylesheet = Some(path.into());
        self
    }

    /// Override the stylesheet of one included module.
    pub fn module_style(mut self, module_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.config
            .module_styles
            .insert(module_name.into(), path.into());
        self
    }

    pub fn root_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.root_marker = marker.into();
        self
    }

    pub fn source_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.source_extension = extension.into();
        self
    }

    pub fn config(&self) -> &AggregationConfig {
        &self.config
    }

    /// Finish configuring and aggregate.
    pub fn run<G: ProjectGraph + ?Sized>(self, graph: &G) -> Result<AggregationJob> {
        run(&self.config, graph)
    }
}

/// Execute an aggregation run.
///
/// Fails with [`Error::Configuration`] when the selection is empty, names a
/// module twice or names a module the graph does not know, and when a style
/// override targets a module outside the selection.
pub fn run<G: ProjectGraph + ?Sized>(config: &AggregationConfig, graph: &G) -> Result<AggregationJob> {
    let handles = select_modules(config, graph)?;
    let patterns = filter::compile_patterns(&config.exclusion_patterns)?;

    let modules = handles
        .into_iter()
        .map(module::describe)
        .collect::<Result<Vec<Module>>>()?;

    let merged_sources = aggregate::merge_sources(&modules);
    let merged_classpath = aggregate::merge_classpath(&modules);
    let module_path_mapping = aggregate::build_module_path_mapping(&modules)?;
    let snippet_path = aggregate::join_snippet_paths(&modules)?;

    let source_files = filter::collect_source_files(&merged_sources, &config.source_extension)?;
    let source_names =
        filter::derived_names_under(&merged_sources, &source_files, &config.root_marker);
    let excluded_names = filter::compute_exclusions(&source_names, &patterns);
    debug!(
        "Derived {} name(s) from {} source file(s)",
        source_names.len(),
        source_files.len()
    );

    info!(
        "Aggregated {} module(s): {} source dir(s), {} classpath entries, {} of {} name(s) excluded",
        modules.len(),
        merged_sources.len(),
        merged_classpath.len(),
        excluded_names.len(),
        source_names.len()
    );

    Ok(AggregationJob {
        included_modules: modules,
        exclusion_patterns: config.exclusion_patterns.clone(),
        merged_sources,
        merged_classpath,
        module_path_mapping,
        source_names,
        excluded_names,
        snippet_path,
        output_directory: config.output_directory.clone(),
        stylesheet: config.stylesheet.clone(),
        module_styles: config.module_styles.clone(),
    })
}

fn select_modules<'g, G: ProjectGraph + ?Sized>(
    config: &AggregationConfig,
    graph: &'g G,
) -> Result<Vec<&'g crate::graph::ModuleHandle>> {
    if config.included_modules.is_empty() {
        return Err(Error::Configuration {
            message: "no modules selected for aggregation".to_string(),
            hint: Some("List module names under 'aggregate.include'".to_string()),
        });
    }

    let mut seen = HashSet::new();
    let mut handles = Vec::with_capacity(config.included_modules.len());
    for name in &config.included_modules {
        if !seen.insert(name.as_str()) {
            return Err(Error::configuration(format!(
                "module '{}' is selected more than once",
                name
            )));
        }
        let handle = graph.module(name).ok_or_else(|| Error::Configuration {
            message: format!("unknown module '{}'", name),
            hint: Some(format!(
                "Known modules: {}",
                graph.module_names().join(", ")
            )),
        })?;
        handles.push(handle);
    }

    for name in config.module_styles.keys() {
        if !seen.contains(name.as_str()) {
            return Err(Error::configuration(format!(
                "style override for module '{}', which is not included",
                name
            )));
        }
    }

    Ok(handles)
}

//! # Documentation Renderer
//!
//! The aggregator prepares inputs; generating the documentation itself is
//! the job of an external tool. This module is the seam between the two.
//!
//! - [`renderer_arguments`] turns a job into the command-line arguments the
//!   renderer expects.
//! - [`DocumentationRenderer`] abstracts the act of rendering so callers can
//!   substitute their own implementation in tests or embedders.
//! - [`ExternalRenderer`] runs a program (typically `javadoc`) with those
//!   arguments.

use std::path::PathBuf;
use std::process::Command;

use log::{debug, info};

use crate::aggregate;
use crate::error::{Error, Result};
use crate::filter;
use crate::job::AggregationJob;

/// Something that can render an aggregation job into documentation.
pub trait DocumentationRenderer {
    fn render(&self, job: &AggregationJob) -> Result<()>;
}

/// Build the renderer's argument list for `job`.
///
/// Flags whose value would be empty are left out entirely. Documented
/// names follow the flags, in sorted order. Names that are not qualified
/// identifiers, such as those derived from `package-info.java`, are dropped.
pub fn renderer_arguments(job: &AggregationJob) -> Result<Vec<String>> {
    let mut args = vec![
        "-d".to_string(),
        job.output_directory().display().to_string(),
    ];

    if !job.merged_classpath().is_empty() {
        args.push("-classpath".to_string());
        args.push(aggregate::join_path_list(job.merged_classpath())?);
    }

    for mapping in aggregate::module_source_path_arguments(job.module_path_mapping()) {
        args.push("--module-source-path".to_string());
        args.push(mapping);
    }

    if let Some(snippets) = job.snippet_path() {
        args.push("--snippet-path".to_string());
        args.push(snippets.to_string());
    }

    if !job.merged_sources().is_empty() {
        args.push("-sourcepath".to_string());
        args.push(aggregate::join_path_list(job.merged_sources())?);
    }

    for name in job.excluded_names() {
        args.push("--exclude".to_string());
        args.push(name.clone());
    }

    let (documented, skipped): (Vec<&str>, Vec<&str>) = job
        .documented_names()
        .partition(|name| filter::is_qualified_identifier(name));
    if !skipped.is_empty() {
        debug!(
            "Not passing {} non-identifier name(s) to the renderer: {}",
            skipped.len(),
            skipped.join(", ")
        );
    }
    args.extend(documented.into_iter().map(str::to_string));
    Ok(args)
}

/// Renders by running an external program.
#[derive(Debug, Clone)]
pub struct ExternalRenderer {
    program: PathBuf,
}

impl ExternalRenderer {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl DocumentationRenderer for ExternalRenderer {
    fn render(&self, job: &AggregationJob) -> Result<()> {
        let program = self.program.display().to_string();
        let args = renderer_arguments(job)?;
        debug!("Running {} with {} argument(s)", program, args.len());

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|e| Error::Renderer {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Renderer {
                program,
                message: format!("{}: {}", output.status, stderr.trim()),
            });
        }

        info!("Rendered documentation into {}", job.output_directory().display());
        Ok(())
    }
}

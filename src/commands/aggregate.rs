//! # Aggregate Command Implementation
//!
//! This module implements the `aggregate` subcommand, the main entry point of
//! the tool. It loads the `.doc-aggregate.yaml` configuration, runs the
//! aggregation over the declared modules and then, unless `--dry-run` is
//! given, populates the output directory.
//!
//! ## Steps
//!
//! 1. Load and resolve the configuration file.
//! 2. Run the aggregation (selection, description, merge, filter). This step
//!    never writes to disk.
//! 3. Copy `doc-files` contents and stylesheets into the output directory.
//! 4. Optionally run an external renderer (`--render`), then colorize code
//!    blocks in its HTML output (`--colorize`).
//!
//! With `--format json` the finalized job is printed as JSON instead of the
//! human-readable summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use log::debug;

use doc_aggregate::colorize::Colorizer;
use doc_aggregate::config::DEFAULT_CONFIG_FILE;
use doc_aggregate::job::AggregationJob;
use doc_aggregate::orchestrator;
use doc_aggregate::output::{OutputConfig, Status};
use doc_aggregate::renderer::{DocumentationRenderer, ExternalRenderer};

/// How the result of a run is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// The aggregation job as JSON
    Json,
}

/// Aggregate the configured modules into one documentation tree
#[derive(Args, Debug)]
pub struct AggregateArgs {
    /// Path to the .doc-aggregate.yaml configuration file.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Override the output directory from the configuration file.
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Additional exclusion pattern (repeatable).
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Compute the job without writing anything to the output directory.
    #[arg(long)]
    pub dry_run: bool,

    /// Program used to render the documentation, e.g. `javadoc`.
    ///
    /// Can also be set with the `DOC_AGGREGATE_RENDERER` environment variable.
    #[arg(long, value_name = "PROGRAM", env = "DOC_AGGREGATE_RENDERER")]
    pub render: Option<PathBuf>,

    /// Syntax-highlight code blocks in the rendered HTML.
    #[arg(long)]
    pub colorize: bool,

    /// Output format for the result.
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Execute the `aggregate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: AggregateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let mut config = super::load_config(&args.config)?;

    if let Some(output) = args.output {
        debug!("Output directory overridden to {}", output.display());
        config.aggregate.output_directory = output;
    }
    config.aggregate.exclusion_patterns.extend(args.exclude);

    let graph = config.graph().context("Invalid module declarations")?;
    let job = orchestrator::run(&config.aggregate, &graph).context("Aggregation failed")?;

    if args.format == OutputFormat::Json {
        println!("{}", job.to_json()?);
    } else {
        print_summary(&out, &job);
    }

    if args.dry_run {
        if args.format == OutputFormat::Text {
            println!(
                "{} Dry run: nothing written to {}",
                out.marker(Status::Info),
                job.output_directory().display()
            );
        }
        return Ok(());
    }

    let report = job
        .copy_auxiliary_resources()
        .context("Failed to copy auxiliary resources")?;

    if let Some(program) = &args.render {
        ExternalRenderer::new(program).render(&job)?;
    }

    let colorized = if args.colorize {
        let colorizer = Colorizer::new()?;
        Some(colorizer.colorize_dir(job.output_directory())?)
    } else {
        None
    };

    if args.format == OutputFormat::Text {
        println!(
            "{} Copied {} resource file(s) and {} stylesheet(s) into {}",
            out.marker(Status::Ok),
            report.resources_copied,
            report.stylesheets_copied,
            job.output_directory().display()
        );
        if let Some(program) = &args.render {
            println!(
                "{} Rendered with {}",
                out.marker(Status::Ok),
                program.display()
            );
        }
        if let Some(colorized) = colorized {
            println!(
                "{} Colorized {} of {} HTML file(s)",
                out.marker(Status::Ok),
                colorized.modified,
                colorized.processed
            );
        }
    }

    Ok(())
}

fn print_summary(out: &OutputConfig, job: &AggregationJob) {
    println!("{} {}", out.marker(Status::Info), out.heading("Aggregation Summary:"));

    let names: Vec<&str> = job
        .included_modules()
        .iter()
        .map(|module| module.display_name.as_str())
        .collect();
    println!("   Modules: {}", names.join(", "));
    println!("   Source directories: {}", job.merged_sources().len());
    println!("   Classpath entries: {}", job.merged_classpath().len());
    println!("   Namespaces: {}", job.module_path_mapping().len());
    println!(
        "   Names: {} documented, {} excluded",
        job.source_names().len() - job.excluded_names().len(),
        job.excluded_names().len()
    );
    if let Some(snippets) = job.snippet_path() {
        println!("   Snippet path: {}", out.dim(snippets));
    }
}

//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which checks a
//! `.doc-aggregate.yaml` configuration without touching the output directory.
//!
//! ## Functionality
//!
//! - **Configuration Parsing**: Parses the file and reports its contents.
//! - **Graph Validation**: Rejects duplicate module declarations.
//! - **Dry Aggregation**: Runs the full aggregation, which catches unknown or
//!   duplicate selections, missing source roots, namespace conflicts and
//!   malformed exclusion patterns.
//! - **Warnings**: Exclusion patterns that match nothing and selections that
//!   document no names are reported as warnings, which fail the command
//!   under `--strict`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use doc_aggregate::config::DEFAULT_CONFIG_FILE;
use doc_aggregate::filter;
use doc_aggregate::job::AggregationJob;
use doc_aggregate::orchestrator;
use doc_aggregate::output::{OutputConfig, Status};

/// Validate a .doc-aggregate.yaml configuration file
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the .doc-aggregate.yaml configuration file to validate.
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Use strict validation (fail on warnings).
    #[arg(long)]
    pub strict: bool,
}

/// Execute the `validate` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let config_path = &args.config;
    println!(
        "{} Validating configuration: {}",
        out.marker(Status::Scan),
        config_path.display()
    );

    let config = match super::load_config(config_path) {
        Ok(config) => {
            println!(
                "{} Configuration file parsed successfully",
                out.marker(Status::Ok)
            );
            config
        }
        Err(e) => {
            println!(
                "{} Configuration parsing failed: {:#}",
                out.marker(Status::Error),
                e
            );
            return Err(e);
        }
    };

    println!("\n{} {}", out.marker(Status::Info), out.heading("Configuration Summary:"));
    println!("   Declared modules: {}", config.modules.len());
    println!("   Included modules: {}", config.aggregate.included_modules.len());
    println!("   Exclusion patterns: {}", config.aggregate.exclusion_patterns.len());
    println!("   Output: {}", config.aggregate.output_directory.display());
    if let Some(version) = &config.version {
        println!("   Version: {}", version);
    }

    let job = match config
        .graph()
        .and_then(|graph| orchestrator::run(&config.aggregate, &graph))
    {
        Ok(job) => {
            println!("{} Aggregation inputs are consistent", out.marker(Status::Ok));
            job
        }
        Err(e) => {
            println!("{} {}", out.marker(Status::Error), e);
            return Err(anyhow::anyhow!("Validation failed: {}", e));
        }
    };

    let warnings = collect_warnings(&job)?;
    for warning in &warnings {
        println!("{} {}", out.marker(Status::Warn), warning);
    }

    if warnings.is_empty() {
        println!("\n{} Configuration is valid", out.marker(Status::Ok));
        Ok(())
    } else if args.strict {
        Err(anyhow::anyhow!(
            "Validation failed with {} warning(s) in strict mode",
            warnings.len()
        ))
    } else {
        println!(
            "\n{} Configuration is valid with {} warning(s)",
            out.marker(Status::Warn),
            warnings.len()
        );
        Ok(())
    }
}

fn collect_warnings(job: &AggregationJob) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    for pattern in job.exclusion_patterns() {
        let compiled = filter::compile_patterns(std::slice::from_ref(pattern))?;
        if !job
            .source_names()
            .iter()
            .any(|name| filter::matches(name, &compiled))
        {
            warnings.push(format!("Exclusion pattern '{}' matches no names", pattern));
        }
    }

    if job.documented_names().next().is_none() {
        warnings.push("No names left to document".to_string());
    }

    Ok(warnings)
}

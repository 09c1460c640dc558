//! # Colorize Command Implementation
//!
//! This module implements the `colorize` subcommand, which syntax-highlights
//! `<pre><code>` blocks in an already rendered HTML documentation tree.
//! `aggregate --colorize` does the same as its last step; this command is
//! for trees rendered by other means.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use doc_aggregate::colorize::Colorizer;
use doc_aggregate::output::{OutputConfig, Status};

/// Syntax-highlight code blocks in rendered HTML documentation
#[derive(Args, Debug)]
pub struct ColorizeArgs {
    /// Root of the rendered documentation tree.
    #[arg(value_name = "DIR")]
    pub directory: PathBuf,
}

/// Execute the `colorize` command.
///
/// # Arguments
/// * `args` - The command arguments
/// * `color_flag` - The value of the global --color flag ("always", "never", or "auto")
pub fn execute(args: ColorizeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    if !args.directory.is_dir() {
        bail!("Not a directory: {}", args.directory.display());
    }

    let report = Colorizer::new()?.colorize_dir(&args.directory)?;
    println!(
        "{} Colorized {} of {} HTML file(s) in {}",
        out.marker(Status::Ok),
        report.modified,
        report.processed,
        args.directory.display()
    );
    Ok(())
}

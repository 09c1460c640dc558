//! CLI argument parsing and command dispatch

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Doc Aggregate - Build one documentation set from many modules
#[derive(Parser, Debug)]
#[command(name = "doc-aggregate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Colorize output (always, never, auto)
    #[arg(long, global = true, value_name = "WHEN", default_value = "auto")]
    color: String,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(
        long,
        global = true,
        value_name = "LEVEL",
        default_value = "warn",
        env = "DOC_AGGREGATE_LOG"
    )]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Aggregate the configured modules into one documentation tree
    Aggregate(commands::aggregate::AggregateArgs),

    /// Check a .doc-aggregate.yaml configuration without writing anything
    Validate(commands::validate::ValidateArgs),

    /// Show the included modules and their inputs as a tree
    Tree(commands::tree::TreeArgs),

    /// Parse, compare and stamp release versions
    Version(commands::version::VersionArgs),

    /// Syntax-highlight code blocks in rendered HTML documentation
    Colorize(commands::colorize::ColorizeArgs),

    /// Generate shell completion scripts
    Completions(commands::completions::CompletionsArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> Result<()> {
        init_logging(&self.log_level);

        match self.command {
            Commands::Aggregate(args) => commands::aggregate::execute(args, &self.color),
            Commands::Validate(args) => commands::validate::execute(args, &self.color),
            Commands::Tree(args) => commands::tree::execute(args),
            Commands::Version(args) => commands::version::execute(args),
            Commands::Colorize(args) => commands::colorize::execute(args, &self.color),
            Commands::Completions(args) => commands::completions::execute(args),
        }
    }
}

/// `RUST_LOG`, when set, takes precedence over `--log-level`.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    // A logger may already be installed when embedded in tests.
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

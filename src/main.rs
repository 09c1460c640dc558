//! # Documentation Aggregation CLI
//!
//! This is the binary entry point for the `doc-aggregate` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Handling top-level application errors and translating them into user-friendly
//!   output.
//!
//! The aggregation logic lives in the `doc_aggregate` library crate; the binary
//! only wires configuration files and flags to it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}

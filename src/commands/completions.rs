//! # Completions Command Implementation
//!
//! Generates shell completion scripts with `clap_complete`, either to stdout or
//! straight into a file.
//!
//! ```bash
//! doc-aggregate completions bash > ~/.local/share/bash-completion/completions/doc-aggregate
//! doc-aggregate completions zsh --output ~/.zfunc/_doc-aggregate
//! ```

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Generate shell completion scripts
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// The shell to generate completions for (bash, zsh, fish, powershell, elvish)
    #[arg(value_enum)]
    pub shell: Shell,

    /// Write the script to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Execute the `completions` command.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Cannot create {}", path.display()))?;
            write_completions(args.shell, &mut file)?;
            file.flush()?;
        }
        None => write_completions(args.shell, &mut io::stdout())?,
    }
    Ok(())
}

fn write_completions<W: Write>(shell: Shell, out: &mut W) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
    Ok(())
}

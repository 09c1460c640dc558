//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `doc-aggregate` command-line tool, one file per subcommand.
//!
//! ## Structure
//!
//! Each command module contains:
//! - An `Args` struct that defines the command-specific arguments and options,
//!   derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic by calling into the `doc_aggregate` library.

pub mod aggregate;
pub mod colorize;
pub mod completions;
pub mod tree;
pub mod validate;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use doc_aggregate::config::{self, ConfigFile};

/// Load a configuration file with the path in the error context.
pub(crate) fn load_config(path: &Path) -> Result<ConfigFile> {
    config::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}

//! # Version Command Implementation
//!
//! This module implements the `version` subcommand, a small front end to the
//! release version model used to stamp documentation artifacts.
//!
//! ## Subcommands
//!
//! - `parse <VERSION>`: print the components of a version, or its JSON form.
//! - `compare <A> <B>`: print `<`, `=` or `>`. The prerelease flag does not
//!   take part in the ordering.
//! - `stamp <BASE>`: print the artifact name for a base name. The version is
//!   taken from `--release` or, failing that, from the configuration file.

use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use doc_aggregate::config::DEFAULT_CONFIG_FILE;
use doc_aggregate::version::Version;

/// Parse, compare and stamp release versions
#[derive(Args, Debug)]
pub struct VersionArgs {
    #[command(subcommand)]
    pub command: VersionCommand,
}

#[derive(Subcommand, Debug)]
pub enum VersionCommand {
    /// Parse a version and print its components
    Parse {
        /// Version in MAJOR.MINOR.MICRO[-TAG] form
        version: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two versions
    Compare {
        /// Left-hand version
        left: String,
        /// Right-hand version
        right: String,
    },

    /// Build a version-stamped artifact name
    Stamp {
        /// Artifact base name, e.g. `project-javadoc`
        base: String,

        /// File extension to append, e.g. `zip`
        #[arg(long, value_name = "EXT")]
        extension: Option<String>,

        /// Version to stamp with instead of the configured one
        #[arg(long, value_name = "VERSION")]
        release: Option<String>,

        /// Path to the .doc-aggregate.yaml configuration file.
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,
    },
}

/// Execute the `version` command.
pub fn execute(args: VersionArgs) -> Result<()> {
    match args.command {
        VersionCommand::Parse { version, json } => {
            let version = Version::parse(&version)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&describe(&version))?);
            } else {
                println!("major: {}", version.major());
                println!("minor: {}", version.minor());
                println!("micro: {}", version.micro());
                println!("prerelease: {}", version.is_prerelease());
                println!("series: {}", version.minor_series());
            }
        }
        VersionCommand::Compare { left, right } => {
            let left = Version::parse(&left)?;
            let right = Version::parse(&right)?;
            println!("{}", ordering_symbol(left.compare(&right)));
        }
        VersionCommand::Stamp {
            base,
            extension,
            release,
            config,
        } => {
            let version = match release {
                Some(text) => Version::parse(&text)?,
                None => super::load_config(&config)?.version.with_context(|| {
                    format!("No version given and none declared in {}", config.display())
                })?,
            };
            println!("{}", version.stamp(&base, extension.as_deref()));
        }
    }
    Ok(())
}

fn describe(version: &Version) -> serde_json::Value {
    serde_json::json!({
        "version": version,
        "major": version.major(),
        "minor": version.minor(),
        "micro": version.micro(),
        "prerelease": version.is_prerelease(),
        "series": version.minor_series(),
    })
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_symbol() {
        assert_eq!(ordering_symbol(Ordering::Less), "<");
        assert_eq!(ordering_symbol(Ordering::Equal), "=");
        assert_eq!(ordering_symbol(Ordering::Greater), ">");
    }

    #[test]
    fn test_describe_json() {
        let version = Version::parse("3.2.1-SNAPSHOT").unwrap();
        let value = describe(&version);
        assert_eq!(value["version"], "3.2.1-SNAPSHOT");
        assert_eq!(value["major"], 3);
        assert_eq!(value["prerelease"], true);
        assert_eq!(value["series"], "3.2");
    }

    #[test]
    fn test_stamp_without_any_version_fails() {
        let args = VersionArgs {
            command: VersionCommand::Stamp {
                base: "docs".to_string(),
                extension: None,
                release: None,
                config: PathBuf::from("/nonexistent/.doc-aggregate.yaml"),
            },
        };
        assert!(execute(args).is_err());
    }
}

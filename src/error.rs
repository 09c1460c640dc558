//! # Error Handling
//!
//! This module defines the centralized error type for the `doc-aggregate`
//! library. It uses the `thiserror` library to derive an `Error` enum that
//! covers every failure mode of an aggregation run, with enough context in
//! each variant to tell the user which module, path or pattern was at fault.
//!
//! ## Key Components
//!
//! - **`Error`**: The main enum. The four domain kinds are:
//!   - `Format`: a malformed version string.
//!   - `NotFound`: a module source root that does not exist.
//!   - `Conflict`: two included modules declaring the same namespace.
//!   - `Configuration`: an empty or invalid module selection.
//!
//!   The remaining variants cover writes to the output tree, path-list
//!   joining, the external documentation renderer, and errors wrapped from
//!   the libraries the aggregator calls into (I/O, YAML, JSON, glob, regex,
//!   directory walking).
//!
//! - **`Result<T>`**: A type alias for `std::result::Result<T, Error>`.
//!
//! Errors are surfaced synchronously to the caller of the failing operation.
//! Nothing in the library retries; retry policy belongs to the caller.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for doc-aggregate operations
#[derive(Error, Debug)]
pub enum Error {
    /// A version string did not have the `MAJOR.MINOR.MICRO[-TAG]` shape.
    #[error("Version format error for '{input}': {message}")]
    Format { input: String, message: String },

    /// A module's declared source root does not exist.
    #[error("Source root not found for module '{module}': {}", path.display())]
    NotFound { module: String, path: PathBuf },

    /// Two included modules declare the same namespace.
    #[error("Namespace conflict: '{namespace}' is declared by both '{first}' and '{second}'")]
    Conflict {
        namespace: String,
        first: String,
        second: String,
    },

    /// The module selection or another configuration value is invalid.
    ///
    /// Includes an optional hint about how to fix the configuration.
    #[error("Configuration error: {message}{}", hint.as_ref().map(|h| format!("\n  hint: {}", h)).unwrap_or_default())]
    Configuration {
        message: String,
        /// Optional hint for how to fix the configuration issue
        hint: Option<String>,
    },

    /// A filesystem operation on the output tree failed.
    #[error("Filesystem operation error: {message}")]
    Filesystem { message: String },

    /// A path-related operation failed, e.g. joining a path list.
    #[error("Path operation error: {message}")]
    Path { message: String },

    /// The external documentation renderer could not be run or failed.
    #[error("Renderer failed: {program} - {message}")]
    Renderer { program: String, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A directory walk error, wrapped from `walkdir::Error`.
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// A YAML parsing error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON serialization error, wrapped from `serde_json::Error`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A glob pattern error, wrapped from `glob::PatternError`.
    #[error("Glob pattern error: {0}")]
    Glob(#[from] glob::PatternError),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Shorthand for a `Configuration` error without a hint.
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            hint: None,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

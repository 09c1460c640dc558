//! # Terminal Output
//!
//! Helpers for the command-line tool's human-readable output: whether to
//! use colour and emoji, and how to prefix status lines.
//!
//! Colour is decided from the `--color` flag first. With `--color=auto` the
//! usual conventions apply: `NO_COLOR` (any value) and `CLICOLOR=0` turn it
//! off, `CLICOLOR_FORCE` turns it on, `TERM=dumb` turns it off, and
//! otherwise the terminal's own capabilities decide.

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub use_color: bool,
}

/// Kind of status line printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    Error,
    Warn,
    Info,
    Scan,
}

impl Status {
    fn emoji(self) -> &'static str {
        match self {
            Status::Ok => "✅",
            Status::Error => "❌",
            Status::Warn => "⚠️",
            Status::Info => "📊",
            Status::Scan => "🔍",
        }
    }

    fn plain(self) -> &'static str {
        match self {
            Status::Ok => "[OK]",
            Status::Error => "[ERR]",
            Status::Warn => "[WARN]",
            Status::Info => "[INFO]",
            Status::Scan => "[SCAN]",
        }
    }
}

impl OutputConfig {
    /// Build from the `--color` flag value (`always`, `never` or `auto`).
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };
        Self { use_color }
    }

    fn detect_color_support() -> bool {
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }
        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }
        console::Term::stdout().features().colors_supported()
    }

    /// Prefix for a status line.
    pub fn marker(&self, status: Status) -> &'static str {
        if self.use_color {
            status.emoji()
        } else {
            status.plain()
        }
    }

    /// Bold heading text when colour is on.
    pub fn heading(&self, text: &str) -> String {
        if self.use_color {
            style(text).bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dimmed secondary text when colour is on.
    pub fn dim(&self, text: &str) -> String {
        if self.use_color {
            style(text).dim().to_string()
        } else {
            text.to_string()
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

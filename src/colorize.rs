//! # Code Block Colorizer
//!
//! Post-processes a rendered HTML documentation tree, syntax-highlighting
//! the example code blocks that documentation comments write as
//! `<pre><code> ... </code></pre>`.
//!
//! Each block becomes `<div class="code"><code lang="java"> ... </code></div>`
//! with:
//!
//! - keywords in bold `#7F0055`,
//! - string literals in `#0000FF`,
//! - `//` line comments in `#3F7F5F`,
//! - annotations in bold `#808080`. Inside documentation comments an
//!   annotation has to be written as `\@Name`; the backslash is removed.
//!
//! HTML tags inside a block are copied through untouched. A whitespace-only
//! last line before the closing tag is dropped.

use std::fs;
use std::path::Path;

use log::{debug, info};
use regex::{Captures, Regex};
use walkdir::WalkDir;

use crate::error::Result;

const KEYWORD_COLOR: &str = "#7F0055";
const STRING_COLOR: &str = "#0000FF";
const COMMENT_COLOR: &str = "#3F7F5F";
const ANNOTATION_COLOR: &str = "#808080";

const KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "null", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while",
];

/// Files visited and rewritten by [`Colorizer::colorize_dir`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorizeReport {
    pub processed: usize,
    pub modified: usize,
}

/// Highlights code blocks in HTML documents.
#[derive(Debug, Clone)]
pub struct Colorizer {
    block: Regex,
}

impl Colorizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            block: Regex::new(r"(?is)<pre><code>(.*?)</code></pre>")?,
        })
    }

    /// Colorize every `*.html` file under `dir` in place.
    pub fn colorize_dir(&self, dir: &Path) -> Result<ColorizeReport> {
        let mut report = ColorizeReport::default();

        for entry in WalkDir::new(dir) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "html") {
                continue;
            }

            report.processed += 1;
            let text = fs::read_to_string(path)?;
            if let Some(colored) = self.colorize_html(&text) {
                fs::write(path, colored)?;
                report.modified += 1;
                debug!("Colorized {}", path.display());
            }
        }

        info!(
            "Colorizer processed {} file(s) and modified {}",
            report.processed, report.modified
        );
        Ok(report)
    }

    /// Rewrite the code blocks of one document.
    ///
    /// Returns `None` if the document has no code block.
    pub fn colorize_html(&self, html: &str) -> Option<String> {
        if !self.block.is_match(html) {
            return None;
        }

        let colored = self.block.replace_all(html, |caps: &Captures| {
            let mut body = &caps[1];
            if let Some(index) = body.rfind('\n') {
                if body[index + 1..].trim().is_empty() {
                    body = &body[..index];
                }
            }
            format!(
                "<div class=\"code\"><code lang=\"java\">{}</code></div>",
                highlight(body)
            )
        });
        Some(colored.into_owned())
    }
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn highlight(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    let mut out = String::with_capacity(code.len() * 2);
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        if c == '<' {
            let end = scan_until(&chars, i, |ch| ch == '>').map_or(chars.len(), |e| e + 1);
            out.extend(&chars[i..end]);
            i = end;
        } else if is_identifier_char(c) {
            let start = i;
            while i < chars.len() && is_identifier_char(chars[i]) {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            if KEYWORDS.contains(&word.as_str()) {
                push_colored(&mut out, KEYWORD_COLOR, true, &word);
            } else {
                out.push_str(&word);
            }
        } else if c == '"' {
            let end = closing_quote(&chars, i).map_or(chars.len(), |e| e + 1);
            let literal: String = chars[i..end].iter().collect();
            push_colored(&mut out, STRING_COLOR, false, &literal);
            i = end;
        } else if c == '/' && next == Some('/') {
            let end = scan_until(&chars, i, |ch| ch == '\n' || ch == '\r').unwrap_or(chars.len());
            let comment: String = chars[i..end].iter().collect();
            push_colored(&mut out, COMMENT_COLOR, false, &comment);
            i = end;
        } else if c == '\\' && next == Some('@') && (i == 0 || chars[i - 1] != '\\') {
            let start = i + 1;
            let mut end = start + 1;
            while end < chars.len() && is_identifier_char(chars[end]) {
                end += 1;
            }
            let annotation: String = chars[start..end].iter().collect();
            push_colored(&mut out, ANNOTATION_COLOR, true, &annotation);
            i = end;
        } else {
            out.push(c);
            i += 1;
        }
    }

    out
}

fn scan_until(chars: &[char], from: usize, stop: impl Fn(char) -> bool) -> Option<usize> {
    chars[from..].iter().position(|&c| stop(c)).map(|p| from + p)
}

fn closing_quote(chars: &[char], open: usize) -> Option<usize> {
    (open + 1..chars.len()).find(|&j| chars[j] == '"' && chars[j - 1] != '\\')
}

fn push_colored(out: &mut String, color: &str, bold: bool, text: &str) {
    out.push_str("<font color=\"");
    out.push_str(color);
    out.push_str("\">");
    if bold {
        out.push_str("<b>");
        out.push_str(text);
        out.push_str("</b>");
    } else {
        out.push_str(text);
    }
    out.push_str("</font>");
}

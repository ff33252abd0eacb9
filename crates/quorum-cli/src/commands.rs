// Rust guideline compliant 2026-10-16

//! Command implementations for the Quorum CLI.

pub mod accept;
pub mod answer;
pub mod ask;
pub mod delete;
pub mod doctor;
pub mod edit;
pub mod init;
pub mod list;
pub mod show;
pub mod vote;

use anyhow::{bail, Context, Result};
use std::fmt;
use std::io::Read;

/// A failure whose details the command already printed.
///
/// In JSON mode the caller exits non-zero without printing an error
/// envelope, so stdout holds a single document.
#[derive(Debug)]
pub struct ReportedFailure(pub String);

impl fmt::Display for ReportedFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ReportedFailure {}

/// Returns the inline text, or the contents of `file` (`-` reads stdin).
///
/// # Errors
///
/// Returns an error if both are given or the file cannot be read.
pub(crate) fn read_text(inline: Option<String>, file: Option<String>) -> Result<Option<String>> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("Pass the text inline or from a file, not both"),
        (Some(text), None) => Ok(Some(text)),
        (None, Some(path)) if path == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(Some(text))
        }
        (None, Some(path)) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {path}"))?;
            Ok(Some(text))
        }
        (None, None) => Ok(None),
    }
}

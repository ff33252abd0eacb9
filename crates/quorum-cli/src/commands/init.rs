// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm init` command.
//!
//! Creates the `.quorum` directory with a default config and empty
//! question and answer collections.

use crate::OutputFormatter;
use anyhow::Result;
use quorum_app::RepoContext;
use std::path::Path;

/// Initializes a Quorum repository at `root`.
///
/// Running it on an initialized repository keeps existing data.
///
/// # Errors
///
/// Returns an error if the directory or any of its files cannot be created.
pub fn execute(root: &Path, formatter: &dyn OutputFormatter) -> Result<()> {
    let repo = RepoContext::init(root)?;
    let message = format!(
        "Quorum repository initialized at {}",
        repo.quorum_dir().display()
    );
    println!("{}", formatter.format_message("init", &message));
    Ok(())
}

// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm doctor` command.
//!
//! Checks that answers and their questions agree and, with `--fix`,
//! repairs what it finds.

use super::ReportedFailure;
use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;
use quorum_app::doctor;

/// Executes the doctor command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, or if errors
/// were found and `fix` was not requested.
pub fn execute(session: &Session, fix: bool, formatter: &dyn OutputFormatter) -> Result<()> {
    let report = doctor::run(session.forum().store(), fix)?;
    println!("{}", formatter.format_doctor(&report).trim_end());

    if report.has_errors() && !fix {
        return Err(ReportedFailure(
            "Doctor found errors. Run with --fix to attempt repairs.".to_string(),
        )
        .into());
    }
    Ok(())
}

// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm show` command.
//!
//! Displays a question with its answers, supporting both full and partial
//! ID resolution.

use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;
use quorum_core::EntityKind;

/// Shows a question and its answers.
///
/// # Errors
///
/// Returns an error if:
/// - The question ID is not found
/// - The question ID is ambiguous (matches multiple questions)
/// - The store cannot be read
pub fn execute(session: &Session, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Question, &id)?;
    let thread = forum.get_question(&full_id)?;
    println!("{}", formatter.format_thread(&thread));
    Ok(())
}

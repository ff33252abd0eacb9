// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm accept` command.

use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;
use quorum_core::EntityKind;

/// Accepts an answer on a question the requester asked.
///
/// Any previously accepted answer on the same question is cleared.
///
/// # Errors
///
/// Returns an error if the answer is not found or the requester did not ask
/// the question.
pub fn execute(session: &Session, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Answer, &id)?;
    let answer = forum.accept_answer(&full_id, &session.requester()?)?;
    println!("{}", formatter.format_answer("accept", &answer));
    Ok(())
}

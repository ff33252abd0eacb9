// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm delete` and `qrm delete-answer` commands.

use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;
use quorum_core::EntityKind;

/// Deletes a question owned by the requester, along with all of its answers.
///
/// # Errors
///
/// Returns an error if the question is not found or not owned by the requester.
pub fn question(session: &Session, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Question, &id)?;
    let deleted = forum.delete_question(&full_id, &session.requester()?)?;
    println!("{}", formatter.format_deleted_question(&deleted));
    Ok(())
}

/// Deletes an answer owned by the requester and detaches it from its question.
///
/// # Errors
///
/// Returns an error if the answer is not found or not owned by the requester.
pub fn answer(session: &Session, id: String, formatter: &dyn OutputFormatter) -> Result<()> {
    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Answer, &id)?;
    let answer = forum.delete_answer(&full_id, &session.requester()?)?;
    println!("{}", formatter.format_answer("delete-answer", &answer));
    Ok(())
}

// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm answer` command.

use crate::commands::read_text;
use crate::session::Session;
use crate::OutputFormatter;
use anyhow::{bail, Result};
use quorum_core::EntityKind;

/// Answers a question as the requester.
///
/// # Errors
///
/// Returns an error if the question is not found or the answer is blank.
pub fn execute(
    session: &Session,
    question_id: String,
    content: Option<String>,
    content_file: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let Some(content) = read_text(content, content_file)? else {
        bail!("Pass the answer text or --content-file");
    };

    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Question, &question_id)?;
    let answer = forum.create_answer(&full_id, &session.requester()?, &content)?;

    println!("{}", formatter.format_answer("answer", &answer));
    Ok(())
}

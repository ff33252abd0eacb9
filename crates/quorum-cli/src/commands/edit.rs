// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm edit` and `qrm edit-answer` commands.

use crate::commands::read_text;
use crate::session::Session;
use crate::OutputFormatter;
use anyhow::{bail, Result};
use quorum_core::{EntityKind, QuestionUpdate};

/// Edits a question owned by the requester.
///
/// Only the given fields change. `clear_tags` removes every tag; otherwise a
/// non-empty `tags` replaces them.
///
/// # Errors
///
/// Returns an error if:
/// - No field was given
/// - The question is not found or not owned by the requester
/// - A new title or body is blank
#[allow(clippy::too_many_arguments)]
pub fn question(
    session: &Session,
    id: String,
    title: Option<String>,
    content: Option<String>,
    content_file: Option<String>,
    tags: Vec<String>,
    clear_tags: bool,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let update = QuestionUpdate {
        title,
        content: read_text(content, content_file)?,
        tags: if clear_tags {
            Some(Vec::new())
        } else if tags.is_empty() {
            None
        } else {
            Some(tags)
        },
    };
    if update.is_empty() {
        bail!("Nothing to update. Pass --title, --content, --tag or --clear-tags.");
    }

    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Question, &id)?;
    let question = forum.update_question(&full_id, &session.requester()?, update)?;

    println!("{}", formatter.format_question("edit", &question));
    Ok(())
}

/// Replaces the body of an answer owned by the requester.
///
/// # Errors
///
/// Returns an error if the answer is not found, not owned by the requester,
/// or the new body is blank.
pub fn answer(
    session: &Session,
    id: String,
    content: Option<String>,
    content_file: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let Some(content) = read_text(content, content_file)? else {
        bail!("Pass the new answer text or --content-file");
    };

    let forum = session.forum();
    let full_id = forum.resolve_id(EntityKind::Answer, &id)?;
    let answer = forum.update_answer(&full_id, &session.requester()?, &content)?;

    println!("{}", formatter.format_answer("edit-answer", &answer));
    Ok(())
}

// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm ask` command.

use crate::commands::read_text;
use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;
use quorum_core::NewQuestion;

/// Posts a new question as the requester.
///
/// # Arguments
///
/// * `title` - Question title
/// * `content` - Inline body text
/// * `content_file` - Body text from a file (`-` for stdin)
/// * `tags` - Tags to attach
///
/// # Errors
///
/// Returns an error if the title or body is blank or the store cannot be written.
pub fn execute(
    session: &Session,
    title: String,
    content: Option<String>,
    content_file: Option<String>,
    tags: Vec<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let content = read_text(content, content_file)?.unwrap_or_default();
    let author = session.requester()?;

    let question = session.forum().create_question(
        &author,
        NewQuestion {
            title,
            content,
            tags,
        },
    )?;

    println!("{}", formatter.format_question("ask", &question));
    Ok(())
}

// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm list` command.

use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;

/// Lists questions, newest first, optionally restricted to a tag or author.
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn execute(
    session: &Session,
    tag: Option<String>,
    author: Option<String>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let tag = tag.map(|t| t.trim().to_string());
    let questions: Vec<_> = session
        .forum()
        .list_questions()?
        .into_iter()
        .filter(|q| tag.as_ref().map_or(true, |t| q.tags.contains(t)))
        .filter(|q| author.as_deref().map_or(true, |a| q.author.as_str() == a))
        .collect();

    println!("{}", formatter.format_list(&questions));
    Ok(())
}

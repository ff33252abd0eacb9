// Rust guideline compliant 2026-10-16

//! Implementation of the `qrm vote` command.
//!
//! Voting the same direction twice withdraws the vote; voting the other
//! direction switches it.

use crate::session::Session;
use crate::OutputFormatter;
use anyhow::Result;

/// Votes on a question or answer, chosen by the ID prefix.
///
/// # Errors
///
/// Returns an error if the ID has no known prefix or matches nothing.
pub fn execute(
    session: &Session,
    id: String,
    direction: String,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let forum = session.forum();
    let (_, full_id) = forum.resolve_any(&id)?;
    let result = forum.vote(&full_id, &session.requester()?, &direction)?;
    println!("{}", formatter.format_vote(&result));
    Ok(())
}

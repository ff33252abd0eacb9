// Rust guideline compliant 2026-10-16

//! Acceptance engine.
//!
//! A question has at most one accepted answer. Only the question's author may
//! accept. Acceptance clears the flag on every answer of the question, then sets
//! it on the target; callers run this inside a single store transaction so no
//! reader sees two accepted answers.

use crate::auth::ensure_owner;
use crate::models::{Answer, UserId};
use crate::store::Tables;
use crate::Result;

/// Marks an answer as the accepted answer of its question.
///
/// # Arguments
///
/// * `tables` - Transaction tables
/// * `answer_id` - Answer to accept
/// * `requester` - Identity making the request
/// * `now` - Timestamp recorded on changed answers
///
/// # Returns
///
/// The accepted answer.
///
/// # Errors
///
/// Returns an error if:
/// - The answer or its parent question does not exist (`NotFound`)
/// - The requester is not the question's author (`Forbidden`)
pub fn accept_answer(
    tables: &mut Tables,
    answer_id: &str,
    requester: &UserId,
    now: i64,
) -> Result<Answer> {
    let question_id = tables.answer(answer_id)?.question_id.clone();
    let question = tables.question(&question_id)?;
    ensure_owner(
        &question.author,
        requester,
        &format!("accept answers on question {question_id}"),
    )?;

    for sibling in tables.answers_for_mut(&question_id) {
        if sibling.accepted && sibling.id != answer_id {
            sibling.accepted = false;
            sibling.updated_at = now;
        }
    }

    let answer = tables.answer_mut(answer_id)?;
    if !answer.accepted {
        answer.accepted = true;
        answer.updated_at = now;
    }
    let accepted = answer.clone();

    debug_assert_eq!(accepted_count(tables, &question_id), 1);
    Ok(accepted)
}

/// Returns the accepted answer of a question, if any.
#[must_use]
pub fn accepted_answer<'a>(tables: &'a Tables, question_id: &'a str) -> Option<&'a Answer> {
    tables.answers_for(question_id).find(|a| a.accepted)
}

/// Number of accepted answers under a question.
#[must_use]
pub fn accepted_count(tables: &Tables, question_id: &str) -> usize {
    tables.answers_for(question_id).filter(|a| a.accepted).count()
}

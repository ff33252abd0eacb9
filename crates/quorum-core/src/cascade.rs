// Rust guideline compliant 2026-10-16

//! Cascade manager.
//!
//! Keeps `Question::answers` and `Answer::question_id` consistent across the
//! answer lifecycle:
//!
//! - Creating an answer appends its ID to the parent's list
//! - Deleting an answer removes its ID from the parent's list
//! - Deleting a question deletes all of its answers
//!
//! Both sides change inside one transaction.

use crate::auth::ensure_owner;
use crate::identity::generate_unique_id;
use crate::models::{required_text, Answer, EntityKind, UserId, Votes};
use crate::store::Tables;
use crate::Result;
use serde::Serialize;

/// Result of deleting a question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedQuestion {
    /// ID of the deleted question.
    pub id: String,
    /// IDs of the answers deleted with it.
    pub answer_ids: Vec<String>,
}

/// Creates an answer and appends it to its question.
///
/// # Arguments
///
/// * `tables` - Transaction tables
/// * `question_id` - Parent question
/// * `author` - Answer author
/// * `content` - Answer body
/// * `now` - Creation timestamp
///
/// # Returns
///
/// The new answer.
///
/// # Errors
///
/// Returns an error if:
/// - The question does not exist (`NotFound`)
/// - The content is blank (`InvalidInput`)
pub fn create_answer(
    tables: &mut Tables,
    question_id: &str,
    author: &UserId,
    content: &str,
    now: i64,
) -> Result<Answer> {
    tables.question(question_id)?;
    let content = required_text("Answer content", content)?;

    let id = generate_unique_id(
        EntityKind::Answer,
        &format!("{question_id}{content}"),
        author.as_str(),
        now,
        |candidate| tables.contains_answer(candidate),
    );

    let answer = Answer {
        id,
        question_id: question_id.to_string(),
        content,
        author: author.clone(),
        votes: Votes::default(),
        accepted: false,
        created_at: now,
        updated_at: now,
    };
    answer.validate()?;

    tables.insert_answer(answer.clone());
    tables.question_mut(question_id)?.answers.push(answer.id.clone());

    Ok(answer)
}

/// Deletes an answer and detaches it from its question.
///
/// A missing parent is tolerated so orphaned answers can still be removed.
///
/// # Returns
///
/// The deleted answer.
///
/// # Errors
///
/// Returns an error if:
/// - The answer does not exist (`NotFound`)
/// - The requester is not the answer's author (`Forbidden`)
pub fn delete_answer(tables: &mut Tables, answer_id: &str, requester: &UserId) -> Result<Answer> {
    let answer = tables.answer(answer_id)?;
    ensure_owner(&answer.author, requester, &format!("delete answer {answer_id}"))?;
    let question_id = answer.question_id.clone();

    if tables.contains_question(&question_id) {
        tables
            .question_mut(&question_id)?
            .answers
            .retain(|id| id != answer_id);
    }

    tables.remove_answer(answer_id)
}

/// Deletes a question together with all of its answers.
///
/// Answers are found by their parent reference, so answers missing from the
/// question's list are removed too.
///
/// # Errors
///
/// Returns an error if:
/// - The question does not exist (`NotFound`)
/// - The requester is not the question's author (`Forbidden`)
pub fn delete_question(
    tables: &mut Tables,
    question_id: &str,
    requester: &UserId,
) -> Result<DeletedQuestion> {
    let question = tables.question(question_id)?;
    ensure_owner(
        &question.author,
        requester,
        &format!("delete question {question_id}"),
    )?;

    let removed = tables.drain_answers(|a| a.question_id == question_id);
    tables.remove_question(question_id)?;

    Ok(DeletedQuestion {
        id: question_id.to_string(),
        answer_ids: removed.into_iter().map(|a| a.id).collect(),
    })
}

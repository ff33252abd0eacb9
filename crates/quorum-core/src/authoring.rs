// Rust guideline compliant 2026-10-16

//! Creating and editing questions and answers.

use crate::auth::ensure_owner;
use crate::identity::generate_unique_id;
use crate::models::{normalize_tags, required_text, Answer, EntityKind, Question, UserId, Votes};
use crate::store::Tables;
use crate::Result;

/// Fields accepted when creating a question.
#[derive(Debug, Clone, Default)]
pub struct NewQuestion {
    /// Title.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Raw tags; normalized on creation.
    pub tags: Vec<String>,
}

/// Partial update of a question. `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct QuestionUpdate {
    /// New title.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// Replacement tag list.
    pub tags: Option<Vec<String>>,
}

impl QuestionUpdate {
    /// Returns true if no field would change.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.tags.is_none()
    }
}

/// Creates a question.
///
/// # Errors
///
/// Returns `InvalidInput` if the title or content is blank.
pub fn create_question(
    tables: &mut Tables,
    author: &UserId,
    input: NewQuestion,
    now: i64,
) -> Result<Question> {
    let title = required_text("Question title", &input.title)?;
    let content = required_text("Question content", &input.content)?;

    let id = generate_unique_id(
        EntityKind::Question,
        &title,
        author.as_str(),
        now,
        |candidate| tables.contains_question(candidate),
    );

    let question = Question {
        id,
        title,
        content,
        tags: normalize_tags(input.tags),
        author: author.clone(),
        answers: Vec::new(),
        votes: Votes::default(),
        created_at: now,
        updated_at: now,
    };
    question.validate()?;

    tables.insert_question(question.clone());
    Ok(question)
}

/// Applies a partial update to a question owned by the requester.
///
/// # Errors
///
/// Returns an error if:
/// - The question does not exist (`NotFound`)
/// - The requester is not the author (`Forbidden`)
/// - A provided title or content is blank (`InvalidInput`)
pub fn update_question(
    tables: &mut Tables,
    question_id: &str,
    requester: &UserId,
    update: QuestionUpdate,
    now: i64,
) -> Result<Question> {
    let question = tables.question(question_id)?;
    ensure_owner(
        &question.author,
        requester,
        &format!("edit question {question_id}"),
    )?;

    let mut updated = question.clone();
    if let Some(title) = update.title {
        updated.title = required_text("Question title", &title)?;
    }
    if let Some(content) = update.content {
        updated.content = required_text("Question content", &content)?;
    }
    if let Some(tags) = update.tags {
        updated.tags = normalize_tags(tags);
    }
    updated.updated_at = now;
    updated.validate()?;

    *tables.question_mut(question_id)? = updated.clone();
    Ok(updated)
}

/// Replaces the content of an answer owned by the requester.
///
/// # Errors
///
/// Returns an error if:
/// - The answer does not exist (`NotFound`)
/// - The requester is not the author (`Forbidden`)
/// - The content is blank (`InvalidInput`)
pub fn update_answer(
    tables: &mut Tables,
    answer_id: &str,
    requester: &UserId,
    content: &str,
    now: i64,
) -> Result<Answer> {
    let answer = tables.answer(answer_id)?;
    ensure_owner(&answer.author, requester, &format!("edit answer {answer_id}"))?;
    let content = required_text("Answer content", content)?;

    let answer = tables.answer_mut(answer_id)?;
    answer.content = content;
    answer.updated_at = now;
    Ok(answer.clone())
}

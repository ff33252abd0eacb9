// Rust guideline compliant 2026-10-16

//! Forum service.
//!
//! Runs every operation as one transaction against an [`EntityStore`] and logs
//! successful mutations. Requester identities come from the caller, which is
//! responsible for authenticating them.

use crate::error::Result;
use quorum_core::accept::{self, accepted_answer};
use quorum_core::authoring::{self, NewQuestion, QuestionUpdate};
use quorum_core::cascade::{self, DeletedQuestion};
use quorum_core::identity::resolve_partial_id;
use quorum_core::time::unix_timestamp;
use quorum_core::vote::{self, VoteOutcome};
use quorum_core::{Answer, EntityKind, EntityStore, Error, Question, Tables, UserId};
use serde::Serialize;
use tracing::{debug, info};

/// A question together with its answers in list order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionThread {
    /// The question.
    pub question: Question,
    /// Its answers, in the order of `question.answers`.
    pub answers: Vec<Answer>,
}

impl QuestionThread {
    /// The accepted answer, if any.
    #[must_use]
    pub fn accepted(&self) -> Option<&Answer> {
        self.answers.iter().find(|a| a.accepted)
    }
}

/// Entity touched by a vote.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VoteTarget {
    /// A question.
    Question(Question),
    /// An answer.
    Answer(Answer),
}

impl VoteTarget {
    /// ID of the voted entity.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            VoteTarget::Question(q) => &q.id,
            VoteTarget::Answer(a) => &a.id,
        }
    }

    /// Vote membership after the vote.
    #[must_use]
    pub fn votes(&self) -> &quorum_core::Votes {
        match self {
            VoteTarget::Question(q) => &q.votes,
            VoteTarget::Answer(a) => &a.votes,
        }
    }
}

/// Result of a vote request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoteResult {
    /// What happened to the voter's membership.
    pub outcome: VoteOutcome,
    /// The entity after the vote.
    pub target: VoteTarget,
}

/// Question-and-answer operations over an entity store.
#[derive(Debug, Clone)]
pub struct Forum<S> {
    store: S,
}

impl<S: EntityStore> Forum<S> {
    /// Creates a service over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Posts a question.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the title or content is blank.
    pub fn create_question(&self, author: &UserId, input: NewQuestion) -> Result<Question> {
        let now = unix_timestamp();
        let question = self
            .store
            .transaction(|tables| authoring::create_question(tables, author, input, now))?;
        info!(question = %question.id, author = %author, "question created");
        Ok(question)
    }

    /// Edits a question owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Forbidden` or `InvalidInput`.
    pub fn update_question(
        &self,
        question_id: &str,
        requester: &UserId,
        update: QuestionUpdate,
    ) -> Result<Question> {
        let now = unix_timestamp();
        let question = self.store.transaction(|tables| {
            authoring::update_question(tables, question_id, requester, update, now)
        })?;
        info!(question = %question.id, requester = %requester, "question updated");
        Ok(question)
    }

    /// Deletes a question and all of its answers.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `Forbidden`.
    pub fn delete_question(&self, question_id: &str, requester: &UserId) -> Result<DeletedQuestion> {
        let deleted = self
            .store
            .transaction(|tables| cascade::delete_question(tables, question_id, requester))?;
        info!(
            question = %deleted.id,
            answers = deleted.answer_ids.len(),
            requester = %requester,
            "question deleted with its answers"
        );
        Ok(deleted)
    }

    /// Loads a question with its answers.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the question does not exist.
    pub fn get_question(&self, question_id: &str) -> Result<QuestionThread> {
        Ok(self.store.read(|tables| thread_of(tables, question_id))?)
    }

    /// All questions, newest first.
    ///
    /// Questions created within the same second keep reverse insertion
    /// order, so the most recently stored one still comes first.
    ///
    /// # Errors
    ///
    /// Returns store loading errors.
    pub fn list_questions(&self) -> Result<Vec<Question>> {
        Ok(self.store.read(|tables| {
            let mut questions: Vec<Question> = tables.questions().iter().rev().cloned().collect();
            questions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(questions)
        })?)
    }

    /// Loads a single answer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the answer does not exist.
    pub fn get_answer(&self, answer_id: &str) -> Result<Answer> {
        Ok(self.store.read(|tables| Ok(tables.answer(answer_id)?.clone()))?)
    }

    /// Answers a question.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the question does not exist, `InvalidInput` if the
    /// content is blank.
    pub fn create_answer(&self, question_id: &str, author: &UserId, content: &str) -> Result<Answer> {
        let now = unix_timestamp();
        let answer = self.store.transaction(|tables| {
            cascade::create_answer(tables, question_id, author, content, now)
        })?;
        info!(answer = %answer.id, question = %question_id, author = %author, "answer created");
        Ok(answer)
    }

    /// Edits an answer owned by the requester.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `Forbidden` or `InvalidInput`.
    pub fn update_answer(&self, answer_id: &str, requester: &UserId, content: &str) -> Result<Answer> {
        let now = unix_timestamp();
        let answer = self.store.transaction(|tables| {
            authoring::update_answer(tables, answer_id, requester, content, now)
        })?;
        info!(answer = %answer.id, requester = %requester, "answer updated");
        Ok(answer)
    }

    /// Deletes an answer owned by the requester and detaches it from its question.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `Forbidden`.
    pub fn delete_answer(&self, answer_id: &str, requester: &UserId) -> Result<Answer> {
        let answer = self
            .store
            .transaction(|tables| cascade::delete_answer(tables, answer_id, requester))?;
        info!(
            answer = %answer.id,
            question = %answer.question_id,
            requester = %requester,
            "answer deleted"
        );
        Ok(answer)
    }

    /// Marks an answer as accepted, clearing any previously accepted sibling.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `Forbidden`.
    pub fn accept_answer(&self, answer_id: &str, requester: &UserId) -> Result<Answer> {
        let now = unix_timestamp();
        let answer = self
            .store
            .transaction(|tables| accept::accept_answer(tables, answer_id, requester, now))?;
        info!(
            answer = %answer.id,
            question = %answer.question_id,
            requester = %requester,
            "answer accepted"
        );
        Ok(answer)
    }

    /// The accepted answer of a question, if any.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the question does not exist.
    pub fn accepted_answer(&self, question_id: &str) -> Result<Option<Answer>> {
        Ok(self.store.read(|tables| {
            tables.question(question_id)?;
            Ok(accepted_answer(tables, question_id).cloned())
        })?)
    }

    /// Votes on a question.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the question does not exist.
    pub fn vote_question(&self, question_id: &str, voter: &UserId, direction: &str) -> Result<VoteResult> {
        let (question, outcome) = self
            .store
            .transaction(|tables| vote::vote_question(tables, question_id, voter, direction))?;
        log_vote(&question.id, voter, direction, outcome);
        Ok(VoteResult {
            outcome,
            target: VoteTarget::Question(question),
        })
    }

    /// Votes on an answer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the answer does not exist.
    pub fn vote_answer(&self, answer_id: &str, voter: &UserId, direction: &str) -> Result<VoteResult> {
        let (answer, outcome) = self
            .store
            .transaction(|tables| vote::vote_answer(tables, answer_id, voter, direction))?;
        log_vote(&answer.id, voter, direction, outcome);
        Ok(VoteResult {
            outcome,
            target: VoteTarget::Answer(answer),
        })
    }

    /// Votes on a question or answer, dispatching on the ID prefix.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the ID has no known prefix, otherwise as
    /// [`Forum::vote_question`] and [`Forum::vote_answer`].
    pub fn vote(&self, entity_id: &str, voter: &UserId, direction: &str) -> Result<VoteResult> {
        match EntityKind::from_id(entity_id) {
            Some(EntityKind::Question) => self.vote_question(entity_id, voter, direction),
            Some(EntityKind::Answer) => self.vote_answer(entity_id, voter, direction),
            None => Err(Error::InvalidInput(format!(
                "'{entity_id}' is neither a question (q-) nor an answer (ans-) ID"
            ))
            .into()),
        }
    }

    /// Resolves a full or partial ID of the given kind.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `AmbiguousId` or `InvalidInput` (too short).
    pub fn resolve_id(&self, kind: EntityKind, partial: &str) -> Result<String> {
        Ok(self.store.read(|tables| match kind {
            EntityKind::Question => {
                resolve_partial_id(partial, kind, tables.questions().iter().map(|q| q.id.as_str()))
            }
            EntityKind::Answer => {
                resolve_partial_id(partial, kind, tables.answers().iter().map(|a| a.id.as_str()))
            }
        })?)
    }

    /// Resolves a partial ID whose prefix names its kind (`q-` or `ans-`).
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown prefix, otherwise as
    /// [`Forum::resolve_id`].
    pub fn resolve_any(&self, partial: &str) -> Result<(EntityKind, String)> {
        let kind = EntityKind::from_id(partial.trim()).ok_or_else(|| {
            Error::InvalidInput(format!(
                "'{partial}' is neither a question (q-) nor an answer (ans-) ID"
            ))
        })?;
        Ok((kind, self.resolve_id(kind, partial)?))
    }
}

fn thread_of(tables: &Tables, question_id: &str) -> quorum_core::Result<QuestionThread> {
    let question = tables.question(question_id)?.clone();
    let answers = question
        .answers
        .iter()
        .filter_map(|id| tables.answer(id).ok())
        .filter(|a| a.question_id == question.id)
        .cloned()
        .collect();
    Ok(QuestionThread { question, answers })
}

fn log_vote(id: &str, voter: &UserId, direction: &str, outcome: VoteOutcome) {
    if outcome.changed() {
        info!(entity = %id, voter = %voter, ?outcome, "vote recorded");
    } else {
        debug!(entity = %id, voter = %voter, direction, "ignoring unrecognized vote direction");
    }
}

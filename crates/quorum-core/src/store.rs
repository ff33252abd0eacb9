// Rust guideline compliant 2026-10-16

//! Entity store abstraction.
//!
//! Every read and mutation runs against [`Tables`], a snapshot of both
//! collections. Stores hand out snapshots through [`EntityStore::read`] and
//! apply mutations through [`EntityStore::transaction`], which commits only
//! when the closure succeeds. Transactions on one store are serialized.

use crate::models::{Answer, EntityKind, Question};
use crate::{Error, Result};

/// In-memory view of the question and answer collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tables {
    questions: Vec<Question>,
    answers: Vec<Answer>,
    questions_dirty: bool,
    answers_dirty: bool,
}

impl Tables {
    /// Creates tables from loaded collections.
    #[must_use]
    pub fn new(questions: Vec<Question>, answers: Vec<Answer>) -> Self {
        Self {
            questions,
            answers,
            questions_dirty: false,
            answers_dirty: false,
        }
    }

    /// All questions in storage order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All answers in storage order.
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    /// Looks up a question.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no question has this ID.
    pub fn question(&self, id: &str) -> Result<&Question> {
        self.questions
            .iter()
            .find(|q| q.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Question, id.to_string()))
    }

    /// Looks up a question for modification.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no question has this ID.
    pub fn question_mut(&mut self, id: &str) -> Result<&mut Question> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Question, id.to_string()))?;
        self.questions_dirty = true;
        Ok(question)
    }

    /// Returns true if a question with this ID exists.
    #[must_use]
    pub fn contains_question(&self, id: &str) -> bool {
        self.questions.iter().any(|q| q.id == id)
    }

    /// Adds a question.
    pub fn insert_question(&mut self, question: Question) {
        self.questions.push(question);
        self.questions_dirty = true;
    }

    /// Removes a question and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no question has this ID.
    pub fn remove_question(&mut self, id: &str) -> Result<Question> {
        let pos = self
            .questions
            .iter()
            .position(|q| q.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Question, id.to_string()))?;
        self.questions_dirty = true;
        Ok(self.questions.remove(pos))
    }

    /// Looks up an answer.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no answer has this ID.
    pub fn answer(&self, id: &str) -> Result<&Answer> {
        self.answers
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Answer, id.to_string()))
    }

    /// Looks up an answer for modification.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no answer has this ID.
    pub fn answer_mut(&mut self, id: &str) -> Result<&mut Answer> {
        let answer = self
            .answers
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Answer, id.to_string()))?;
        self.answers_dirty = true;
        Ok(answer)
    }

    /// Returns true if an answer with this ID exists.
    #[must_use]
    pub fn contains_answer(&self, id: &str) -> bool {
        self.answers.iter().any(|a| a.id == id)
    }

    /// Adds an answer.
    pub fn insert_answer(&mut self, answer: Answer) {
        self.answers.push(answer);
        self.answers_dirty = true;
    }

    /// Removes an answer and returns it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no answer has this ID.
    pub fn remove_answer(&mut self, id: &str) -> Result<Answer> {
        let pos = self
            .answers
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| Error::NotFound(EntityKind::Answer, id.to_string()))?;
        self.answers_dirty = true;
        Ok(self.answers.remove(pos))
    }

    /// Answers whose parent is `question_id`, in storage order.
    pub fn answers_for<'a>(&'a self, question_id: &'a str) -> impl Iterator<Item = &'a Answer> + 'a {
        self.answers
            .iter()
            .filter(move |a| a.question_id == question_id)
    }

    /// Mutable answers whose parent is `question_id`.
    pub fn answers_for_mut<'a>(
        &'a mut self,
        question_id: &'a str,
    ) -> impl Iterator<Item = &'a mut Answer> + 'a {
        self.answers_dirty = true;
        self.answers
            .iter_mut()
            .filter(move |a| a.question_id == question_id)
    }

    /// Keeps only the answers matching the predicate, returning the removed ones.
    pub fn drain_answers<F>(&mut self, mut remove: F) -> Vec<Answer>
    where
        F: FnMut(&Answer) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.answers).into_iter().partition(|a| remove(a));
        self.answers = kept;
        if !removed.is_empty() {
            self.answers_dirty = true;
        }
        removed
    }

    /// Whether questions changed since load.
    #[must_use]
    pub fn questions_dirty(&self) -> bool {
        self.questions_dirty
    }

    /// Whether answers changed since load.
    #[must_use]
    pub fn answers_dirty(&self) -> bool {
        self.answers_dirty
    }

    pub(crate) fn mark_clean(&mut self) {
        self.questions_dirty = false;
        self.answers_dirty = false;
    }
}

/// Persistence layer for questions and answers.
pub trait EntityStore {
    /// Runs `f` over a consistent snapshot.
    ///
    /// # Errors
    ///
    /// Returns loading errors or the closure's error.
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>;

    /// Runs `f` over mutable tables and commits the changes if it returns `Ok`.
    ///
    /// Nothing is committed when `f` fails.
    ///
    /// # Errors
    ///
    /// Returns loading or commit errors, or the closure's error.
    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>;
}

impl<S: EntityStore> EntityStore for &S {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        (**self).read(f)
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        (**self).transaction(f)
    }
}

impl<S: EntityStore> EntityStore for std::sync::Arc<S> {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        (**self).read(f)
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        (**self).transaction(f)
    }
}

// Rust guideline compliant 2026-10-16

//! Integrity check and repair of the question and answer collections.
//!
//! The store keeps both collections consistent inside a transaction, but a
//! crash between the two file writes, or a hand-edited file, can leave
//! answers without a listed parent, list entries without an answer, several
//! accepted answers, or overlapping vote sets. [`inspect`] reports those
//! states and [`repair`] reconciles them.

use crate::error::Result;
use quorum_core::{EntityStore, Tables, UserId, Votes};
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use tracing::info;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Data violates an invariant that operations rely on.
    Error,
    /// Data is inconsistent but every operation still behaves.
    Warning,
}

/// A single integrity problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    /// Answer whose parent question does not exist.
    OrphanedAnswer {
        /// Answer ID.
        answer_id: String,
        /// Missing parent ID.
        question_id: String,
    },
    /// Answer missing from its parent's answer list.
    UnlistedAnswer {
        /// Answer ID.
        answer_id: String,
        /// Parent ID.
        question_id: String,
    },
    /// List entry naming a missing answer or one that belongs elsewhere.
    DanglingEntry {
        /// Question holding the entry.
        question_id: String,
        /// Listed answer ID.
        answer_id: String,
    },
    /// Answer listed more than once.
    DuplicateEntry {
        /// Question holding the entry.
        question_id: String,
        /// Repeated answer ID.
        answer_id: String,
    },
    /// Question with more than one accepted answer.
    MultipleAccepted {
        /// Question ID.
        question_id: String,
        /// Accepted answer IDs.
        answer_ids: Vec<String>,
    },
    /// Voters present in both the upvote and downvote set.
    OverlappingVotes {
        /// Question or answer ID.
        entity_id: String,
        /// Voters in both sets.
        voters: Vec<UserId>,
    },
}

impl Finding {
    /// Severity of this finding.
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Finding::UnlistedAnswer { .. } | Finding::DanglingEntry { .. } => Severity::Warning,
            Finding::OrphanedAnswer { .. }
            | Finding::DuplicateEntry { .. }
            | Finding::MultipleAccepted { .. }
            | Finding::OverlappingVotes { .. } => Severity::Error,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::OrphanedAnswer {
                answer_id,
                question_id,
            } => write!(f, "Answer {answer_id} references missing question {question_id}"),
            Finding::UnlistedAnswer {
                answer_id,
                question_id,
            } => write!(f, "Answer {answer_id} is not listed on question {question_id}"),
            Finding::DanglingEntry {
                question_id,
                answer_id,
            } => write!(
                f,
                "Question {question_id} lists {answer_id}, which is missing or belongs elsewhere"
            ),
            Finding::DuplicateEntry {
                question_id,
                answer_id,
            } => write!(f, "Question {question_id} lists {answer_id} more than once"),
            Finding::MultipleAccepted {
                question_id,
                answer_ids,
            } => write!(
                f,
                "Question {question_id} has {} accepted answers: {}",
                answer_ids.len(),
                answer_ids.join(", ")
            ),
            Finding::OverlappingVotes { entity_id, voters } => {
                let names: Vec<&str> = voters.iter().map(UserId::as_str).collect();
                write!(
                    f,
                    "{entity_id} has voters in both vote sets: {}",
                    names.join(", ")
                )
            }
        }
    }
}

/// Counts of changes made by [`repair`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepairSummary {
    /// Orphaned answers deleted.
    pub deleted_answers: usize,
    /// Unlisted answers appended to their parent's list.
    pub linked_answers: usize,
    /// Dangling or duplicate list entries dropped.
    pub dropped_entries: usize,
    /// Extra accepted flags cleared.
    pub unaccepted_answers: usize,
    /// Voter memberships removed from overlapping sets.
    pub removed_votes: usize,
}

impl RepairSummary {
    /// Returns true if nothing was changed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Findings, plus the repair summary when a fix was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoctorReport {
    /// Problems found before any repair.
    pub findings: Vec<Finding>,
    /// Changes applied, if `fix` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repaired: Option<RepairSummary>,
}

impl DoctorReport {
    /// Returns true if any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.findings
            .iter()
            .any(|finding| finding.severity() == Severity::Error)
    }

    /// Returns true if the data still needs attention.
    #[must_use]
    pub fn needs_fix(&self) -> bool {
        !self.findings.is_empty() && self.repaired.is_none()
    }
}

/// Lists every integrity problem in `tables`.
#[must_use]
pub fn inspect(tables: &Tables) -> Vec<Finding> {
    let mut findings = Vec::new();

    for answer in tables.answers() {
        match tables.question(&answer.question_id) {
            Err(_) => findings.push(Finding::OrphanedAnswer {
                answer_id: answer.id.clone(),
                question_id: answer.question_id.clone(),
            }),
            Ok(question) if !question.answers.contains(&answer.id) => {
                findings.push(Finding::UnlistedAnswer {
                    answer_id: answer.id.clone(),
                    question_id: question.id.clone(),
                });
            }
            Ok(_) => {}
        }
    }

    for question in tables.questions() {
        let mut seen = HashSet::new();
        for entry in &question.answers {
            if !seen.insert(entry.as_str()) {
                findings.push(Finding::DuplicateEntry {
                    question_id: question.id.clone(),
                    answer_id: entry.clone(),
                });
                continue;
            }
            let belongs = tables
                .answer(entry)
                .is_ok_and(|answer| answer.question_id == question.id);
            if !belongs {
                findings.push(Finding::DanglingEntry {
                    question_id: question.id.clone(),
                    answer_id: entry.clone(),
                });
            }
        }

        let accepted: Vec<String> = tables
            .answers_for(&question.id)
            .filter(|answer| answer.accepted)
            .map(|answer| answer.id.clone())
            .collect();
        if accepted.len() > 1 {
            findings.push(Finding::MultipleAccepted {
                question_id: question.id.clone(),
                answer_ids: accepted,
            });
        }

        push_overlap(&mut findings, &question.id, &question.votes);
    }

    for answer in tables.answers() {
        push_overlap(&mut findings, &answer.id, &answer.votes);
    }

    findings
}

fn push_overlap(findings: &mut Vec<Finding>, entity_id: &str, votes: &Votes) {
    let voters = votes.upvotes.intersection(&votes.downvotes);
    if !voters.is_empty() {
        findings.push(Finding::OverlappingVotes {
            entity_id: entity_id.to_string(),
            voters,
        });
    }
}

/// Reconciles every problem [`inspect`] reports.
///
/// Entities that need no change are left untouched, so a healthy store
/// commits nothing.
pub fn repair(tables: &mut Tables) -> RepairSummary {
    let mut summary = RepairSummary::default();

    let question_ids: HashSet<String> = tables.questions().iter().map(|q| q.id.clone()).collect();
    summary.deleted_answers = tables
        .drain_answers(|answer| !question_ids.contains(&answer.question_id))
        .len();

    for question_id in &question_ids {
        relink(tables, question_id, &mut summary);
        keep_latest_accepted(tables, question_id, &mut summary);
    }

    for question_id in &question_ids {
        let overlap = tables
            .question(question_id)
            .map(|q| q.votes.upvotes.intersection(&q.votes.downvotes))
            .unwrap_or_default();
        if !overlap.is_empty() {
            if let Ok(question) = tables.question_mut(question_id) {
                summary.removed_votes += drop_voters(&mut question.votes, &overlap);
            }
        }
    }

    let overlapping_answers: Vec<(String, Vec<UserId>)> = tables
        .answers()
        .iter()
        .map(|a| (a.id.clone(), a.votes.upvotes.intersection(&a.votes.downvotes)))
        .filter(|(_, voters)| !voters.is_empty())
        .collect();
    for (answer_id, voters) in overlapping_answers {
        if let Ok(answer) = tables.answer_mut(&answer_id) {
            summary.removed_votes += drop_voters(&mut answer.votes, &voters);
        }
    }

    summary
}

/// Rebuilds a question's answer list: keeps the first occurrence of every
/// entry that names one of its answers, then appends unlisted answers.
fn relink(tables: &mut Tables, question_id: &str, summary: &mut RepairSummary) {
    let Ok(question) = tables.question(question_id) else {
        return;
    };

    let mut seen = HashSet::new();
    let mut rebuilt: Vec<String> = Vec::with_capacity(question.answers.len());
    for entry in &question.answers {
        let belongs = tables
            .answer(entry)
            .is_ok_and(|answer| answer.question_id == question_id);
        if belongs && seen.insert(entry.clone()) {
            rebuilt.push(entry.clone());
        }
    }
    let dropped = question.answers.len() - rebuilt.len();

    let unlisted: Vec<String> = tables
        .answers_for(question_id)
        .filter(|answer| !seen.contains(&answer.id))
        .map(|answer| answer.id.clone())
        .collect();
    let linked = unlisted.len();
    rebuilt.extend(unlisted);

    if dropped == 0 && linked == 0 {
        return;
    }
    if let Ok(question) = tables.question_mut(question_id) {
        question.answers = rebuilt;
        summary.dropped_entries += dropped;
        summary.linked_answers += linked;
    }
}

/// Keeps only the most recently updated accepted answer of a question.
fn keep_latest_accepted(tables: &mut Tables, question_id: &str, summary: &mut RepairSummary) {
    let accepted: Vec<(i64, i64, String)> = tables
        .answers_for(question_id)
        .filter(|answer| answer.accepted)
        .map(|answer| (answer.updated_at, answer.created_at, answer.id.clone()))
        .collect();
    if accepted.len() < 2 {
        return;
    }

    let keep = accepted.iter().max().map(|(_, _, id)| id.clone());
    for answer in tables.answers_for_mut(question_id) {
        if answer.accepted && Some(&answer.id) != keep.as_ref() {
            answer.accepted = false;
            summary.unaccepted_answers += 1;
        }
    }
}

fn drop_voters(votes: &mut Votes, voters: &[UserId]) -> usize {
    voters
        .iter()
        .map(|voter| usize::from(votes.upvotes.remove(voter)) + usize::from(votes.downvotes.remove(voter)))
        .sum()
}

/// Inspects the store and, with `fix`, repairs it in one transaction.
///
/// # Errors
///
/// Returns store loading or commit errors.
pub fn run<S: EntityStore>(store: &S, fix: bool) -> Result<DoctorReport> {
    if !fix {
        let findings = store.read(|tables| Ok(inspect(tables)))?;
        return Ok(DoctorReport {
            findings,
            repaired: None,
        });
    }

    let report = store.transaction(|tables| {
        let findings = inspect(tables);
        let summary = repair(tables);
        Ok(DoctorReport {
            findings,
            repaired: Some(summary),
        })
    })?;

    if let Some(summary) = report.repaired.filter(|s| !s.is_empty()) {
        info!(
            deleted_answers = summary.deleted_answers,
            linked_answers = summary.linked_answers,
            dropped_entries = summary.dropped_entries,
            unaccepted_answers = summary.unaccepted_answers,
            removed_votes = summary.removed_votes,
            "repaired store"
        );
    }
    Ok(report)
}

// Rust guideline compliant 2026-10-16

//! Vote engine.
//!
//! Voting toggles membership in an entity's upvote and downvote sets:
//!
//! - Voting in the direction already held removes the vote
//! - Voting in a new direction adds the voter and drops any opposite vote
//! - An unrecognized direction changes nothing
//!
//! A voter is therefore in at most one of the two sets. Any identity may vote,
//! the author included.

use crate::models::{Answer, Question, UserId, VoteDirection, Votes};
use crate::store::Tables;
use crate::Result;
use serde::Serialize;

/// What a vote request did to the voter's membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "direction", rename_all = "snake_case")]
pub enum VoteOutcome {
    /// The voter was added to the set for this direction.
    Added(VoteDirection),
    /// The voter held this direction and was removed.
    Removed(VoteDirection),
    /// The voter moved from the opposite set to this direction.
    Switched(VoteDirection),
    /// The direction was not recognized; nothing changed.
    Ignored,
}

impl VoteOutcome {
    /// Returns true if the vote sets changed.
    #[must_use]
    pub fn changed(&self) -> bool {
        !matches!(self, VoteOutcome::Ignored)
    }
}

impl Votes {
    /// Applies the toggle rules for one voter and direction.
    ///
    /// # Arguments
    ///
    /// * `voter` - Identity casting the vote
    /// * `direction` - Requested direction
    ///
    /// # Returns
    ///
    /// The resulting [`VoteOutcome`].
    pub fn toggle(&mut self, voter: &UserId, direction: VoteDirection) -> VoteOutcome {
        let outcome = if self.set(direction).contains(voter) {
            self.set_mut(direction).remove(voter);
            VoteOutcome::Removed(direction)
        } else {
            let switched = self.set_mut(direction.opposite()).remove(voter);
            self.set_mut(direction).insert(voter.clone());
            if switched {
                VoteOutcome::Switched(direction)
            } else {
                VoteOutcome::Added(direction)
            }
        };

        debug_assert!(
            !(self.upvotes.contains(voter) && self.downvotes.contains(voter)),
            "a voter holds at most one direction"
        );
        outcome
    }
}

/// An entity carrying upvote and downvote sets.
pub trait Votable {
    /// Entity ID.
    fn id(&self) -> &str;

    /// Vote membership.
    fn votes(&self) -> &Votes;

    /// Mutable vote membership.
    fn votes_mut(&mut self) -> &mut Votes;
}

impl Votable for Question {
    fn id(&self) -> &str {
        &self.id
    }

    fn votes(&self) -> &Votes {
        &self.votes
    }

    fn votes_mut(&mut self) -> &mut Votes {
        &mut self.votes
    }
}

impl Votable for Answer {
    fn id(&self) -> &str {
        &self.id
    }

    fn votes(&self) -> &Votes {
        &self.votes
    }

    fn votes_mut(&mut self) -> &mut Votes {
        &mut self.votes
    }
}

/// Applies a raw vote request to an entity.
///
/// Unrecognized directions are a silent no-op.
pub fn apply_vote<E: Votable + ?Sized>(entity: &mut E, voter: &UserId, direction: &str) -> VoteOutcome {
    match VoteDirection::parse(direction) {
        Some(direction) => entity.votes_mut().toggle(voter, direction),
        None => VoteOutcome::Ignored,
    }
}

/// Votes on a question inside a transaction.
///
/// # Returns
///
/// The updated question and the vote outcome.
///
/// # Errors
///
/// Returns `NotFound` if the question does not exist.
pub fn vote_question(
    tables: &mut Tables,
    id: &str,
    voter: &UserId,
    direction: &str,
) -> Result<(Question, VoteOutcome)> {
    if VoteDirection::parse(direction).is_none() {
        let question = tables.question(id)?;
        return Ok((question.clone(), VoteOutcome::Ignored));
    }

    let question = tables.question_mut(id)?;
    let outcome = apply_vote(question, voter, direction);
    Ok((question.clone(), outcome))
}

/// Votes on an answer inside a transaction.
///
/// # Returns
///
/// The updated answer and the vote outcome.
///
/// # Errors
///
/// Returns `NotFound` if the answer does not exist.
pub fn vote_answer(
    tables: &mut Tables,
    id: &str,
    voter: &UserId,
    direction: &str,
) -> Result<(Answer, VoteOutcome)> {
    if VoteDirection::parse(direction).is_none() {
        let answer = tables.answer(id)?;
        return Ok((answer.clone(), VoteOutcome::Ignored));
    }

    let answer = tables.answer_mut(id)?;
    let outcome = apply_vote(answer, voter, direction);
    Ok((answer.clone(), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> UserId {
        UserId::new(name).expect("valid user")
    }

    #[test]
    fn test_toggle_add_then_remove() {
        let mut votes = Votes::default();
        let alice = user("alice");

        assert_eq!(
            votes.toggle(&alice, VoteDirection::Up),
            VoteOutcome::Added(VoteDirection::Up)
        );
        assert!(votes.upvotes.contains(&alice));

        assert_eq!(
            votes.toggle(&alice, VoteDirection::Up),
            VoteOutcome::Removed(VoteDirection::Up)
        );
        assert!(votes.upvotes.is_empty());
        assert!(votes.downvotes.is_empty());
    }

    #[test]
    fn test_toggle_switches_direction() {
        let mut votes = Votes::default();
        let alice = user("alice");

        votes.toggle(&alice, VoteDirection::Down);
        assert_eq!(
            votes.toggle(&alice, VoteDirection::Up),
            VoteOutcome::Switched(VoteDirection::Up)
        );
        assert!(votes.upvotes.contains(&alice));
        assert!(!votes.downvotes.contains(&alice));
    }

    #[test]
    fn test_toggle_tolerates_overlap_held_by_another_voter() {
        let mut votes = Votes::default();
        let stale = user("stale");
        votes.upvotes.insert(stale.clone());
        votes.downvotes.insert(stale.clone());

        let fresh = user("fresh");
        assert_eq!(
            votes.toggle(&fresh, VoteDirection::Up),
            VoteOutcome::Added(VoteDirection::Up)
        );
        assert!(votes.upvotes.contains(&fresh));
        assert!(!votes.downvotes.contains(&fresh));
        assert!(votes.upvotes.contains(&stale) && votes.downvotes.contains(&stale));
    }

    #[test]
    fn test_unknown_direction_is_ignored() {
        let mut votes = Votes::default();
        votes.toggle(&user("bob"), VoteDirection::Up);
        let before = votes.clone();

        struct Holder(Votes);
        impl Votable for Holder {
            fn id(&self) -> &str {
                "holder"
            }
            fn votes(&self) -> &Votes {
                &self.0
            }
            fn votes_mut(&mut self) -> &mut Votes {
                &mut self.0
            }
        }

        let mut holder = Holder(votes);
        assert_eq!(apply_vote(&mut holder, &user("bob"), "sideways"), VoteOutcome::Ignored);
        assert_eq!(holder.votes(), &before);
    }
}

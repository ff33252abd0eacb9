// Rust guideline compliant 2026-10-16

//! Core data models for Quorum.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Opaque identity of an authenticated user.
///
/// Issued by the external identity provider; Quorum only compares and stores it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a user identity, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the identity is empty after trimming.
    pub fn new(raw: impl Into<String>) -> crate::Result<Self> {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(crate::Error::InvalidInput(
                "User identity cannot be empty".to_string(),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the identity as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Kind of entity stored by Quorum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A question.
    Question,
    /// An answer to a question.
    Answer,
}

impl EntityKind {
    /// ID prefix used for this kind.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            EntityKind::Question => "q",
            EntityKind::Answer => "ans",
        }
    }

    /// Infers the entity kind from an ID or ID prefix.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if id.starts_with("ans-") {
            Some(EntityKind::Answer)
        } else if id.starts_with("q-") {
            Some(EntityKind::Question)
        } else {
            None
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Question => f.write_str("Question"),
            EntityKind::Answer => f.write_str("Answer"),
        }
    }
}

/// Direction of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    /// Upvote.
    Up,
    /// Downvote.
    Down,
}

impl VoteDirection {
    /// Parses a raw direction; anything other than `up` or `down` yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "up" => Some(VoteDirection::Up),
            "down" => Some(VoteDirection::Down),
            _ => None,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            VoteDirection::Up => VoteDirection::Down,
            VoteDirection::Down => VoteDirection::Up,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Up => f.write_str("up"),
            VoteDirection::Down => f.write_str("down"),
        }
    }
}

/// Set of voters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoteSet(BTreeSet<UserId>);

impl VoteSet {
    /// Returns true if the user is a member.
    #[must_use]
    pub fn contains(&self, user: &UserId) -> bool {
        self.0.contains(user)
    }

    /// Adds a user, returning true if they were not already present.
    pub fn insert(&mut self, user: UserId) -> bool {
        self.0.insert(user)
    }

    /// Removes a user, returning true if they were present.
    pub fn remove(&mut self, user: &UserId) -> bool {
        self.0.remove(user)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nobody is in the set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &UserId> {
        self.0.iter()
    }

    /// Returns true if no user is in both sets.
    #[must_use]
    pub fn is_disjoint(&self, other: &VoteSet) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Members present in both sets.
    #[must_use]
    pub fn intersection(&self, other: &VoteSet) -> Vec<UserId> {
        self.0.intersection(&other.0).cloned().collect()
    }
}

impl FromIterator<UserId> for VoteSet {
    fn from_iter<I: IntoIterator<Item = UserId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Upvote and downvote membership of a votable entity.
///
/// The two sets are disjoint; see [`crate::vote`] for the toggle rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Votes {
    /// Users who upvoted.
    #[serde(default)]
    pub upvotes: VoteSet,
    /// Users who downvoted.
    #[serde(default)]
    pub downvotes: VoteSet,
}

impl Votes {
    /// Set matching a direction.
    #[must_use]
    pub fn set(&self, direction: VoteDirection) -> &VoteSet {
        match direction {
            VoteDirection::Up => &self.upvotes,
            VoteDirection::Down => &self.downvotes,
        }
    }

    /// Mutable set matching a direction.
    pub fn set_mut(&mut self, direction: VoteDirection) -> &mut VoteSet {
        match direction {
            VoteDirection::Up => &mut self.upvotes,
            VoteDirection::Down => &mut self.downvotes,
        }
    }

    /// Direction the user currently holds, if any.
    #[must_use]
    pub fn direction_of(&self, user: &UserId) -> Option<VoteDirection> {
        if self.upvotes.contains(user) {
            Some(VoteDirection::Up)
        } else if self.downvotes.contains(user) {
            Some(VoteDirection::Down)
        } else {
            None
        }
    }

    /// Upvotes minus downvotes.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.upvotes.len() as i64 - self.downvotes.len() as i64
    }

    /// Returns true if the two sets are disjoint.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.upvotes.is_disjoint(&self.downvotes)
    }
}

/// A question posted by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Hash-based identifier (format: q-XXXXXX).
    pub id: String,
    /// One-line summary.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub content: String,
    /// Labels, sorted and deduplicated.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Author identity.
    pub author: UserId,
    /// Answer IDs in insertion order.
    #[serde(default)]
    pub answers: Vec<String>,
    /// Vote membership.
    #[serde(flatten)]
    pub votes: Votes,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last content change.
    pub updated_at: i64,
}

impl Question {
    /// Validates the question data.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title or content is blank
    /// - A tag is blank
    /// - The ID format is invalid
    pub fn validate(&self) -> crate::Result<()> {
        crate::identity::validate_id_format(&self.id, EntityKind::Question)?;

        if self.title.trim().is_empty() {
            return Err(crate::Error::InvalidInput(
                "Question title cannot be empty".to_string(),
            ));
        }

        if self.content.trim().is_empty() {
            return Err(crate::Error::InvalidInput(
                "Question content cannot be empty".to_string(),
            ));
        }

        if self.tags.iter().any(|tag| tag.trim().is_empty()) {
            return Err(crate::Error::InvalidInput(
                "Tags cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// An answer attached to a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Hash-based identifier (format: ans-XXXXXX).
    pub id: String,
    /// Parent question ID.
    pub question_id: String,
    /// Body text.
    pub content: String,
    /// Author identity.
    pub author: UserId,
    /// Vote membership.
    #[serde(flatten)]
    pub votes: Votes,
    /// Whether the question author accepted this answer.
    #[serde(default)]
    pub accepted: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last change.
    pub updated_at: i64,
}

impl Answer {
    /// Validates the answer data.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is blank or an ID is malformed.
    pub fn validate(&self) -> crate::Result<()> {
        crate::identity::validate_id_format(&self.id, EntityKind::Answer)?;
        crate::identity::validate_id_format(&self.question_id, EntityKind::Question)?;

        if self.content.trim().is_empty() {
            return Err(crate::Error::InvalidInput(
                "Answer content cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Normalizes raw tags: trims, drops blanks, deduplicates.
#[must_use]
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Trims required text, rejecting it when blank.
///
/// # Errors
///
/// Returns `InvalidInput` naming `field` if the value is blank.
pub fn required_text(field: &str, value: &str) -> crate::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::Error::InvalidInput(format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_direction_parse_is_strict() {
        assert_eq!(VoteDirection::parse("up"), Some(VoteDirection::Up));
        assert_eq!(VoteDirection::parse("down"), Some(VoteDirection::Down));
        assert_eq!(VoteDirection::parse("UP"), None);
        assert_eq!(VoteDirection::parse("sideways"), None);
    }

    #[test]
    fn test_entity_kind_from_id() {
        assert_eq!(EntityKind::from_id("q-abc123"), Some(EntityKind::Question));
        assert_eq!(EntityKind::from_id("ans-abc123"), Some(EntityKind::Answer));
        assert_eq!(EntityKind::from_id("abc123"), None);
    }

    #[test]
    fn test_user_id_rejects_blank() {
        assert!(UserId::new("   ").is_err());
        assert_eq!(UserId::new(" alice ").map(|u| u.to_string()).ok(), Some("alice".to_string()));
    }

    #[test]
    fn test_normalize_tags_dedupes_and_trims() {
        let tags = normalize_tags(["rust ", "", "rust", "async"]);
        assert_eq!(tags.into_iter().collect::<Vec<_>>(), vec!["async", "rust"]);
    }
}

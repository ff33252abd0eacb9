// Rust guideline compliant 2026-10-16

//! Hash-based ID generation and partial ID resolution.
//!
//! IDs take the form `<prefix>-<6 hex chars>` where the prefix is `q` for
//! questions and `ans` for answers. The hex part is derived from the content,
//! author, timestamp and a nonce, so collisions are resolved by bumping the nonce.

use crate::models::EntityKind;
use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Number of hex characters in the hash part of an ID.
pub const HASH_LEN: usize = 6;

/// Minimum length of a partial ID accepted for resolution.
pub const MIN_PARTIAL_LEN: usize = 3;

/// Generates a candidate ID.
///
/// # Arguments
///
/// * `kind` - Entity kind, selects the prefix
/// * `seed` - Content the hash is derived from (title or body)
/// * `author` - Author identifier
/// * `timestamp` - Creation timestamp
/// * `nonce` - Collision counter
#[must_use]
pub fn generate_id(kind: EntityKind, seed: &str, author: &str, timestamp: i64, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update(author.as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hex = format!("{:x}", hasher.finalize());
    format!("{}-{}", kind.prefix(), &hex[..HASH_LEN])
}

/// Generates an ID not rejected by `is_taken`.
pub fn generate_unique_id<F>(
    kind: EntityKind,
    seed: &str,
    author: &str,
    timestamp: i64,
    is_taken: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(kind, seed, author, timestamp, nonce);
        if !is_taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Validates the format of an ID for the given kind.
///
/// # Errors
///
/// Returns `InvalidInput` if the prefix does not match or the hash part is not
/// lowercase hex of the expected length.
pub fn validate_id_format(id: &str, kind: EntityKind) -> Result<()> {
    let expected = format!("{}-", kind.prefix());
    let hash = id.strip_prefix(&expected).ok_or_else(|| {
        Error::InvalidInput(format!("{kind} ID must start with '{expected}', got '{id}'"))
    })?;

    let valid = hash.len() == HASH_LEN
        && hash
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c));
    if !valid {
        return Err(Error::InvalidInput(format!(
            "{kind} ID must be '{expected}' followed by {HASH_LEN} hex characters, got '{id}'"
        )));
    }
    Ok(())
}

/// Resolves a partial ID against known IDs.
///
/// An exact match wins; otherwise the partial must be a prefix of exactly one ID.
///
/// # Errors
///
/// Returns an error if:
/// - The partial ID is shorter than [`MIN_PARTIAL_LEN`]
/// - No ID matches (`NotFound`)
/// - Several IDs match (`AmbiguousId`)
pub fn resolve_partial_id<'a, I>(partial: &str, kind: EntityKind, ids: I) -> Result<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let partial = partial.trim();
    if partial.len() < MIN_PARTIAL_LEN {
        return Err(Error::InvalidInput(format!(
            "ID must be at least {MIN_PARTIAL_LEN} characters, got '{partial}'"
        )));
    }

    let mut matches = Vec::new();
    for id in ids {
        if id == partial {
            return Ok(id.to_string());
        }
        if id.starts_with(partial) {
            matches.push(id.to_string());
        }
    }

    match matches.len() {
        0 => Err(Error::NotFound(kind, partial.to_string())),
        1 => Ok(matches.remove(0)),
        _ => {
            matches.sort();
            Err(Error::AmbiguousId(partial.to_string(), matches))
        }
    }
}

// Rust guideline compliant 2026-10-16

//! Ownership checks for mutating operations.
//!
//! Every mutation other than voting requires the requester to own a specific
//! record: the question author for question edits, deletes and acceptance, the
//! answer author for answer edits and deletes.

use crate::models::UserId;
use crate::{Error, Result};

/// Fails with `Forbidden` unless `requester` is `owner`.
///
/// # Arguments
///
/// * `owner` - Identity stored in the ownership field
/// * `requester` - Identity making the request
/// * `action` - Short description used in the error, e.g. "delete answer ans-1a2b3c"
///
/// # Errors
///
/// Returns `Forbidden` on mismatch.
pub fn ensure_owner(owner: &UserId, requester: &UserId, action: &str) -> Result<()> {
    if owner == requester {
        return Ok(());
    }
    Err(Error::Forbidden(format!(
        "{requester} is not allowed to {action}"
    )))
}

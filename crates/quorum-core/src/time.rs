// Rust guideline compliant 2026-10-16

//! Timestamp helpers.

use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in seconds, or 0 if the clock is before the epoch.
#[must_use]
pub fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// Rust guideline compliant 2026-10-16

//! Unit tests for partial ID resolution.

use quorum_core::identity::resolve_partial_id;
use quorum_core::{EntityKind, Error};

const IDS: [&str; 3] = ["q-a1b2c3", "q-a1ffff", "q-bbbbbb"];

#[test]
fn test_exact_match_wins() {
    let id = resolve_partial_id("q-a1b2c3", EntityKind::Question, IDS).expect("exact");
    assert_eq!(id, "q-a1b2c3");
}

#[test]
fn test_unique_prefix_resolves() {
    let id = resolve_partial_id("q-bb", EntityKind::Question, IDS).expect("prefix");
    assert_eq!(id, "q-bbbbbb");
}

#[test]
fn test_shared_prefix_is_ambiguous() {
    let err = resolve_partial_id("q-a1", EntityKind::Question, IDS).expect_err("ambiguous");
    match err {
        Error::AmbiguousId(partial, matches) => {
            assert_eq!(partial, "q-a1");
            assert_eq!(matches, vec!["q-a1b2c3".to_string(), "q-a1ffff".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_prefix_is_not_found() {
    let err = resolve_partial_id("q-zz", EntityKind::Question, IDS).expect_err("missing");
    assert!(err.is_not_found());
}

#[test]
fn test_too_short_is_invalid() {
    let err = resolve_partial_id("q-", EntityKind::Question, IDS).expect_err("short");
    assert!(matches!(err, Error::InvalidInput(_)));
}

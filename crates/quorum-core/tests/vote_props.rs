// Rust guideline compliant 2026-10-16

//! Property-based tests for the vote engine.
//!
//! These tests check the toggle rules over arbitrary vote sequences.

use proptest::prelude::*;
use quorum_core::{UserId, VoteDirection, Votes};
use std::collections::HashMap;

fn arb_direction() -> impl Strategy<Value = VoteDirection> {
    prop_oneof![Just(VoteDirection::Up), Just(VoteDirection::Down)]
}

fn voter(index: u8) -> UserId {
    UserId::new(format!("user-{index}")).expect("valid user")
}

proptest! {
    /// For any sequence of votes the two sets never share a member.
    #[test]
    fn prop_vote_sets_stay_disjoint(
        steps in prop::collection::vec((0u8..6, arb_direction()), 0..60),
    ) {
        let mut votes = Votes::default();
        for (index, direction) in steps {
            votes.toggle(&voter(index), direction);
            prop_assert!(votes.is_consistent());
        }
    }

    /// Voting the same direction twice restores the voter's prior state.
    #[test]
    fn prop_double_vote_is_identity_for_fresh_voter(
        setup in prop::collection::vec((1u8..6, arb_direction()), 0..20),
        direction in arb_direction(),
    ) {
        let mut votes = Votes::default();
        for (index, d) in setup {
            votes.toggle(&voter(index), d);
        }
        let before = votes.clone();
        let fresh = voter(0);

        votes.toggle(&fresh, direction);
        votes.toggle(&fresh, direction);

        prop_assert_eq!(votes, before);
    }

    /// The final membership matches a simple per-voter model.
    #[test]
    fn prop_membership_matches_model(
        steps in prop::collection::vec((0u8..4, arb_direction()), 0..40),
    ) {
        let mut votes = Votes::default();
        let mut model: HashMap<u8, Option<VoteDirection>> = HashMap::new();

        for (index, direction) in steps {
            votes.toggle(&voter(index), direction);
            let entry = model.entry(index).or_insert(None);
            *entry = if *entry == Some(direction) { None } else { Some(direction) };
        }

        for (index, expected) in model {
            prop_assert_eq!(votes.direction_of(&voter(index)), expected);
        }
    }
}

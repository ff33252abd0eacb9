// Rust guideline compliant 2026-10-16

//! Property-based tests for the acceptance engine.

use proptest::prelude::*;
use quorum_core::accept::{accept_answer, accepted_count};
use quorum_core::authoring::{create_question, NewQuestion};
use quorum_core::cascade::create_answer;
use quorum_core::{Tables, UserId};

fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user")
}

proptest! {
    /// After any sequence of author acceptances, exactly the last target is accepted.
    #[test]
    fn prop_exactly_one_accepted_answer(
        answer_count in 1usize..8,
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..10),
    ) {
        let owner = user("owner");
        let mut tables = Tables::default();
        let question = create_question(
            &mut tables,
            &owner,
            NewQuestion {
                title: "Pick one".to_string(),
                content: "Which is right?".to_string(),
                tags: Vec::new(),
            },
            1000,
        ).expect("create question");

        let ids: Vec<String> = (0..answer_count)
            .map(|n| {
                create_answer(&mut tables, &question.id, &user("helper"), &format!("answer {n}"), 1001)
                    .expect("create answer")
                    .id
            })
            .collect();

        let mut last = String::new();
        for (step, pick) in picks.iter().enumerate() {
            let target = &ids[pick.index(ids.len())];
            accept_answer(&mut tables, target, &owner, 2000 + step as i64).expect("accept");
            last = target.clone();
        }

        prop_assert_eq!(accepted_count(&tables, &question.id), 1);
        for answer in tables.answers_for(&question.id) {
            prop_assert_eq!(answer.accepted, answer.id == last);
        }
    }

    /// A non-author never changes any accepted flag.
    #[test]
    fn prop_non_author_cannot_accept(
        answer_count in 1usize..6,
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tables = Tables::default();
        let question = create_question(
            &mut tables,
            &user("owner"),
            NewQuestion {
                title: "Guarded".to_string(),
                content: "Only I choose".to_string(),
                tags: Vec::new(),
            },
            1000,
        ).expect("create question");

        let ids: Vec<String> = (0..answer_count)
            .map(|n| {
                create_answer(&mut tables, &question.id, &user("helper"), &format!("answer {n}"), 1001)
                    .expect("create answer")
                    .id
            })
            .collect();
        let before = tables.clone();

        let target = &ids[pick.index(ids.len())];
        let result = accept_answer(&mut tables, target, &user("intruder"), 2000);

        prop_assert!(result.is_err());
        prop_assert_eq!(tables.answers(), before.answers());
    }
}

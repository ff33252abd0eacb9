// Rust guideline compliant 2026-10-16

//! Integration tests for integrity inspection and repair.

use quorum_app::doctor::{self, inspect, repair};
use quorum_app::{Finding, Forum, Severity};
use quorum_core::{Answer, EntityStore, MemoryStore, Question, Tables, UserId, Votes};

fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user")
}

fn question(id: &str, answers: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        title: "Title".to_string(),
        content: "Body".to_string(),
        tags: Default::default(),
        author: user("asker"),
        answers: answers.iter().map(|a| a.to_string()).collect(),
        votes: Votes::default(),
        created_at: 100,
        updated_at: 100,
    }
}

fn answer(id: &str, question_id: &str) -> Answer {
    Answer {
        id: id.to_string(),
        question_id: question_id.to_string(),
        content: "Reply".to_string(),
        author: user("helper"),
        votes: Votes::default(),
        accepted: false,
        created_at: 100,
        updated_at: 100,
    }
}

#[test]
fn test_healthy_store_has_no_findings() {
    let forum = Forum::new(MemoryStore::new());
    let q = forum
        .create_question(
            &user("asker"),
            quorum_core::NewQuestion {
                title: "Healthy?".to_string(),
                content: "Yes".to_string(),
                tags: Vec::new(),
            },
        )
        .expect("ask");
    let a = forum.create_answer(&q.id, &user("helper"), "sure").expect("answer");
    forum.accept_answer(&a.id, &user("asker")).expect("accept");
    forum.vote(&a.id, &user("voter"), "up").expect("vote");

    let report = doctor::run(forum.store(), true).expect("doctor");
    assert!(report.findings.is_empty());
    assert!(report.repaired.expect("summary").is_empty());
}

#[test]
fn test_detects_and_repairs_list_drift() {
    let tables = Tables::new(
        vec![
            question("q-aaaaaa", &["ans-111111", "ans-111111", "ans-999999", "ans-333333"]),
            question("q-bbbbbb", &[]),
        ],
        vec![
            answer("ans-111111", "q-aaaaaa"),
            answer("ans-222222", "q-aaaaaa"),
            answer("ans-333333", "q-bbbbbb"),
            answer("ans-444444", "q-gone00"),
        ],
    );

    let findings = inspect(&tables);
    assert!(findings.contains(&Finding::OrphanedAnswer {
        answer_id: "ans-444444".to_string(),
        question_id: "q-gone00".to_string(),
    }));
    assert!(findings.contains(&Finding::UnlistedAnswer {
        answer_id: "ans-222222".to_string(),
        question_id: "q-aaaaaa".to_string(),
    }));
    assert!(findings.contains(&Finding::DuplicateEntry {
        question_id: "q-aaaaaa".to_string(),
        answer_id: "ans-111111".to_string(),
    }));
    assert!(findings.contains(&Finding::DanglingEntry {
        question_id: "q-aaaaaa".to_string(),
        answer_id: "ans-999999".to_string(),
    }));
    assert!(findings.contains(&Finding::DanglingEntry {
        question_id: "q-aaaaaa".to_string(),
        answer_id: "ans-333333".to_string(),
    }));

    let mut repaired = tables.clone();
    let summary = repair(&mut repaired);
    assert_eq!(summary.deleted_answers, 1);
    assert_eq!(summary.dropped_entries, 3);
    assert_eq!(summary.linked_answers, 2);

    assert_eq!(
        repaired.question("q-aaaaaa").expect("q").answers,
        vec!["ans-111111".to_string(), "ans-222222".to_string()]
    );
    assert_eq!(
        repaired.question("q-bbbbbb").expect("q").answers,
        vec!["ans-333333".to_string()]
    );
    assert!(!repaired.contains_answer("ans-444444"));
    assert!(inspect(&repaired).is_empty());
}

#[test]
fn test_keeps_most_recent_accepted_answer() {
    let mut older = answer("ans-111111", "q-aaaaaa");
    older.accepted = true;
    older.updated_at = 200;
    let mut newer = answer("ans-222222", "q-aaaaaa");
    newer.accepted = true;
    newer.updated_at = 300;

    let mut tables = Tables::new(
        vec![question("q-aaaaaa", &["ans-111111", "ans-222222"])],
        vec![older, newer],
    );

    let findings = inspect(&tables);
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].severity(), Severity::Error);

    let summary = repair(&mut tables);
    assert_eq!(summary.unaccepted_answers, 1);
    assert!(!tables.answer("ans-111111").expect("a").accepted);
    assert!(tables.answer("ans-222222").expect("a").accepted);
}

#[test]
fn test_removes_overlapping_voters_from_both_sets() {
    let mut q = question("q-aaaaaa", &[]);
    q.votes.upvotes.insert(user("both"));
    q.votes.downvotes.insert(user("both"));
    q.votes.upvotes.insert(user("fan"));

    let store = MemoryStore::with_tables(Tables::new(vec![q], Vec::new()));
    let report = doctor::run(&store, false).expect("check");
    assert!(report.has_errors());
    assert!(report.needs_fix());

    let report = doctor::run(&store, true).expect("fix");
    assert_eq!(report.repaired.expect("summary").removed_votes, 2);

    let votes = store
        .read(|tables| Ok(tables.question("q-aaaaaa")?.votes.clone()))
        .expect("read");
    assert!(votes.is_consistent());
    assert!(votes.upvotes.contains(&user("fan")));
    assert!(!votes.upvotes.contains(&user("both")));
    assert!(!votes.downvotes.contains(&user("both")));

    assert!(doctor::run(&store, false).expect("recheck").findings.is_empty());
}

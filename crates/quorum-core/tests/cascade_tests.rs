// Rust guideline compliant 2026-10-16

//! Unit tests for question and answer lifecycle cascades.

use quorum_core::accept::accept_answer;
use quorum_core::authoring::{create_question, update_answer, update_question, NewQuestion, QuestionUpdate};
use quorum_core::cascade::{create_answer, delete_answer, delete_question};
use quorum_core::{Error, Tables, UserId};

fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user")
}

fn ask(tables: &mut Tables, author: &str) -> String {
    create_question(
        tables,
        &user(author),
        NewQuestion {
            title: "Borrow checker complaint".to_string(),
            content: "Why does this not compile?".to_string(),
            tags: vec!["rust".to_string(), "borrowck".to_string()],
        },
        1000,
    )
    .expect("create question")
    .id
}

/// Every listed answer exists and points back; every answer is listed.
fn assert_consistent(tables: &Tables) {
    for question in tables.questions() {
        for answer_id in &question.answers {
            let answer = tables.answer(answer_id).expect("listed answer exists");
            assert_eq!(answer.question_id, question.id);
        }
    }
    for answer in tables.answers() {
        let parent = tables.question(&answer.question_id).expect("parent exists");
        assert!(parent.answers.contains(&answer.id));
    }
}

#[test]
fn test_create_answer_appends_in_order() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");

    let a1 = create_answer(&mut tables, &question_id, &user("u2"), "first", 1001).expect("a1");
    let a2 = create_answer(&mut tables, &question_id, &user("u3"), "second", 1002).expect("a2");

    assert!(!a1.accepted);
    assert!(a1.votes.upvotes.is_empty() && a1.votes.downvotes.is_empty());
    assert_eq!(a1.question_id, question_id);
    assert_eq!(
        tables.question(&question_id).expect("question").answers,
        vec![a1.id, a2.id]
    );
    assert_consistent(&tables);
}

#[test]
fn test_create_answer_for_missing_question_is_not_found() {
    let mut tables = Tables::default();
    let err = create_answer(&mut tables, "q-abcdef", &user("u2"), "hello", 1001)
        .expect_err("missing question");
    assert!(err.is_not_found());
    assert!(tables.answers().is_empty());
}

#[test]
fn test_create_answer_rejects_blank_content() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    let err = create_answer(&mut tables, &question_id, &user("u2"), "   ", 1001)
        .expect_err("blank content");
    assert!(matches!(err, Error::InvalidInput(_)));
}

#[test]
fn test_delete_answer_detaches_from_question() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    let a1 = create_answer(&mut tables, &question_id, &user("u2"), "first", 1001).expect("a1");
    let a2 = create_answer(&mut tables, &question_id, &user("u3"), "second", 1002).expect("a2");

    let removed = delete_answer(&mut tables, &a1.id, &user("u2")).expect("delete a1");

    assert_eq!(removed.id, a1.id);
    assert!(!tables.contains_answer(&a1.id));
    assert_eq!(
        tables.question(&question_id).expect("question").answers,
        vec![a2.id]
    );
    assert_consistent(&tables);
}

#[test]
fn test_delete_answer_by_non_author_is_forbidden() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    let a1 = create_answer(&mut tables, &question_id, &user("u2"), "mine", 1001).expect("a1");

    // Even the question author cannot delete someone else's answer.
    let err = delete_answer(&mut tables, &a1.id, &user("u1")).expect_err("not the author");
    assert!(err.is_forbidden());
    assert!(tables.contains_answer(&a1.id));
    assert_consistent(&tables);
}

#[test]
fn test_delete_missing_answer_is_not_found() {
    let mut tables = Tables::default();
    let err = delete_answer(&mut tables, "ans-abcdef", &user("u1")).expect_err("missing");
    assert!(err.is_not_found());
}

#[test]
fn test_delete_question_cascades_to_answers() {
    let mut tables = Tables::default();
    let keep = ask(&mut tables, "other");
    let question_id = create_question(
        &mut tables,
        &user("u1"),
        NewQuestion {
            title: "Doomed".to_string(),
            content: "Will be deleted".to_string(),
            tags: Vec::new(),
        },
        1000,
    )
    .expect("create question")
    .id;
    let a1 = create_answer(&mut tables, &question_id, &user("u2"), "one", 1001).expect("a1");
    let a2 = create_answer(&mut tables, &question_id, &user("u3"), "two", 1002).expect("a2");
    let survivor = create_answer(&mut tables, &keep, &user("u2"), "elsewhere", 1003).expect("s");

    let deleted = delete_question(&mut tables, &question_id, &user("u1")).expect("delete");

    assert_eq!(deleted.id, question_id);
    assert_eq!(deleted.answer_ids, vec![a1.id.clone(), a2.id.clone()]);
    assert!(!tables.contains_question(&question_id));
    assert!(!tables.contains_answer(&a1.id));
    assert!(!tables.contains_answer(&a2.id));
    assert!(tables.contains_answer(&survivor.id));
    assert_consistent(&tables);
}

#[test]
fn test_delete_question_by_non_author_is_forbidden() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    create_answer(&mut tables, &question_id, &user("u2"), "one", 1001).expect("a1");

    let err = delete_question(&mut tables, &question_id, &user("u2")).expect_err("forbidden");
    assert!(err.is_forbidden());
    assert!(tables.contains_question(&question_id));
    assert_eq!(tables.answers().len(), 1);
}

#[test]
fn test_update_question_keeps_unspecified_fields() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");

    let updated = update_question(
        &mut tables,
        &question_id,
        &user("u1"),
        QuestionUpdate {
            title: Some("Borrow checker, revisited".to_string()),
            ..QuestionUpdate::default()
        },
        2000,
    )
    .expect("update");

    assert_eq!(updated.title, "Borrow checker, revisited");
    assert_eq!(updated.content, "Why does this not compile?");
    assert_eq!(updated.tags.len(), 2);
    assert_eq!(updated.updated_at, 2000);
    assert_eq!(tables.question(&question_id).expect("question"), &updated);
}

#[test]
fn test_update_question_by_non_author_is_forbidden() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    let err = update_question(
        &mut tables,
        &question_id,
        &user("u2"),
        QuestionUpdate {
            content: Some("hijacked".to_string()),
            ..QuestionUpdate::default()
        },
        2000,
    )
    .expect_err("forbidden");
    assert!(err.is_forbidden());
}

#[test]
fn test_update_answer_preserves_acceptance() {
    let mut tables = Tables::default();
    let question_id = ask(&mut tables, "u1");
    let a1 = create_answer(&mut tables, &question_id, &user("u2"), "draft", 1001).expect("a1");
    accept_answer(&mut tables, &a1.id, &user("u1"), 1002).expect("accept");

    let updated = update_answer(&mut tables, &a1.id, &user("u2"), "final", 1003).expect("edit");
    assert_eq!(updated.content, "final");
    assert!(updated.accepted);

    let err = update_answer(&mut tables, &a1.id, &user("u1"), "nope", 1004).expect_err("forbidden");
    assert!(err.is_forbidden());
}

#[test]
fn test_create_question_requires_title_and_content() {
    let mut tables = Tables::default();
    let err = create_question(
        &mut tables,
        &user("u1"),
        NewQuestion {
            title: " ".to_string(),
            content: "body".to_string(),
            tags: Vec::new(),
        },
        1000,
    )
    .expect_err("blank title");
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(tables.questions().is_empty());
}

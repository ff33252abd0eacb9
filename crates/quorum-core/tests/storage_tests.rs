// Rust guideline compliant 2026-10-16

//! Unit tests for the entity stores.
//!
//! These tests cover persistence, rollback on failed transactions, malformed
//! input recovery and serialization of concurrent transactions.

use quorum_core::authoring::{create_question, NewQuestion};
use quorum_core::cascade::create_answer;
use quorum_core::vote::vote_question;
use quorum_core::{EntityStore, Error, JsonlStore, MemoryStore, UserId};
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn user(name: &str) -> UserId {
    UserId::new(name).expect("valid user")
}

fn new_question(title: &str) -> NewQuestion {
    NewQuestion {
        title: title.to_string(),
        content: "Body".to_string(),
        tags: vec!["test".to_string()],
    }
}

fn open_store(temp_dir: &TempDir) -> JsonlStore {
    let store = JsonlStore::open(temp_dir.path()).expect("Failed to open store");
    store.init().expect("Failed to init store");
    store
}

#[test]
fn test_empty_store_reads_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = JsonlStore::open(temp_dir.path()).expect("Failed to open store");

    let counts = store
        .read(|tables| Ok((tables.questions().len(), tables.answers().len())))
        .expect("Failed to read");
    assert_eq!(counts, (0, 0));
}

#[test]
fn test_open_missing_directory_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = JsonlStore::open(&temp_dir.path().join("absent"));
    assert!(result.is_err());
}

#[test]
fn test_transaction_persists_both_collections() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);

    let (question_id, answer_id) = store
        .transaction(|tables| {
            let question = create_question(tables, &user("u1"), new_question("Persist me"), 1000)?;
            let answer = create_answer(tables, &question.id, &user("u2"), "Saved", 1001)?;
            Ok((question.id, answer.id))
        })
        .expect("Failed to commit");

    let reopened = JsonlStore::open(temp_dir.path()).expect("Failed to reopen");
    reopened
        .read(|tables| {
            let question = tables.question(&question_id)?;
            assert_eq!(question.answers, vec![answer_id.clone()]);
            assert_eq!(tables.answer(&answer_id)?.question_id, question_id);
            Ok(())
        })
        .expect("Failed to read back");

    let content = fs::read_to_string(store.questions_path()).expect("Failed to read file");
    assert_eq!(content.lines().count(), 1, "One question per line");
}

#[test]
fn test_failed_transaction_commits_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);

    let result: Result<(), Error> = store.transaction(|tables| {
        create_question(tables, &user("u1"), new_question("Rolled back"), 1000)?;
        Err(Error::Forbidden("abort".to_string()))
    });
    assert!(result.is_err());

    let count = store
        .read(|tables| Ok(tables.questions().len()))
        .expect("Failed to read");
    assert_eq!(count, 0);
}

#[test]
fn test_memory_store_rolls_back_failed_transaction() {
    let store = MemoryStore::new();
    store
        .transaction(|tables| create_question(tables, &user("u1"), new_question("Kept"), 1000))
        .expect("Failed to commit");

    let result: Result<(), Error> = store.transaction(|tables| {
        create_question(tables, &user("u1"), new_question("Dropped"), 1001)?;
        Err(Error::InvalidInput("abort".to_string()))
    });
    assert!(result.is_err());

    let titles = store
        .read(|tables| Ok(tables.questions().iter().map(|q| q.title.clone()).collect::<Vec<_>>()))
        .expect("Failed to read");
    assert_eq!(titles, vec!["Kept".to_string()]);
}

#[test]
fn test_malformed_lines_are_skipped() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);

    let content = r#"{"id":"q-123456","title":"Valid","content":"Body","author":"u1","created_at":1000,"updated_at":1000}
this is not json
{"id":"q-234567","title":"Also valid","content":"Body","author":"u2","upvotes":["u3"],"created_at":1000,"updated_at":1000}
"#;
    fs::write(store.questions_path(), content).expect("Failed to write test file");

    let questions = store
        .read(|tables| Ok(tables.questions().to_vec()))
        .expect("Failed to read");
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].id, "q-123456");
    assert!(questions[0].answers.is_empty());
    assert!(questions[1].votes.upvotes.contains(&user("u3")));
}

#[test]
fn test_concurrent_votes_are_all_reflected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir).with_lock_timeout(Duration::from_secs(30));
    let question_id = store
        .transaction(|tables| create_question(tables, &user("u1"), new_question("Popular"), 1000))
        .expect("Failed to create")
        .id;

    let store = Arc::new(store);
    let handles: Vec<_> = (0..8)
        .map(|n| {
            let store = Arc::clone(&store);
            let question_id = question_id.clone();
            thread::spawn(move || {
                let voter = user(&format!("voter-{n}"));
                store
                    .transaction(|tables| vote_question(tables, &question_id, &voter, "up"))
                    .expect("vote failed");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let upvotes = store
        .read(|tables| Ok(tables.question(&question_id)?.votes.upvotes.len()))
        .expect("Failed to read");
    assert_eq!(upvotes, 8);
}

#[test]
fn test_memory_store_concurrent_votes() {
    let store = Arc::new(MemoryStore::new());
    let question_id = store
        .transaction(|tables| create_question(tables, &user("u1"), new_question("Busy"), 1000))
        .expect("Failed to create")
        .id;

    let handles: Vec<_> = (0..16)
        .map(|n| {
            let store = Arc::clone(&store);
            let question_id = question_id.clone();
            thread::spawn(move || {
                let direction = if n % 2 == 0 { "up" } else { "down" };
                let voter = user(&format!("voter-{n}"));
                store
                    .transaction(|tables| vote_question(tables, &question_id, &voter, direction))
                    .expect("vote failed");
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    let (up, down) = store
        .read(|tables| {
            let votes = &tables.question(&question_id)?.votes;
            Ok((votes.upvotes.len(), votes.downvotes.len()))
        })
        .expect("Failed to read");
    assert_eq!((up, down), (8, 8));
}

#[test]
fn test_lock_timeout_when_held() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let store = open_store(&temp_dir);
    let contender = store.clone().with_lock_timeout(Duration::from_millis(50));

    let result = store.transaction(|_| {
        let inner = contender.transaction(|_| Ok(()));
        Ok(inner)
    });

    let inner = result.expect("outer transaction succeeds");
    assert!(matches!(inner, Err(Error::Lock(_))));
}

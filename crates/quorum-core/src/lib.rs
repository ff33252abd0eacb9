// Rust guideline compliant 2026-10-16

//! Quorum Core Library
//!
//! This crate provides the foundational components for the Quorum
//! question-and-answer service:
//! - Data models (Question, Answer, vote sets)
//! - Vote engine (mutually exclusive up/down toggling)
//! - Acceptance engine (one accepted answer per question)
//! - Cascade manager (question and answer lifecycle consistency)
//! - Entity stores (in-memory and JSONL) behind a transactional trait
//! - Hash ID generation and resolution
//! - Configuration and error types

pub mod accept;
pub mod auth;
pub mod authoring;
pub mod cascade;
pub mod config;
pub mod error;
pub mod identity;
pub mod memory;
pub mod models;
pub mod storage;
pub mod store;
pub mod time;
pub mod vote;

pub use accept::accept_answer;
pub use authoring::{NewQuestion, QuestionUpdate};
pub use cascade::DeletedQuestion;
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use models::{Answer, EntityKind, Question, UserId, VoteDirection, VoteSet, Votes};
pub use storage::JsonlStore;
pub use store::{EntityStore, Tables};
pub use vote::{Votable, VoteOutcome};

// Rust guideline compliant 2026-10-16

//! Shared application services for Quorum.
//!
//! This crate provides reusable, non-CLI-specific services: the [`Forum`]
//! running every question and answer operation as a store transaction,
//! repository discovery, integrity checks and standardized response
//! envelopes.

pub mod doctor;
pub mod error;
pub mod forum;
pub mod repo;
pub mod response;

pub use doctor::{DoctorReport, Finding, RepairSummary, Severity};
pub use error::{AppError, ErrorCode, Result};
pub use forum::{Forum, QuestionThread, VoteResult, VoteTarget};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};

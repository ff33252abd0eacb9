// Rust guideline compliant 2026-10-16

//! Output formatting module for the Quorum CLI.
//!
//! This module provides functionality for formatting questions, answers,
//! votes and doctor reports in various output formats (JSON, table, plain
//! text).

use crate::terminal::wrap_text;
use chrono::{DateTime, Utc};
use quorum_app::{
    AppError, DoctorReport, ErrorEnvelope, QuestionThread, SuccessEnvelope, VoteResult,
};
use quorum_core::{Answer, DeletedQuestion, OutputFormat, Question, VoteOutcome};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

/// Output formatter trait.
///
/// Every method returns the text to print on stdout. `action` names the
/// command that produced the value, e.g. `ask` or `edit`.
pub trait OutputFormatter {
    /// Formats a created or edited question.
    fn format_question(&self, action: &'static str, question: &Question) -> String;

    /// Formats a question together with its answers.
    fn format_thread(&self, thread: &QuestionThread) -> String;

    /// Formats the question list.
    fn format_list(&self, questions: &[Question]) -> String;

    /// Formats a created, edited, accepted or deleted answer.
    fn format_answer(&self, action: &'static str, answer: &Answer) -> String;

    /// Formats the result of a vote.
    fn format_vote(&self, result: &VoteResult) -> String;

    /// Formats a deleted question.
    fn format_deleted_question(&self, deleted: &DeletedQuestion) -> String;

    /// Formats a doctor report.
    fn format_doctor(&self, report: &DoctorReport) -> String;

    /// Formats a free-form status message.
    fn format_message(&self, action: &'static str, message: &str) -> String;

    /// Formats an error.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// Renders a Unix timestamp, either as absolute UTC or relative to `now`.
pub fn format_timestamp(timestamp: i64, now: i64, absolute: bool) -> String {
    let Some(at) = DateTime::<Utc>::from_timestamp(timestamp, 0) else {
        return timestamp.to_string();
    };
    if absolute {
        return at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    }

    let elapsed = now - timestamp;
    match elapsed {
        i64::MIN..=-1 => at.format("%Y-%m-%d %H:%M").to_string(),
        0..=59 => "just now".to_string(),
        60..=3_599 => plural(elapsed / 60, "minute"),
        3_600..=86_399 => plural(elapsed / 3_600, "hour"),
        86_400..=2_591_999 => plural(elapsed / 86_400, "day"),
        _ => at.format("%Y-%m-%d").to_string(),
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn to_json<T: Serialize>(action: &'static str, result: T) -> String {
    serde_json::to_string_pretty(&SuccessEnvelope::new(action, result))
        .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize result" }).to_string())
}

/// JSON output formatter.
///
/// Wraps every result in a success envelope for machine consumption.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_question(&self, action: &'static str, question: &Question) -> String {
        to_json(action, question)
    }

    fn format_thread(&self, thread: &QuestionThread) -> String {
        to_json("show", thread)
    }

    fn format_list(&self, questions: &[Question]) -> String {
        to_json(
            "list",
            json!({
                "questions": questions,
                "total": questions.len(),
            }),
        )
    }

    fn format_answer(&self, action: &'static str, answer: &Answer) -> String {
        to_json(action, answer)
    }

    fn format_vote(&self, result: &VoteResult) -> String {
        to_json(
            "vote",
            json!({
                "id": result.target.id(),
                "outcome": result.outcome,
                "score": result.target.votes().score(),
                "entity": result.target,
            }),
        )
    }

    fn format_deleted_question(&self, deleted: &DeletedQuestion) -> String {
        to_json("delete", deleted)
    }

    fn format_doctor(&self, report: &DoctorReport) -> String {
        let findings: Vec<_> = report
            .findings
            .iter()
            .map(|finding| {
                json!({
                    "severity": finding.severity(),
                    "message": finding.to_string(),
                    "finding": finding,
                })
            })
            .collect();
        to_json(
            "doctor",
            json!({
                "findings": findings,
                "repaired": report.repaired,
            }),
        )
    }

    fn format_message(&self, action: &'static str, message: &str) -> String {
        to_json(action, json!({ "message": message }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let value = match error.downcast_ref::<AppError>() {
            Some(app_error) => serde_json::to_value(ErrorEnvelope::from_error(app_error))
                .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() })),
            None => json!({
                "status": "error",
                "code": "invalid_input",
                "message": error.to_string(),
            }),
        };
        value.to_string()
    }
}

/// Table output formatter.
///
/// Formats results as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
    absolute_time: bool,
    now: i64,
}

impl TableFormatter {
    /// Creates a new table formatter rendering times relative to `now`.
    pub fn new(use_color: bool, absolute_time: bool, now: i64) -> Self {
        Self {
            use_color,
            absolute_time,
            now,
        }
    }

    fn time(&self, timestamp: i64) -> String {
        format_timestamp(timestamp, self.now, self.absolute_time)
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let mut buffer = Buffer::ansi();
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{text}");
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    fn question_header(&self, question: &Question) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:       {}\n", question.id));
        output.push_str(&format!("Title:    {}\n", question.title));
        output.push_str(&format!("Author:   {}\n", question.author));
        output.push_str(&format!("Score:    {}\n", question.votes.score()));
        if !question.tags.is_empty() {
            let tags: Vec<&str> = question.tags.iter().map(String::as_str).collect();
            output.push_str(&format!("Tags:     {}\n", tags.join(", ")));
        }
        output.push_str(&format!("Created:  {}\n", self.time(question.created_at)));
        output.push_str(&format!("Updated:  {}\n", self.time(question.updated_at)));
        output.push_str(&format!("\n  {}\n", wrap_text(&question.content, 2)));
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_question(&self, action: &'static str, question: &Question) -> String {
        let verb = match action {
            "ask" => "Asked",
            _ => "Updated",
        };
        format!(
            "{} question {}\n\n{}",
            self.paint(verb, Color::Green),
            question.id,
            self.question_header(question)
        )
    }

    fn format_thread(&self, thread: &QuestionThread) -> String {
        let mut output = self.question_header(&thread.question);

        if thread.answers.is_empty() {
            output.push_str("\nNo answers yet.\n");
            return output;
        }

        output.push_str(&format!("\nAnswers ({}):\n", thread.answers.len()));
        for answer in &thread.answers {
            let marker = if answer.accepted {
                self.paint("accepted", Color::Green)
            } else {
                String::new()
            };
            output.push_str(&format!(
                "\n{}  score {}  by {}  {}  {}\n",
                answer.id,
                answer.votes.score(),
                answer.author,
                self.time(answer.updated_at),
                marker
            ));
            output.push_str(&format!("  {}\n", wrap_text(&answer.content, 2)));
        }
        output
    }

    fn format_list(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return "No questions found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Score", "Answers", "Title", "Author", "Asked"]);

        for question in questions {
            builder.push_record([
                question.id.clone(),
                question.votes.score().to_string(),
                question.answers.len().to_string(),
                question.title.clone(),
                question.author.to_string(),
                self.time(question.created_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_answer(&self, action: &'static str, answer: &Answer) -> String {
        let verb = match action {
            "answer" => "Answered",
            "accept" => "Accepted",
            "delete-answer" => "Deleted",
            _ => "Updated",
        };
        format!(
            "{} answer {} on {}",
            self.paint(verb, Color::Green),
            answer.id,
            answer.question_id
        )
    }

    fn format_vote(&self, result: &VoteResult) -> String {
        let id = result.target.id();
        let score = result.target.votes().score();
        let summary = match result.outcome {
            VoteOutcome::Added(direction) => format!("Voted {direction} on {id}"),
            VoteOutcome::Removed(direction) => format!("Withdrew {direction} vote on {id}"),
            VoteOutcome::Switched(direction) => format!("Switched vote on {id} to {direction}"),
            VoteOutcome::Ignored => {
                return format!(
                    "{} unrecognized vote direction; {id} unchanged (score {score})",
                    self.paint("Ignored", Color::Yellow)
                )
            }
        };
        format!("{summary} (score {score})")
    }

    fn format_deleted_question(&self, deleted: &DeletedQuestion) -> String {
        format!(
            "{} question {} and {} answer(s)",
            self.paint("Deleted", Color::Green),
            deleted.id,
            deleted.answer_ids.len()
        )
    }

    fn format_doctor(&self, report: &DoctorReport) -> String {
        let mut output = String::new();
        if report.findings.is_empty() {
            output.push_str("Doctor: no issues found.\n");
        } else {
            output.push_str("Doctor findings:\n");
            for finding in &report.findings {
                let label = match finding.severity() {
                    quorum_app::Severity::Error => self.paint("ERROR", Color::Red),
                    quorum_app::Severity::Warning => self.paint("WARN", Color::Yellow),
                };
                output.push_str(&format!("[{label}] {finding}\n"));
            }
        }

        if let Some(summary) = &report.repaired {
            output.push_str(&format!(
                "Fix applied: deleted {} orphaned answers, linked {} answers, dropped {} list entries, cleared {} extra acceptances, removed {} overlapping votes\n",
                summary.deleted_answers,
                summary.linked_answers,
                summary.dropped_entries,
                summary.unaccepted_answers,
                summary.removed_votes
            ));
        } else if !report.findings.is_empty() {
            output.push_str("Run with --fix to repair.\n");
        }
        output
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error}")
    }
}

/// Plain text output formatter.
///
/// Formats results as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_question(&self, _action: &'static str, question: &Question) -> String {
        question.id.clone()
    }

    fn format_thread(&self, thread: &QuestionThread) -> String {
        let question = &thread.question;
        let mut output = String::new();
        output.push_str(&format!("{}\n", question.id));
        output.push_str(&format!("{}\n", question.title));
        output.push_str(&format!("{}\n", question.author));
        output.push_str(&format!("{}\n", question.votes.score()));
        output.push_str(&format!("{}\n", question.content));
        for answer in &thread.answers {
            output.push_str(&format!(
                "{} {} {} {}\n",
                answer.id,
                answer.votes.score(),
                if answer.accepted { "accepted" } else { "-" },
                answer.author
            ));
        }
        output
    }

    fn format_list(&self, questions: &[Question]) -> String {
        if questions.is_empty() {
            return "No questions found.".to_string();
        }

        let mut output = String::new();
        for question in questions {
            output.push_str(&format!(
                "{} {} {} {}\n",
                question.id,
                question.votes.score(),
                question.answers.len(),
                question.title
            ));
        }
        output
    }

    fn format_answer(&self, _action: &'static str, answer: &Answer) -> String {
        answer.id.clone()
    }

    fn format_vote(&self, result: &VoteResult) -> String {
        format!("{} {}", result.target.id(), result.target.votes().score())
    }

    fn format_deleted_question(&self, deleted: &DeletedQuestion) -> String {
        let mut output = deleted.id.clone();
        for answer_id in &deleted.answer_ids {
            output.push('\n');
            output.push_str(answer_id);
        }
        output
    }

    fn format_doctor(&self, report: &DoctorReport) -> String {
        let mut output = String::new();
        for finding in &report.findings {
            output.push_str(&format!("{finding}\n"));
        }
        output
    }

    fn format_message(&self, _action: &'static str, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {error}")
    }
}

/// Creates the formatter for `format`.
///
/// `use_color` and `absolute_time` only affect the table formatter.
pub fn create_formatter(
    format: OutputFormat,
    use_color: bool,
    absolute_time: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(
            use_color,
            absolute_time,
            Utc::now().timestamp(),
        )),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}

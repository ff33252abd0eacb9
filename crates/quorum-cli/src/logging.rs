// Rust guideline compliant 2026-10-16

//! Tracing setup for the CLI.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use anyhow::{bail, Result};
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global subscriber at `level`, JSON-formatted when `json` is set.
///
/// A subscriber installed earlier (as in tests) is left in place.
///
/// # Errors
///
/// Returns an error if `level` is not a known log level.
pub fn init_tracing(level: &str, json: bool) -> Result<()> {
    let level = parse_log_level(level)?;

    if json {
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(());
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error for names other than error, warn, info, debug and trace.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => bail!("Unknown log level '{other}'"),
    }
}

// Rust guideline compliant 2026-10-16

//! Per-invocation state: repository, configuration, forum and requester.

use anyhow::Result;
use quorum_app::{AppError, Forum, RepoContext};
use quorum_core::{Config, JsonlStore, UserId};
use std::path::Path;

/// An opened repository plus the identity commands act as.
pub struct Session {
    repo: RepoContext,
    config: Config,
    forum: Forum<JsonlStore>,
    user_flag: Option<String>,
}

impl Session {
    /// Opens the repository rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `.quorum` is missing or its store is unusable.
    pub fn open(root: &Path, config: Config, user_flag: Option<String>) -> Result<Self> {
        let repo = RepoContext::discover(Some(root))?;
        let store = repo.open_store(&config)?;
        Ok(Self {
            repo,
            config,
            forum: Forum::new(store),
            user_flag,
        })
    }

    /// The repository paths.
    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    /// Effective configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The forum service over the repository store.
    pub fn forum(&self) -> &Forum<JsonlStore> {
        &self.forum
    }

    /// Identity the current command acts as.
    ///
    /// # Errors
    ///
    /// Returns an error if no identity is available.
    pub fn requester(&self) -> Result<UserId> {
        resolve_requester(
            self.user_flag.as_deref(),
            self.config.default_user.as_deref(),
            |key| std::env::var(key).ok(),
        )
    }
}

/// Picks the requester identity.
///
/// Precedence: the `--user` flag, then the configured default (which already
/// includes `QUORUM_USER`), then the OS user from `USER` or `USERNAME`.
///
/// # Errors
///
/// Returns `InvalidInput` if every source is absent or blank.
pub fn resolve_requester<F>(flag: Option<&str>, configured: Option<&str>, env: F) -> Result<UserId>
where
    F: Fn(&str) -> Option<String>,
{
    let candidate = flag
        .map(str::to_string)
        .or_else(|| configured.map(str::to_string))
        .or_else(|| env("USER"))
        .or_else(|| env("USERNAME"))
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| {
            AppError::InvalidInput(
                "No user identity. Pass --user or set QUORUM_USER.".to_string(),
            )
        })?;

    Ok(UserId::new(candidate).map_err(AppError::from)?)
}

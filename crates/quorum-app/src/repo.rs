// Rust guideline compliant 2026-10-16

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use quorum_core::{Config, JsonlStore};
use std::path::{Path, PathBuf};

/// Name of the data directory at the repository root.
pub const QUORUM_DIR: &str = ".quorum";

/// Repository path metadata for a Quorum workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    quorum_dir: PathBuf,
}

impl RepoContext {
    /// Discovers a Quorum repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.quorum` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let quorum_dir = root.join(QUORUM_DIR);
        if !quorum_dir.is_dir() {
            return Err(AppError::RepoNotInitialized { path: quorum_dir });
        }

        Ok(Self { root, quorum_dir })
    }

    /// Creates the `.quorum` directory, default config and empty collections.
    ///
    /// Existing files are left untouched, so running it twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if any file or directory cannot be created.
    pub fn init(root: &Path) -> Result<Self> {
        let quorum_dir = root.join(QUORUM_DIR);
        std::fs::create_dir_all(&quorum_dir)?;

        if !quorum_dir.join(quorum_core::config::CONFIG_FILE).exists() {
            Config::default().save(&quorum_dir)?;
        }
        JsonlStore::open(&quorum_dir)?.init()?;

        tracing::info!(path = %quorum_dir.display(), "initialized repository");
        Ok(Self {
            root: root.to_path_buf(),
            quorum_dir,
        })
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.quorum` directory path.
    #[must_use]
    pub fn quorum_dir(&self) -> &Path {
        self.quorum_dir.as_path()
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.quorum_dir())?)
    }

    /// Opens the JSONL store using the configured lock timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the store directory is unusable.
    pub fn open_store(&self, config: &Config) -> Result<JsonlStore> {
        Ok(JsonlStore::open(self.quorum_dir())?.with_lock_timeout(config.lock_timeout()))
    }
}

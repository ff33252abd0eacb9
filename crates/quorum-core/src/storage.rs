// Rust guideline compliant 2026-10-16

//! JSONL-backed entity store.
//!
//! Questions and answers live in two JSONL files inside the `.quorum`
//! directory, one record per line. Reads stream records and skip malformed
//! lines. Writes replace a whole collection through a temp file and rename.
//! An exclusive lock on `store.lock` serializes transactions across threads and
//! processes; reads take a shared lock so they never observe a half-committed
//! transaction.

use crate::models::{Answer, Question};
use crate::store::{EntityStore, Tables};
use crate::{Error, Result};
use fs2::FileExt;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// File name of the question collection.
pub const QUESTIONS_FILE: &str = "questions.jsonl";

/// File name of the answer collection.
pub const ANSWERS_FILE: &str = "answers.jsonl";

/// File name of the store lock.
pub const LOCK_FILE: &str = "store.lock";

/// Default time to wait for the store lock.
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_millis(5000);

const MAX_RETRY_DELAY: Duration = Duration::from_millis(200);

/// A record stored one-per-line in a JSONL collection.
trait Record: Serialize + DeserializeOwned {
    fn validate(&self) -> Result<()>;
}

impl Record for Question {
    fn validate(&self) -> Result<()> {
        Question::validate(self)
    }
}

impl Record for Answer {
    fn validate(&self) -> Result<()> {
        Answer::validate(self)
    }
}

/// Held store lock; released on drop.
struct StoreLock {
    file: File,
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

/// Entity store backed by JSONL files.
#[derive(Debug, Clone)]
pub struct JsonlStore {
    questions_path: PathBuf,
    answers_path: PathBuf,
    lock_path: PathBuf,
    lock_timeout: Duration,
}

impl JsonlStore {
    /// Opens the store rooted at a `.quorum` directory.
    ///
    /// Collection files are created lazily on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or is not a directory.
    pub fn open(dir: &Path) -> Result<Self> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        if !dir.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Store directory does not exist: {}", dir.display()),
            )));
        }

        Ok(Self {
            questions_path: dir.join(QUESTIONS_FILE),
            answers_path: dir.join(ANSWERS_FILE),
            lock_path: dir.join(LOCK_FILE),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        })
    }

    /// Sets how long to wait for the store lock.
    #[must_use]
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    /// Path to the question collection.
    #[must_use]
    pub fn questions_path(&self) -> &Path {
        &self.questions_path
    }

    /// Path to the answer collection.
    #[must_use]
    pub fn answers_path(&self) -> &Path {
        &self.answers_path
    }

    /// Creates empty collection files if they are missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be created.
    pub fn init(&self) -> Result<()> {
        for path in [&self.questions_path, &self.answers_path] {
            if !path.exists() {
                File::create(path)?;
            }
        }
        Ok(())
    }

    /// Acquires the store lock, retrying with backoff until the timeout.
    fn acquire(&self, exclusive: bool) -> Result<StoreLock> {
        let deadline = Instant::now() + self.lock_timeout;
        let mut retry_delay = Duration::from_millis(5);

        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&self.lock_path)?;

        loop {
            let attempt = if exclusive {
                FileExt::try_lock_exclusive(&file)
            } else {
                FileExt::try_lock_shared(&file)
            };

            match attempt {
                Ok(()) => return Ok(StoreLock { file }),
                Err(err) => {
                    if Instant::now() >= deadline {
                        return Err(Error::Lock(format!(
                            "Failed to acquire lock on {} within {:?}: {}",
                            self.lock_path.display(),
                            self.lock_timeout,
                            err
                        )));
                    }
                    std::thread::sleep(retry_delay);
                    retry_delay = (retry_delay * 2).min(MAX_RETRY_DELAY);
                }
            }
        }
    }

    fn load(&self) -> Result<Tables> {
        let questions = load_collection::<Question>(&self.questions_path)?;
        let answers = load_collection::<Answer>(&self.answers_path)?;
        Ok(Tables::new(questions, answers))
    }

    /// Writes dirty collections. Answers go first so an interrupted commit
    /// leaves at worst an answer unlisted by its parent or a dangling list
    /// entry, both repaired by the integrity check.
    fn commit(&self, tables: &Tables) -> Result<()> {
        if tables.answers_dirty() {
            save_collection(&self.answers_path, tables.answers())?;
        }
        if tables.questions_dirty() {
            if let Err(err) = save_collection(&self.questions_path, tables.questions()) {
                if tables.answers_dirty() {
                    tracing::warn!(
                        error = %err,
                        "answers committed but questions failed; run doctor to reconcile"
                    );
                }
                return Err(err);
            }
        }
        Ok(())
    }
}

impl EntityStore for JsonlStore {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        let tables = {
            let _lock = self.acquire(false)?;
            self.load()?
        };
        f(&tables)
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        let _lock = self.acquire(true)?;
        let mut tables = self.load()?;
        let value = f(&mut tables)?;
        self.commit(&tables)?;
        Ok(value)
    }
}

/// Loads every valid record, skipping malformed lines.
fn load_collection<T: Record>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(&line) {
            Ok(record) => {
                record.validate()?;
                records.push(record);
            }
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    line = index + 1,
                    error = %err,
                    "skipping malformed JSON line"
                );
            }
        }
    }

    Ok(records)
}

/// Replaces a collection atomically (temp file + rename).
fn save_collection<T: Record>(path: &Path, records: &[T]) -> Result<()> {
    for record in records {
        record.validate()?;
    }

    let temp_path = path.with_extension("jsonl.tmp");
    {
        let mut file = File::create(&temp_path)?;
        for record in records {
            let json = serde_json::to_string(record)?;
            file.write_all(json.as_bytes())?;
            file.write_all(b"\n")?;
        }
        file.sync_all()?;
    }
    std::fs::rename(&temp_path, path)?;

    Ok(())
}

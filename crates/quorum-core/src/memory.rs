// Rust guideline compliant 2026-10-16

//! In-memory entity store.

use crate::store::{EntityStore, Tables};
use crate::{Error, Result};
use std::sync::{Mutex, MutexGuard};

/// Entity store backed by a mutex-guarded [`Tables`].
///
/// Transactions run on a copy that replaces the shared tables on success.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing tables.
    #[must_use]
    pub fn with_tables(mut tables: Tables) -> Self {
        tables.mark_clean();
        Self {
            tables: Mutex::new(tables),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>> {
        self.tables
            .lock()
            .map_err(|_| Error::Lock("in-memory store mutex poisoned".to_string()))
    }
}

impl EntityStore for MemoryStore {
    fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables) -> Result<T>,
    {
        let guard = self.lock()?;
        f(&guard)
    }

    fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Tables) -> Result<T>,
    {
        let mut guard = self.lock()?;
        let mut working = guard.clone();
        let value = f(&mut working)?;
        working.mark_clean();
        *guard = working;
        Ok(value)
    }
}

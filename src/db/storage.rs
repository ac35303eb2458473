//! Whole-blob key/value storage backing the record snapshot.
//!
//! The record store only ever reads or replaces complete values, so any
//! backend able to map a key to a string can hold it: the SQLite `kv_store`
//! table in production, a plain map in tests.

use crate::errors::{AppError, AppResult};
use std::collections::HashMap;

/// Key holding the JSON array of interviews.
pub const INTERVIEWS_KEY: &str = "interviews";

/// Key holding the notification recipient address.
pub const REC_EMAIL_KEY: &str = "recEmail";

pub trait SnapshotStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`. Must be durable when it returns.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;
}

/// In-memory storage, used by tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent write fail, to exercise rollback paths.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Io(std::io::Error::other(format!(
                "write to '{}' refused",
                key
            ))));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

//! SQLite-backed snapshot storage (`kv_store` table).

use crate::db::pool::DbPool;
use crate::db::storage::SnapshotStorage;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

impl SnapshotStorage for DbPool {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

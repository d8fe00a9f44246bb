//! SQLite-backed key/value store for NovaNav.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`,
//! runs schema migrations on open, and implements [`KeyValueStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::migrations;
use super::store::KeyValueStore;
use crate::types::errors::StoreError;

/// Durable record store living in a single SQLite file.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a SQLite database at the given file path and runs migrations.
    ///
    /// Parent directories are created when missing.
    ///
    /// # Errors
    /// Returns `StoreError::Database` if the directory, connection, or migrations fail.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StoreError::Database(format!("Failed to create data directory: {}", e))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Opens an in-memory SQLite database and runs migrations.
    ///
    /// Useful for testing: the database is discarded when the `Database` is dropped.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    fn run_migrations(&self) -> Result<(), StoreError> {
        migrations::run_all(&self.conn)?;
        Ok(())
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn upsert(conn: &Connection, key: &str, value: &str, now: i64) -> Result<(), StoreError> {
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        Self::upsert(&self.conn, key, value, Utc::now().timestamp_millis())
    }

    /// Writes every entry inside one transaction.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let now = Utc::now().timestamp_millis();
        let tx = self.conn.unchecked_transaction()?;
        for (key, value) in entries {
            Self::upsert(&tx, key, value, now)?;
        }
        tx.commit()?;
        Ok(())
    }
}

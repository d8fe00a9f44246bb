//! Key/value persistence port.
//!
//! The repository and the auth guard only see [`KeyValueStore`]; the SQLite
//! [`Database`](super::Database) and the in-process [`MemoryStore`] implement it.
//! Values are JSON text stored under the stable keys in [`keys`].

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::types::errors::StoreError;

/// Stable record keys.
pub mod keys {
    pub const CATEGORIES: &str = "categories";
    pub const BOOKMARKS: &str = "bookmarks";
    pub const FAILED_ATTEMPTS: &str = "failed_attempts";
    pub const LOCKOUT_UNTIL: &str = "lockout_until";
}

/// Synchronous durable key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Writes several records as one unit. Backends with transactions
    /// override this so readers never see only part of the batch.
    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}

/// Reads and decodes a record, treating unreadable or corrupt data as absent.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Option<T> {
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "store read failed, treating record as absent");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "corrupt record, treating as absent");
            None
        }
    }
}

/// Encodes a value as the JSON text stored under a key.
pub fn encode_json<T: Serialize + ?Sized>(value: &T) -> Result<String, StoreError> {
    serde_json::to_string(value).map_err(|e| StoreError::Serialization(e.to_string()))
}

/// Volatile store for tests and the demo binary.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StoreError> {
        self.records
            .lock()
            .map_err(|e| StoreError::Database(format!("memory store poisoned: {}", e)))
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.records()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.records()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_many(&self, entries: &[(&str, String)]) -> Result<(), StoreError> {
        let mut records = self.records()?;
        for (key, value) in entries {
            records.insert(key.to_string(), value.clone());
        }
        Ok(())
    }
}

//! NovaNav persistence layer.
//!
//! Provides the [`KeyValueStore`] port, its SQLite implementation with schema
//! migrations, and an in-memory store.
//!
//! # Usage
//!
//! ```no_run
//! use novanav::database::{Database, KeyValueStore};
//!
//! // Open a persistent database
//! let db = Database::open("novanav.db").expect("failed to open database");
//! db.set("failed_attempts", "0").expect("write failed");
//!
//! // Or use an in-memory database for testing
//! let db = Database::open_in_memory().expect("failed to open in-memory database");
//! assert!(db.get("categories").unwrap().is_none());
//! ```

pub mod connection;
pub mod migrations;
pub mod store;

pub use connection::Database;
pub use store::{keys, KeyValueStore, MemoryStore};

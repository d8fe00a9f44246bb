//! Unit tests for the NovaNav database layer (connection, migrations, key/value store).

use novanav::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use novanav::database::{keys, Database, KeyValueStore};
use tempfile::TempDir;

#[test]
fn test_open_in_memory_succeeds() {
    let db = Database::open_in_memory();
    assert!(db.is_ok(), "open_in_memory should succeed");
}

#[test]
fn test_migrations_create_kv_table() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    let exists: bool = db
        .connection()
        .query_row(
            "SELECT COUNT(*) > 0 FROM sqlite_master WHERE type='table' AND name='kv_store'",
            [],
            |row| row.get(0),
        )
        .unwrap_or(false);
    assert!(exists, "kv_store should exist after migrations");
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().expect("open_in_memory failed");
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_get_missing_key_returns_none() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get(keys::CATEGORIES).unwrap(), None);
}

#[test]
fn test_set_overwrites_existing_value() {
    let db = Database::open_in_memory().unwrap();
    db.set(keys::FAILED_ATTEMPTS, "1").unwrap();
    db.set(keys::FAILED_ATTEMPTS, "2").unwrap();
    assert_eq!(db.get(keys::FAILED_ATTEMPTS).unwrap().as_deref(), Some("2"));

    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM kv_store", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn test_set_many_writes_every_entry() {
    let db = Database::open_in_memory().unwrap();
    db.set_many(&[
        (keys::FAILED_ATTEMPTS, "5".to_string()),
        (keys::LOCKOUT_UNTIL, "1800000".to_string()),
    ])
    .unwrap();

    assert_eq!(db.get(keys::FAILED_ATTEMPTS).unwrap().as_deref(), Some("5"));
    assert_eq!(db.get(keys::LOCKOUT_UNTIL).unwrap().as_deref(), Some("1800000"));
}

#[test]
fn test_values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("novanav.db");

    {
        let db = Database::open(&path).expect("open should create parent dirs");
        db.set(keys::BOOKMARKS, "[]").unwrap();
    }

    let db = Database::open(&path).unwrap();
    assert_eq!(db.get(keys::BOOKMARKS).unwrap().as_deref(), Some("[]"));
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

use novanav::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Database("disk full".to_string()).to_string(),
        "Store database error: disk full"
    );
    assert_eq!(
        StoreError::Serialization("bad float".to_string()).to_string(),
        "Store serialization error: bad float"
    );
}

#[test]
fn store_error_from_rusqlite() {
    let err: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(err, StoreError::Database(_)));
}

// === RepositoryError Tests ===

#[test]
fn repository_error_display_variants() {
    assert_eq!(
        RepositoryError::Validation("name is required".to_string()).to_string(),
        "Validation failed: name is required"
    );
    assert_eq!(
        RepositoryError::CategoryNotFound("c-1".to_string()).to_string(),
        "Category not found: c-1"
    );
    assert_eq!(
        RepositoryError::BookmarkNotFound("b-1".to_string()).to_string(),
        "Bookmark not found: b-1"
    );
}

#[test]
fn repository_error_wraps_store_error() {
    let err: RepositoryError = StoreError::Database("locked".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Repository storage error: Store database error: locked"
    );
    assert!(!err.is_not_found());
}

#[test]
fn repository_error_not_found_classification() {
    assert!(RepositoryError::CategoryNotFound("x".to_string()).is_not_found());
    assert!(RepositoryError::BookmarkNotFound("x".to_string()).is_not_found());
    assert!(!RepositoryError::Validation("x".to_string()).is_not_found());
}

// === AuthError Tests ===

#[test]
fn auth_error_wraps_store_error() {
    let err: AuthError = StoreError::Serialization("nan".to_string()).into();
    assert_eq!(
        err.to_string(),
        "Auth storage error: Store serialization error: nan"
    );
}

// === IconError Tests ===

#[test]
fn icon_error_display() {
    let err = IconError::MalformedUrl("not a url".to_string());
    assert_eq!(err.to_string(), "Malformed URL: not a url");
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("denied".to_string()).to_string(),
        "Settings I/O error: denied"
    );
    assert_eq!(
        SettingsError::SerializationError("eof".to_string()).to_string(),
        "Settings serialization error: eof"
    );
    assert_eq!(
        SettingsError::InvalidKey("a.b".to_string()).to_string(),
        "Invalid settings key: a.b"
    );
    assert_eq!(
        SettingsError::InvalidValue("-1".to_string()).to_string(),
        "Invalid settings value: -1"
    );
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(RepositoryError::CategoryNotFound("id".to_string()));
    assert!(err.source().is_none());

    let err: Box<dyn std::error::Error> =
        Box::new(RepositoryError::Storage(StoreError::Database("x".to_string())));
    assert!(err.source().is_some());
}

use thiserror::Error;

// === StoreError ===

/// Errors raised by a key/value persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing database rejected a read or write.
    #[error("Store database error: {0}")]
    Database(String),
    /// A value could not be encoded for storage.
    #[error("Store serialization error: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

// === RepositoryError ===

/// Errors related to category and bookmark editing.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A required field was missing or a category reference was dangling.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// Category with the given ID was not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
    /// Bookmark with the given ID was not found.
    #[error("Bookmark not found: {0}")]
    BookmarkNotFound(String),
    /// The mutation could not be written through to the store.
    #[error("Repository storage error: {0}")]
    Storage(#[from] StoreError),
}

impl RepositoryError {
    /// True for the errors that the presentation layer treats as a no-op.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RepositoryError::CategoryNotFound(_) | RepositoryError::BookmarkNotFound(_)
        )
    }
}

// === AuthError ===

/// Errors related to the edit-mode guard.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Attempt counter or lockout deadline could not be persisted.
    #[error("Auth storage error: {0}")]
    Storage(#[from] StoreError),
}

// === IconError ===

/// Errors related to favicon derivation. Always recovered by the caller.
#[derive(Debug, Error)]
pub enum IconError {
    /// The bookmark URL has no usable origin.
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),
}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    #[error("Settings I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    SerializationError(String),
    /// The provided settings key is invalid.
    #[error("Invalid settings key: {0}")]
    InvalidKey(String),
    /// The provided settings value is invalid.
    #[error("Invalid settings value: {0}")]
    InvalidValue(String),
}

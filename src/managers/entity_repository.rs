//! Entity Repository for NovaNav.
//!
//! Implements `EntityRepositoryTrait`, the in-memory authoritative copy of
//! categories and bookmarks, written through to a [`KeyValueStore`] on every
//! mutation.
//!
//! Every mutation builds the new collections first, writes them, and only then
//! swaps them into memory. A failed write therefore leaves both memory and the
//! store exactly as they were.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::database::store::{encode_json, keys, read_json, KeyValueStore};
use crate::managers::default_data::{default_bookmarks, default_categories};
use crate::managers::reorder::{bookmark_move_indices, move_element};
use crate::services::icon_resolver::resolve_icon;
use crate::types::bookmark::{
    Bookmark, BookmarkDraft, BookmarkFields, Category, CategoryRemoval, IconType,
};
use crate::types::errors::RepositoryError;

/// Trait defining category and bookmark editing operations.
pub trait EntityRepositoryTrait {
    fn categories(&self) -> &[Category];
    fn bookmarks(&self) -> &[Bookmark];
    fn category(&self, id: &str) -> Option<&Category>;
    fn bookmark(&self, id: &str) -> Option<&Bookmark>;
    /// Bookmarks of one category, in their relative display order.
    fn bookmarks_in(&self, category_id: &str) -> Vec<&Bookmark>;

    fn add_category(&mut self, name: &str, icon_type: IconType) -> Result<Category, RepositoryError>;
    fn rename_category(&mut self, id: &str, name: &str, icon_type: IconType) -> Result<Category, RepositoryError>;
    fn delete_category(&mut self, id: &str) -> Result<CategoryRemoval, RepositoryError>;

    fn add_bookmark(&mut self, fields: BookmarkFields) -> Result<Bookmark, RepositoryError>;
    fn edit_bookmark(&mut self, id: &str, fields: BookmarkFields) -> Result<Bookmark, RepositoryError>;
    fn save_draft(&mut self, draft: BookmarkDraft) -> Result<Bookmark, RepositoryError>;
    fn delete_bookmark(&mut self, id: &str) -> Result<Bookmark, RepositoryError>;

    /// Moves a category between two positions. `Ok(false)` means no-op.
    fn move_category(&mut self, from: usize, to: usize) -> Result<bool, RepositoryError>;
    /// Moves the dragged category into the target category's slot.
    fn move_category_by_id(&mut self, dragged_id: &str, target_id: &str) -> Result<bool, RepositoryError>;
    /// Moves the dragged bookmark into the target bookmark's slot. Refused
    /// (`Ok(false)`) when the two belong to different categories.
    fn move_bookmark(&mut self, dragged_id: &str, target_id: &str) -> Result<bool, RepositoryError>;
}

/// Repository backed by a key/value store.
pub struct EntityRepository {
    store: Arc<dyn KeyValueStore>,
    categories: Vec<Category>,
    bookmarks: Vec<Bookmark>,
}

impl EntityRepository {
    /// Loads categories and bookmarks from the store.
    ///
    /// Missing or corrupt records are replaced by the built-in data set. Never fails.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let (categories, bookmarks) = Self::read_collections(store.as_ref());
        Self {
            store,
            categories,
            bookmarks,
        }
    }

    /// Re-reads both collections from the store, discarding in-memory state.
    pub fn reload(&mut self) {
        let (categories, bookmarks) = Self::read_collections(self.store.as_ref());
        self.categories = categories;
        self.bookmarks = bookmarks;
    }

    fn read_collections(store: &dyn KeyValueStore) -> (Vec<Category>, Vec<Bookmark>) {
        let mut categories: Vec<Category> =
            read_json(store, keys::CATEGORIES).unwrap_or_else(|| {
                info!("no stored categories, using built-in set");
                default_categories()
            });
        let mut bookmarks: Vec<Bookmark> =
            read_json(store, keys::BOOKMARKS).unwrap_or_else(|| {
                info!("no stored bookmarks, using built-in set");
                default_bookmarks()
            });

        let mut seen = HashSet::new();
        categories.retain(|c| seen.insert(c.id.clone()));
        let mut seen = HashSet::new();
        bookmarks.retain(|b| seen.insert(b.id.clone()));

        let before = bookmarks.len();
        bookmarks.retain(|b| categories.iter().any(|c| c.id == b.category_id));
        if bookmarks.len() != before {
            warn!(
                dropped = before - bookmarks.len(),
                "dropped bookmarks referencing unknown categories"
            );
        }

        (categories, bookmarks)
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }

    /// Writes the given collections as one unit, then installs them in memory.
    fn commit(
        &mut self,
        categories: Option<Vec<Category>>,
        bookmarks: Option<Vec<Bookmark>>,
    ) -> Result<(), RepositoryError> {
        let mut entries = Vec::with_capacity(2);
        if let Some(c) = &categories {
            entries.push((keys::CATEGORIES, encode_json(c)?));
        }
        if let Some(b) = &bookmarks {
            entries.push((keys::BOOKMARKS, encode_json(b)?));
        }
        self.store.set_many(&entries)?;

        if let Some(c) = categories {
            self.categories = c;
        }
        if let Some(b) = bookmarks {
            self.bookmarks = b;
        }
        Ok(())
    }

    fn require_text(value: &str, field: &str) -> Result<String, RepositoryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RepositoryError::Validation(format!("{} is required", field)));
        }
        Ok(trimmed.to_string())
    }

    /// Validates and normalizes bookmark fields, resolving the icon.
    fn checked_fields(&self, fields: BookmarkFields) -> Result<BookmarkFields, RepositoryError> {
        let name = Self::require_text(&fields.name, "name")?;
        let url = Self::require_text(&fields.url, "url")?;
        let category_id = Self::require_text(&fields.category_id, "category")?;
        if self.category(&category_id).is_none() {
            return Err(RepositoryError::Validation(format!(
                "category does not exist: {}",
                category_id
            )));
        }
        let icon = resolve_icon(&fields.icon, &url);
        Ok(BookmarkFields {
            name,
            url,
            description: fields.description.trim().to_string(),
            icon,
            category_id,
        })
    }

    fn category_index(&self, id: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.id == id)
    }

    fn bookmark_index(&self, id: &str) -> Option<usize> {
        self.bookmarks.iter().position(|b| b.id == id)
    }
}

impl EntityRepositoryTrait for EntityRepository {
    fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    fn bookmark(&self, id: &str) -> Option<&Bookmark> {
        self.bookmarks.iter().find(|b| b.id == id)
    }

    fn bookmarks_in(&self, category_id: &str) -> Vec<&Bookmark> {
        self.bookmarks
            .iter()
            .filter(|b| b.category_id == category_id)
            .collect()
    }

    /// Appends a new category with a fresh id.
    fn add_category(&mut self, name: &str, icon_type: IconType) -> Result<Category, RepositoryError> {
        let category = Category {
            id: Self::new_id(),
            name: Self::require_text(name, "name")?,
            icon_type,
        };

        let mut categories = self.categories.clone();
        categories.push(category.clone());
        self.commit(Some(categories), None)?;

        info!(id = %category.id, name = %category.name, "category added");
        Ok(category)
    }

    /// Changes a category's label and icon tag, keeping its position.
    fn rename_category(&mut self, id: &str, name: &str, icon_type: IconType) -> Result<Category, RepositoryError> {
        let index = self
            .category_index(id)
            .ok_or_else(|| RepositoryError::CategoryNotFound(id.to_string()))?;
        let name = Self::require_text(name, "name")?;

        let mut categories = self.categories.clone();
        categories[index].name = name;
        categories[index].icon_type = icon_type;
        let updated = categories[index].clone();
        self.commit(Some(categories), None)?;

        info!(id, "category renamed");
        Ok(updated)
    }

    /// Removes a category and every bookmark in it in a single store write.
    fn delete_category(&mut self, id: &str) -> Result<CategoryRemoval, RepositoryError> {
        let index = self
            .category_index(id)
            .ok_or_else(|| RepositoryError::CategoryNotFound(id.to_string()))?;

        let mut categories = self.categories.clone();
        let category = categories.remove(index);
        let (removed, kept): (Vec<Bookmark>, Vec<Bookmark>) = self
            .bookmarks
            .iter()
            .cloned()
            .partition(|b| b.category_id == id);

        self.commit(Some(categories), Some(kept))?;

        let removed_bookmarks: Vec<String> = removed.into_iter().map(|b| b.id).collect();
        info!(id, cascaded = removed_bookmarks.len(), "category deleted");
        Ok(CategoryRemoval {
            category,
            removed_bookmarks,
        })
    }

    /// Appends a new bookmark with a fresh id after validating its fields.
    fn add_bookmark(&mut self, fields: BookmarkFields) -> Result<Bookmark, RepositoryError> {
        let fields = self.checked_fields(fields)?;
        let bookmark = Bookmark {
            id: Self::new_id(),
            name: fields.name,
            url: fields.url,
            description: fields.description,
            icon: fields.icon,
            category_id: fields.category_id,
        };

        let mut bookmarks = self.bookmarks.clone();
        bookmarks.push(bookmark.clone());
        self.commit(None, Some(bookmarks))?;

        info!(id = %bookmark.id, category = %bookmark.category_id, "bookmark added");
        Ok(bookmark)
    }

    /// Replaces a bookmark's fields in place.
    fn edit_bookmark(&mut self, id: &str, fields: BookmarkFields) -> Result<Bookmark, RepositoryError> {
        let index = self
            .bookmark_index(id)
            .ok_or_else(|| RepositoryError::BookmarkNotFound(id.to_string()))?;
        let fields = self.checked_fields(fields)?;

        let mut bookmarks = self.bookmarks.clone();
        let target = &mut bookmarks[index];
        target.name = fields.name;
        target.url = fields.url;
        target.description = fields.description;
        target.icon = fields.icon;
        target.category_id = fields.category_id;
        let updated = target.clone();
        self.commit(None, Some(bookmarks))?;

        info!(id, "bookmark edited");
        Ok(updated)
    }

    fn save_draft(&mut self, draft: BookmarkDraft) -> Result<Bookmark, RepositoryError> {
        match draft.target_id {
            Some(id) => self.edit_bookmark(&id, draft.fields),
            None => self.add_bookmark(draft.fields),
        }
    }

    fn delete_bookmark(&mut self, id: &str) -> Result<Bookmark, RepositoryError> {
        let index = self
            .bookmark_index(id)
            .ok_or_else(|| RepositoryError::BookmarkNotFound(id.to_string()))?;

        let mut bookmarks = self.bookmarks.clone();
        let removed = bookmarks.remove(index);
        self.commit(None, Some(bookmarks))?;

        info!(id, "bookmark deleted");
        Ok(removed)
    }

    fn move_category(&mut self, from: usize, to: usize) -> Result<bool, RepositoryError> {
        let mut categories = self.categories.clone();
        if !move_element(&mut categories, from, to) {
            return Ok(false);
        }
        self.commit(Some(categories), None)?;
        info!(from, to, "category moved");
        Ok(true)
    }

    fn move_category_by_id(&mut self, dragged_id: &str, target_id: &str) -> Result<bool, RepositoryError> {
        match (self.category_index(dragged_id), self.category_index(target_id)) {
            (Some(from), Some(to)) => self.move_category(from, to),
            _ => Ok(false),
        }
    }

    fn move_bookmark(&mut self, dragged_id: &str, target_id: &str) -> Result<bool, RepositoryError> {
        let Some((from, to)) = bookmark_move_indices(&self.bookmarks, dragged_id, target_id) else {
            return Ok(false);
        };

        let mut bookmarks = self.bookmarks.clone();
        move_element(&mut bookmarks, from, to);
        self.commit(None, Some(bookmarks))?;
        info!(dragged_id, target_id, "bookmark moved");
        Ok(true)
    }
}

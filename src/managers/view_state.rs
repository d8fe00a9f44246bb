// NovaNav view state
// Session-only selection driving what the dashboard shows: the active
// category filter and the search query. Nothing here is persisted.

use serde::Serialize;

use crate::managers::entity_repository::EntityRepositoryTrait;
use crate::services::search::search;
use crate::types::bookmark::{Bookmark, CategorySection};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    active_category_id: Option<String>,
    search_query: String,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category_id.as_deref()
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Selects a category (or "all" with `None`). Picking from the sidebar
    /// also clears the search box.
    pub fn select_category(&mut self, category_id: Option<String>) {
        self.active_category_id = category_id;
        self.search_query.clear();
    }

    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
    }

    pub fn clear(&mut self) {
        self.active_category_id = None;
        self.search_query.clear();
    }

    /// Drops the active filter if it points at a deleted category.
    /// Returns whether the filter was cleared.
    pub fn forget_category(&mut self, category_id: &str) -> bool {
        if self.active_category_id.as_deref() == Some(category_id) {
            self.active_category_id = None;
            return true;
        }
        false
    }

    /// True when the grouped "all categories" view should be rendered
    /// instead of a flat result list.
    pub fn shows_sections(&self) -> bool {
        self.active_category_id.is_none() && self.search_query.is_empty()
    }

    /// Search results narrowed to the active category.
    pub fn visible<R: EntityRepositoryTrait + ?Sized>(&self, repo: &R) -> Vec<Bookmark> {
        let mut list = search(&self.search_query, repo.bookmarks());
        if let Some(active) = &self.active_category_id {
            list.retain(|b| &b.category_id == active);
        }
        list
    }

    /// Every category with its bookmarks, skipping empty categories.
    pub fn sections<R: EntityRepositoryTrait + ?Sized>(&self, repo: &R) -> Vec<CategorySection> {
        repo.categories()
            .iter()
            .filter_map(|category| {
                let bookmarks: Vec<Bookmark> =
                    repo.bookmarks_in(&category.id).into_iter().cloned().collect();
                if bookmarks.is_empty() {
                    None
                } else {
                    Some(CategorySection {
                        category: category.clone(),
                        bookmarks,
                    })
                }
            })
            .collect()
    }
}

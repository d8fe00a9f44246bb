// NovaNav bookmark search
// Pure filter over the in-memory list; never touches the store.

use crate::types::bookmark::Bookmark;

/// Returns the bookmarks whose name, description, or URL contains `query`,
/// ignoring case. An empty query matches everything. Order is preserved.
pub fn search(query: &str, bookmarks: &[Bookmark]) -> Vec<Bookmark> {
    if query.is_empty() {
        return bookmarks.to_vec();
    }
    let needle = query.to_lowercase();
    bookmarks
        .iter()
        .filter(|b| matches(b, &needle))
        .cloned()
        .collect()
}

fn matches(bookmark: &Bookmark, needle: &str) -> bool {
    bookmark.name.to_lowercase().contains(needle)
        || bookmark.description.to_lowercase().contains(needle)
        || bookmark.url.to_lowercase().contains(needle)
}

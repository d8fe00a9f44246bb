//! Reorder Engine.
//!
//! Positional moves inside one sequence. Moves are permutations: they never
//! add, drop, or modify elements, so foreign keys such as a bookmark's
//! `category_id` are untouched.

use crate::types::bookmark::Bookmark;

/// Removes the element at `from` and reinserts it at `to`.
///
/// Returns `false` and leaves the sequence alone when the indices are equal or
/// either one is out of bounds.
pub fn move_element<T>(sequence: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= sequence.len() || to >= sequence.len() {
        return false;
    }
    let item = sequence.remove(from);
    sequence.insert(to, item);
    true
}

/// Resolves a drag of `dragged_id` onto `target_id` to `(from, to)` indices
/// in the full bookmark sequence.
///
/// Returns `None` for unknown ids, identical ids, and for bookmarks in
/// different categories. Dragging across categories would otherwise place a
/// bookmark inside another category's visual slot without re-categorizing it.
pub fn bookmark_move_indices(
    bookmarks: &[Bookmark],
    dragged_id: &str,
    target_id: &str,
) -> Option<(usize, usize)> {
    let from = bookmarks.iter().position(|b| b.id == dragged_id)?;
    let to = bookmarks.iter().position(|b| b.id == target_id)?;
    if from == to || bookmarks[from].category_id != bookmarks[to].category_id {
        return None;
    }
    Some((from, to))
}

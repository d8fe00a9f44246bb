//! Unit tests for the EntityRepository: category and bookmark editing,
//! cascade delete, icon derivation, validation, and write-through persistence.

use std::sync::Arc;

use novanav::database::{keys, Database, KeyValueStore, MemoryStore};
use novanav::managers::default_data::{default_bookmarks, default_categories};
use novanav::managers::entity_repository::{EntityRepository, EntityRepositoryTrait};
use novanav::types::bookmark::{BookmarkDraft, BookmarkFields, IconType};
use novanav::types::errors::RepositoryError;

fn fresh() -> (Arc<MemoryStore>, EntityRepository) {
    let store = Arc::new(MemoryStore::new());
    let repo = EntityRepository::load(store.clone());
    (store, repo)
}

fn fields(name: &str, url: &str, category_id: &str) -> BookmarkFields {
    BookmarkFields {
        name: name.to_string(),
        url: url.to_string(),
        category_id: category_id.to_string(),
        ..BookmarkFields::default()
    }
}

// ─── Loading ───

#[test]
fn test_empty_store_loads_built_in_data() {
    let (_store, repo) = fresh();
    assert_eq!(repo.categories(), default_categories().as_slice());
    assert_eq!(repo.bookmarks(), default_bookmarks().as_slice());
}

#[test]
fn test_corrupt_records_fall_back_to_built_in_data() {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::CATEGORIES, "not json").unwrap();
    store.set(keys::BOOKMARKS, "{\"also\": \"wrong\"}").unwrap();

    let repo = EntityRepository::load(store);
    assert_eq!(repo.categories().len(), 4);
    assert_eq!(repo.bookmarks().len(), default_bookmarks().len());
}

#[test]
fn test_stored_empty_lists_stay_empty() {
    let store = Arc::new(MemoryStore::new());
    store.set(keys::CATEGORIES, "[]").unwrap();
    store.set(keys::BOOKMARKS, "[]").unwrap();

    let repo = EntityRepository::load(store);
    assert!(repo.categories().is_empty());
    assert!(repo.bookmarks().is_empty());
}

// ─── Categories ───

#[test]
fn test_add_category_appends_with_fresh_id() {
    let (store, mut repo) = fresh();
    let c = repo.add_category("Reading", IconType::Resources).unwrap();

    assert_eq!(repo.categories().last(), Some(&c));
    assert_eq!(c.name, "Reading");
    assert!(!default_categories().iter().any(|d| d.id == c.id));

    let stored = store.get(keys::CATEGORIES).unwrap().unwrap();
    assert!(stored.contains(&c.id));
}

#[test]
fn test_add_category_rejects_blank_name() {
    let (_store, mut repo) = fresh();
    let err = repo.add_category("   ", IconType::Misc).unwrap_err();
    assert!(matches!(err, RepositoryError::Validation(_)));
    assert_eq!(repo.categories().len(), 4);
}

#[test]
fn test_rename_category_keeps_position() {
    let (_store, mut repo) = fresh();
    let updated = repo.rename_category("media", "Video", IconType::Tools).unwrap();

    assert_eq!(updated.id, "media");
    assert_eq!(repo.categories()[1].name, "Video");
    assert_eq!(repo.categories()[1].icon_type, IconType::Tools);
}

#[test]
fn test_rename_missing_category_is_not_found() {
    let (_store, mut repo) = fresh();
    let err = repo.rename_category("ghost", "X", IconType::Misc).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_delete_category_cascades_to_its_bookmarks() {
    let (_store, mut repo) = fresh();
    let expected: Vec<String> = repo
        .bookmarks_in("tools")
        .iter()
        .map(|b| b.id.clone())
        .collect();
    let others = repo.bookmarks().len() - expected.len();

    let removal = repo.delete_category("tools").unwrap();

    assert_eq!(removal.category.id, "tools");
    assert_eq!(removal.removed_bookmarks, expected);
    assert!(repo.category("tools").is_none());
    assert!(repo.bookmarks().iter().all(|b| b.category_id != "tools"));
    assert_eq!(repo.bookmarks().len(), others);
}

#[test]
fn test_delete_missing_category_is_not_found() {
    let (_store, mut repo) = fresh();
    let err = repo.delete_category("ghost").unwrap_err();
    assert!(matches!(err, RepositoryError::CategoryNotFound(_)));
    assert_eq!(repo.categories().len(), 4);
}

// ─── Bookmarks ───

#[test]
fn test_add_bookmark_derives_favicon() {
    let (_store, mut repo) = fresh();
    let b = repo
        .add_bookmark(fields("Example", "https://example.com/page", "tools"))
        .unwrap();

    assert_eq!(b.icon, "https://example.com/favicon.ico");
    assert_eq!(repo.bookmarks().last(), Some(&b));
}

#[test]
fn test_add_bookmark_keeps_explicit_icon() {
    let (_store, mut repo) = fresh();
    let mut f = fields("Rust", "https://www.rust-lang.org", "tools");
    f.icon = "https://cdn.example.com/rust.png".to_string();

    let b = repo.add_bookmark(f).unwrap();
    assert_eq!(b.icon, "https://cdn.example.com/rust.png");
}

#[test]
fn test_add_bookmark_with_malformed_url_leaves_icon_empty() {
    let (_store, mut repo) = fresh();
    let b = repo.add_bookmark(fields("Local", "not a url", "misc")).unwrap();
    assert_eq!(b.icon, "");
    assert_eq!(b.url, "not a url");
}

#[test]
fn test_add_bookmark_requires_name_url_and_category() {
    let (_store, mut repo) = fresh();
    let before = repo.bookmarks().len();

    for f in [
        fields("", "https://a.io", "tools"),
        fields("A", "  ", "tools"),
        fields("A", "https://a.io", ""),
        fields("A", "https://a.io", "ghost"),
    ] {
        let err = repo.add_bookmark(f).unwrap_err();
        assert!(matches!(err, RepositoryError::Validation(_)));
    }
    assert_eq!(repo.bookmarks().len(), before);
}

#[test]
fn test_edit_bookmark_replaces_fields_in_place() {
    let (_store, mut repo) = fresh();
    let position = repo.bookmarks().iter().position(|b| b.id == "2").unwrap();

    let mut f = fields("DeepL Translate", "https://www.deepl.com/translator", "misc");
    f.description = "Translations".to_string();
    let updated = repo.edit_bookmark("2", f).unwrap();

    assert_eq!(updated.id, "2");
    assert_eq!(updated.category_id, "misc");
    assert_eq!(updated.icon, "https://www.deepl.com/favicon.ico");
    assert_eq!(repo.bookmarks()[position], updated);
}

#[test]
fn test_save_draft_creates_or_updates() {
    let (_store, mut repo) = fresh();

    let mut draft = BookmarkDraft::create("media");
    draft.fields.name = "Vimeo".to_string();
    draft.fields.url = "https://vimeo.com".to_string();
    assert!(!draft.is_update());
    let created = repo.save_draft(draft).unwrap();
    assert!(repo.bookmark(&created.id).is_some());

    let mut draft = BookmarkDraft::edit(&created);
    assert!(draft.is_update());
    draft.fields.name = "Vimeo Pro".to_string();
    let count = repo.bookmarks().len();
    let updated = repo.save_draft(draft).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Vimeo Pro");
    assert_eq!(repo.bookmarks().len(), count);
}

#[test]
fn test_delete_bookmark() {
    let (_store, mut repo) = fresh();
    let removed = repo.delete_bookmark("1").unwrap();
    assert_eq!(removed.name, "Google");
    assert!(repo.bookmark("1").is_none());

    let err = repo.delete_bookmark("1").unwrap_err();
    assert!(matches!(err, RepositoryError::BookmarkNotFound(_)));
}

// ─── Reordering ───

#[test]
fn test_move_category_by_index_and_id() {
    let (_store, mut repo) = fresh();

    assert!(repo.move_category(0, 3).unwrap());
    let ids: Vec<&str> = repo.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["media", "resources", "misc", "tools"]);

    assert!(repo.move_category_by_id("tools", "media").unwrap());
    let ids: Vec<&str> = repo.categories().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["tools", "media", "resources", "misc"]);
}

#[test]
fn test_move_category_noops() {
    let (_store, mut repo) = fresh();
    let before = repo.categories().to_vec();

    assert!(!repo.move_category(1, 1).unwrap());
    assert!(!repo.move_category(0, 99).unwrap());
    assert!(!repo.move_category_by_id("tools", "ghost").unwrap());
    assert_eq!(repo.categories(), before.as_slice());
}

#[test]
fn test_move_bookmark_within_category() {
    let (_store, mut repo) = fresh();
    assert!(repo.move_bookmark("1", "3").unwrap());

    let order: Vec<&str> = repo.bookmarks_in("tools").iter().map(|b| b.id.as_str()).collect();
    assert_eq!(order, ["2", "3", "1", "4"]);
}

#[test]
fn test_move_bookmark_across_categories_is_refused() {
    let (_store, mut repo) = fresh();
    let before = repo.bookmarks().to_vec();

    assert!(!repo.move_bookmark("1", "5").unwrap());
    assert_eq!(repo.bookmarks(), before.as_slice());
}

// ─── Persistence ───

#[test]
fn test_mutations_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nav.db");

    let (category_id, bookmark_id) = {
        let store = Arc::new(Database::open(&path).unwrap());
        let mut repo = EntityRepository::load(store);
        let c = repo.add_category("Work", IconType::Tools).unwrap();
        let b = repo.add_bookmark(fields("Jira", "https://jira.example.com", &c.id)).unwrap();
        repo.delete_category("media").unwrap();
        (c.id, b.id)
    };

    let repo = EntityRepository::load(Arc::new(Database::open(&path).unwrap()));
    assert!(repo.category(&category_id).is_some());
    assert_eq!(repo.bookmark(&bookmark_id).map(|b| b.name.as_str()), Some("Jira"));
    assert!(repo.category("media").is_none());
    assert!(repo.bookmarks_in("media").is_empty());
}

#[test]
fn test_reload_discards_unsaved_memory() {
    let (store, mut repo) = fresh();
    repo.add_category("Temp", IconType::Misc).unwrap();
    store.set(keys::CATEGORIES, "not json").unwrap();

    repo.reload();
    assert_eq!(repo.categories(), default_categories().as_slice());
}

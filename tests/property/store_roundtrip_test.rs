//! Property-based tests for persistence round-trips.
//!
//! Whatever the repository writes through to SQLite is exactly what a fresh
//! repository reads back, and raw key/value pairs survive storage unchanged.

use std::sync::Arc;

use novanav::database::{Database, KeyValueStore};
use novanav::managers::entity_repository::{EntityRepository, EntityRepositoryTrait};
use novanav::types::bookmark::{BookmarkFields, IconType};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_icon_type() -> impl Strategy<Value = IconType> {
    prop_oneof![
        Just(IconType::All),
        Just(IconType::Tools),
        Just(IconType::Media),
        Just(IconType::Resources),
        Just(IconType::Misc),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(20))]

    #[test]
    fn kv_values_roundtrip(
        key in "[a-z_]{1,20}",
        value in "[^\\x00]{0,200}",
    ) {
        let db = Database::open_in_memory().unwrap();
        db.set(&key, &value).unwrap();
        prop_assert_eq!(db.get(&key).unwrap(), Some(value));
    }

    #[test]
    fn repository_state_roundtrips_through_sqlite(
        categories in prop::collection::vec(("[\\p{L}0-9][\\p{L}0-9 ]{0,20}", arb_icon_type()), 0..4),
        bookmarks in prop::collection::vec(
            ("[\\p{L}][\\p{L}0-9 ]{0,20}", "[a-z]{3,10}", ".{0,40}"),
            0..6,
        ),
    ) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roundtrip.db");

        let (expected_categories, expected_bookmarks) = {
            let mut repo = EntityRepository::load(Arc::new(Database::open(&path).unwrap()));
            let mut targets = vec!["misc".to_string()];
            for (name, icon_type) in &categories {
                targets.push(repo.add_category(name, *icon_type).unwrap().id);
            }
            for (i, (name, host, description)) in bookmarks.iter().enumerate() {
                repo.add_bookmark(BookmarkFields {
                    name: name.clone(),
                    url: format!("https://{}.example/", host),
                    description: description.clone(),
                    icon: String::new(),
                    category_id: targets[i % targets.len()].clone(),
                })
                .unwrap();
            }
            (repo.categories().to_vec(), repo.bookmarks().to_vec())
        };

        let reopened = EntityRepository::load(Arc::new(Database::open(&path).unwrap()));
        prop_assert_eq!(reopened.categories(), expected_categories.as_slice());
        prop_assert_eq!(reopened.bookmarks(), expected_bookmarks.as_slice());
    }
}

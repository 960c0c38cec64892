use reelshelf_core::model::{ListKind, Rating, Title, TitleId};
use reelshelf_core::{FileStorage, MembershipStore, MemoryStorage};
use tempfile::TempDir;

fn title(id: &str, name: &str) -> Title {
    let mut title = Title::new(id, name);
    title.start_year = Some(1999);
    title.rating = Some(Rating {
        aggregate_rating: Some(8.7),
        vote_count: Some(2_000_000),
    });
    title
}

#[test]
fn lists_persist_across_reloads_in_insertion_order() {
    let dir = TempDir::new().unwrap();

    {
        let mut store =
            MembershipStore::load(FileStorage::with_data_dir(dir.path()));
        store
            .toggle(ListKind::Watchlist, title("tt0133093", "The Matrix"))
            .unwrap();
        store
            .toggle(ListKind::Watchlist, title("tt0137523", "Fight Club"))
            .unwrap();
        store
            .toggle(ListKind::Favorites, title("tt0137523", "Fight Club"))
            .unwrap();
    }

    let store = MembershipStore::load(FileStorage::with_data_dir(dir.path()));
    let watchlist: Vec<_> = store
        .list(ListKind::Watchlist)
        .iter()
        .map(|t| t.display_title())
        .collect();
    assert_eq!(watchlist, vec!["The Matrix", "Fight Club"]);
    assert!(store.contains(ListKind::Favorites, &TitleId::new("tt0137523")));

    // full records are cached, not just ids
    let cached = &store.list(ListKind::Watchlist)[0];
    assert_eq!(cached.start_year, Some(1999));
    assert_eq!(cached.display_rating(), "8.7");

    assert!(dir.path().join("reelshelf.favorites.json").exists());
    assert!(dir.path().join("reelshelf.watchlist.json").exists());
}

#[test]
fn toggle_is_keyed_by_id_only() {
    let mut store = MembershipStore::load(MemoryStorage::new());
    store
        .toggle(ListKind::Favorites, title("tt1", "Original"))
        .unwrap();

    let renamed = title("tt1", "Renamed upstream");
    assert!(!store.toggle(ListKind::Favorites, renamed).unwrap());
    assert!(store.list(ListKind::Favorites).is_empty());
}

#[test]
fn corrupt_storage_loads_as_empty() {
    let storage = MemoryStorage::new()
        .with_entry(ListKind::Favorites.storage_key(), "{ not json")
        .with_entry(
            ListKind::Watchlist.storage_key(),
            r#"[{"id":"tt1","primaryTitle":"Kept"}]"#,
        );

    let store = MembershipStore::load(storage);
    assert!(store.is_empty(ListKind::Favorites));
    assert_eq!(store.len(ListKind::Watchlist), 1);
}

#[test]
fn corrupt_file_loads_as_empty() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("reelshelf.favorites.json"), b"\x00\x01")
        .unwrap();

    let store = MembershipStore::load(FileStorage::with_data_dir(dir.path()));
    assert!(store.is_empty(ListKind::Favorites));
}

#[test]
fn failed_write_rolls_back() {
    let storage = MemoryStorage::new();
    let mut store = MembershipStore::load(storage.clone());
    store
        .toggle(ListKind::Favorites, title("tt1", "Kept"))
        .unwrap();

    storage.fail_writes(true);
    let added = store.toggle(ListKind::Favorites, title("tt2", "Rejected"));
    assert!(added.is_err());
    let removed = store.toggle(ListKind::Favorites, title("tt1", "Kept"));
    assert!(removed.is_err());

    assert!(store.contains(ListKind::Favorites, &TitleId::new("tt1")));
    assert!(!store.contains(ListKind::Favorites, &TitleId::new("tt2")));

    let persisted = storage.get(ListKind::Favorites.storage_key()).unwrap();
    assert!(persisted.contains("tt1"));
    assert!(!persisted.contains("tt2"));
}

#[test]
fn persisted_format_is_a_json_array_of_titles() {
    let storage = MemoryStorage::new();
    let mut store = MembershipStore::load(storage.clone());
    store
        .toggle(ListKind::Watchlist, title("tt0133093", "The Matrix"))
        .unwrap();

    let raw = storage.get("reelshelf.watchlist").unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["id"], "tt0133093");
    assert_eq!(parsed[0]["primaryTitle"], "The Matrix");
}

// SPDX-License-Identifier: GPL-3.0-only

//! Integration tests for the JSON-file card store

use cardbox::card::Card;
use cardbox::codetype::CodeType;
use cardbox::storage::CardStore;
use chrono::{Duration, Utc};

fn store_path(dir: &tempfile::TempDir) -> std::path::PathBuf {
    dir.path().join("cards.json")
}

#[test]
fn test_open_missing_file_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let store = CardStore::open(store_path(&dir)).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_save_and_reopen_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = store_path(&dir);

    let mut store = CardStore::open(&path).unwrap();
    store.add(
        Card::new("Grocery Plus", "4006381333931")
            .with_code_type(CodeType::Ean13)
            .with_notes("paper coupon")
            .with_custom_image(vec![1, 2, 3, 4]),
    );
    store.add(Card::new("Gym", "G-42"));
    store.save().unwrap();

    let reopened = CardStore::open(&path).unwrap();
    assert_eq!(reopened.cards(), store.cards());
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("cards.json");

    let mut store = CardStore::open(&path).unwrap();
    store.add(Card::new("Gym", "G-42"));
    store.save().unwrap();

    assert!(path.exists());
}

#[test]
fn test_get_and_remove_by_id() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CardStore::open(store_path(&dir)).unwrap();

    let card = Card::new("Gym", "G-42");
    let id = card.id;
    store.add(card);

    assert_eq!(store.get(id).map(|c| c.name.as_str()), Some("Gym"));
    let removed = store.remove(id).unwrap();
    assert_eq!(removed.name, "Gym");
    assert!(store.is_empty());
    assert!(store.remove(id).is_none());
}

#[test]
fn test_sorted_recent_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CardStore::open(store_path(&dir)).unwrap();

    let now = Utc::now();
    let mut older = Card::new("Older", "1");
    older.updated_at = now - Duration::hours(2);
    let mut newer = Card::new("Newer", "2");
    newer.updated_at = now - Duration::hours(1);

    store.add(older);
    store.add(newer);

    let names: Vec<&str> = store
        .sorted_recent_first()
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Newer", "Older"]);
}

#[test]
fn test_merge_skips_exact_code_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CardStore::open(store_path(&dir)).unwrap();
    store.add(Card::new("Existing A", "A"));
    store.add(Card::new("Existing B", "B"));

    let summary = store.merge_cards(vec![
        Card::new("Incoming A", "A"),
        Card::new("Incoming C", "C"),
    ]);

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);

    let codes: Vec<&str> = store.cards().iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["A", "B", "C"]);
    // The skipped duplicate neither merged nor overwrote
    assert!(store.cards().iter().all(|c| c.name != "Incoming A"));
}

#[test]
fn test_merge_checks_codes_not_names_or_types() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CardStore::open(store_path(&dir)).unwrap();
    store.add(Card::new("Groceries", "12345").with_code_type(CodeType::Ean13));

    // Same name, different code: inserted. Same code, different
    // symbology: still a duplicate — the key is the code string alone.
    let summary = store.merge_cards(vec![
        Card::new("Groceries", "99999"),
        Card::new("Other shop", "12345").with_code_type(CodeType::QrCode),
    ]);

    assert_eq!(summary.inserted, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_merge_snapshot_taken_before_merge() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = CardStore::open(store_path(&dir)).unwrap();

    // Two incoming cards with the same new code: both insert, because
    // the duplicate set is the collection as it was before the merge
    let summary = store.merge_cards(vec![
        Card::new("First", "X"),
        Card::new("Second", "X"),
    ]);
    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped, 0);
}

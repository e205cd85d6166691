//! Integration tests for saved colors and the color store

mod common;
use common::*;

use colorizer::storage::{LAST_USED_COLOR_KEY, SAVED_COLORS_KEY};
use colorizer::{ColorStore, Hex, KeyValueStore, MemoryStore, SavePolicy, SavedColors};

fn as_strs(saved: &SavedColors) -> Vec<&str> {
    saved.iter().map(Hex::as_str).collect()
}

#[test]
fn add_puts_newest_first() {
    let mut saved = SavedColors::new(SavePolicy::unlimited());
    saved.add(hex("#111111"));
    saved.add(hex("#222222"));
    saved.add(hex("#333333"));

    assert_eq!(as_strs(&saved), ["#333333", "#222222", "#111111"]);
}

#[test]
fn re_adding_moves_to_front_without_duplicating() {
    let mut saved = SavedColors::new(SavePolicy::unlimited());
    saved.add(hex("#aabbcc"));
    saved.add(hex("#000000"));
    saved.add(hex("#AABBCC"));

    assert_eq!(as_strs(&saved), ["#aabbcc", "#000000"]);
}

#[test]
fn capped_policy_drops_oldest() {
    let mut saved = SavedColors::new(SavePolicy::capped(10));
    for i in 0..12u8 {
        saved.add(hex(&format!("#0000{i:02x}")));
    }

    assert_eq!(saved.len(), 10);
    assert_eq!(saved.first().unwrap().as_str(), "#00000b");
    assert!(!saved.contains(&hex("#000000")));
    assert!(!saved.contains(&hex("#000001")));
    assert!(saved.contains(&hex("#000002")));
}

#[test]
fn remove_matches_case_insensitively() {
    let mut saved = SavedColors::new(SavePolicy::unlimited());
    saved.add(hex("#abcdef"));

    assert!(saved.remove("#ABCDEF"));
    assert!(saved.is_empty());
    assert!(!saved.remove("#abcdef"));
}

#[test]
fn json_round_trip_keeps_order() {
    let mut saved = SavedColors::new(SavePolicy::unlimited());
    saved.add(hex("#010203"));
    saved.add(hex("#fedcba"));

    let json = saved.to_json();
    assert_eq!(json, r##"["#fedcba","#010203"]"##);
    assert_eq!(SavedColors::from_json(&json, SavePolicy::unlimited()), saved);
}

#[test]
fn corrupt_json_loads_empty() {
    for text in ["", "not json", "{\"a\": 1}", "[1, 2]", "null"] {
        assert!(SavedColors::from_json(text, SavePolicy::unlimited()).is_empty());
    }
}

#[test]
fn stored_entries_are_normalized() {
    let saved = SavedColors::from_json(r##"["#FFF", "#ffffff", "bogus", "#000"]"##, SavePolicy::unlimited());
    assert_eq!(as_strs(&saved), ["#ffffff", "#000000"]);
}

#[test]
fn initial_color_stores_default_when_empty() {
    let mut store = ColorStore::new(MemoryStore::new(), SavePolicy::unlimited());

    let initial = store.initial_color(&hex("#0080ff")).unwrap();
    assert_eq!(initial.as_str(), "#0080ff");
    assert_eq!(
        store.inner().get(LAST_USED_COLOR_KEY).unwrap().as_deref(),
        Some("#0080ff")
    );
}

#[test]
fn initial_color_prefers_stored_color() {
    let mut inner = MemoryStore::new();
    inner.set(LAST_USED_COLOR_KEY, "#ABC").unwrap();
    let mut store = ColorStore::new(inner, SavePolicy::unlimited());

    assert_eq!(store.initial_color(&hex("#0080ff")).unwrap().as_str(), "#aabbcc");
}

#[test]
fn save_color_persists_list_and_last_used() {
    let mut store = ColorStore::new(MemoryStore::new(), SavePolicy::unlimited());
    store.save_color(&hex("#123456")).unwrap();
    store.save_color(&hex("#654321")).unwrap();
    store.save_color(&hex("#123456")).unwrap();

    let inner = store.inner();
    assert_eq!(
        inner.get(SAVED_COLORS_KEY).unwrap().as_deref(),
        Some(r##"["#123456","#654321"]"##)
    );
    assert_eq!(inner.get(LAST_USED_COLOR_KEY).unwrap().as_deref(), Some("#123456"));
}

#[test]
fn save_color_respects_policy() {
    let mut store = ColorStore::new(MemoryStore::new(), SavePolicy::capped(2));
    for color in ["#111111", "#222222", "#333333"] {
        store.save_color(&hex(color)).unwrap();
    }

    let saved = store.saved_colors().unwrap();
    assert_eq!(as_strs(&saved), ["#333333", "#222222"]);
}

#[test]
fn delete_color_persists() {
    let mut store = ColorStore::new(MemoryStore::new(), SavePolicy::unlimited());
    store.save_color(&hex("#111111")).unwrap();
    store.save_color(&hex("#222222")).unwrap();

    let saved = store.delete_color("#111111").unwrap();
    assert_eq!(as_strs(&saved), ["#222222"]);
    assert_eq!(as_strs(&store.saved_colors().unwrap()), ["#222222"]);
}

#[test]
fn corrupt_stored_list_reads_as_empty() {
    let mut inner = MemoryStore::new();
    inner.set(SAVED_COLORS_KEY, "{oops").unwrap();
    let store = ColorStore::new(inner, SavePolicy::unlimited());

    assert!(store.saved_colors().unwrap().is_empty());
}

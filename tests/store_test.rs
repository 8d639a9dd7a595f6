// ABOUTME: Integration tests for the file-backed store and snapshot recovery
// ABOUTME: Validates per-key files, missing records, and corruption clearing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::marie;
use serein::store::{load_snapshot, FileStore, StoreKey, StoreProvider};
use tempfile::TempDir;

fn store_in(dir: &TempDir) -> FileStore {
    FileStore::new(dir.path().join("serein")).unwrap()
}

#[test]
fn test_missing_records_load_as_none() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    for key in StoreKey::ALL {
        assert!(store.load(key).unwrap().is_none());
    }
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);

    let profile_json = serde_json::to_string(&marie()).unwrap();
    store.save(StoreKey::Profile, &profile_json).unwrap();

    assert_eq!(
        store.load(StoreKey::Profile).unwrap().as_deref(),
        Some(profile_json.as_str())
    );
    // each record is its own file under the namespace directory
    assert!(dir.path().join("serein").join("userProfile.json").exists());
}

#[test]
fn test_save_replaces_previous_value() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(StoreKey::History, "[]").unwrap();
    store.save(StoreKey::History, "[{\"id\":1}]").unwrap();
    assert_eq!(
        store.load(StoreKey::History).unwrap().as_deref(),
        Some("[{\"id\":1}]")
    );
}

#[test]
fn test_clear_removes_every_record() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store.save(StoreKey::Profile, "{}").unwrap();
    store.save(StoreKey::History, "[]").unwrap();

    store.clear().unwrap();

    for key in StoreKey::ALL {
        assert!(store.load(key).unwrap().is_none());
    }
    // clearing an already-empty store is a no-op, not an error
    store.clear().unwrap();
}

#[test]
fn test_snapshot_recovers_valid_records() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store
        .save(
            StoreKey::Profile,
            &serde_json::to_string(&marie()).unwrap(),
        )
        .unwrap();

    let snapshot = load_snapshot(&mut store).unwrap();
    assert_eq!(snapshot.profile.unwrap().name, "Marie");
    assert!(snapshot.program.is_none());
    assert!(snapshot.history.is_empty());
}

#[test]
fn test_corruption_under_any_key_clears_all_three() {
    for corrupt_key in StoreKey::ALL {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);
        store
            .save(
                StoreKey::Profile,
                &serde_json::to_string(&marie()).unwrap(),
            )
            .unwrap();
        store.save(StoreKey::History, "[]").unwrap();
        store.save(corrupt_key, "]{ definitely not json").unwrap();

        let snapshot = load_snapshot(&mut store).unwrap();

        assert!(snapshot.profile.is_none(), "key {corrupt_key:?}");
        assert!(snapshot.program.is_none(), "key {corrupt_key:?}");
        assert!(snapshot.history.is_empty(), "key {corrupt_key:?}");
        for key in StoreKey::ALL {
            assert!(store.load(key).unwrap().is_none(), "key {corrupt_key:?}");
        }
    }
}

#[test]
fn test_structurally_mismatched_record_is_treated_as_corruption() {
    // valid JSON, wrong shape: caught by typed parsing, not a raw JSON error
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    store
        .save(StoreKey::Profile, "{\"totally\": \"unrelated\"}")
        .unwrap();

    let snapshot = load_snapshot(&mut store).unwrap();
    assert!(snapshot.profile.is_none());
    assert!(store.load(StoreKey::Profile).unwrap().is_none());
}

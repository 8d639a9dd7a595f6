// ABOUTME: Persistent store abstraction for profile, program, and history records
// ABOUTME: Pluggable backends plus the startup snapshot loader with corruption recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Persistent Store
//!
//! A namespaced key→JSON-string map behind the [`StoreProvider`] trait, so
//! the engine can run against a file-backed store in production and an
//! in-memory map in tests (or in embedders that bring their own
//! persistence).
//!
//! Three logical records exist: profile, program, history. They are read
//! once at startup through [`load_snapshot`] and written immediately after
//! each mutation, with no batching, no debounce, and no transactional
//! grouping across keys. A parse failure on any record at startup is
//! treated as "no data" and clears the entire namespace rather than
//! attempting partial recovery.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use tracing::warn;

use crate::errors::AppResult;
use crate::models::{UserProfile, WeeklyProgram};
use crate::tracker::HistoryLog;

/// The three persisted record keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The user's [`UserProfile`]
    Profile,
    /// The generated [`WeeklyProgram`]
    Program,
    /// The completed-session [`HistoryLog`]
    History,
}

impl StoreKey {
    /// All keys, in load order
    pub const ALL: [Self; 3] = [Self::Profile, Self::Program, Self::History];

    /// Record name within the store namespace.
    ///
    /// These names are part of the persisted format; renaming one orphans
    /// previously saved data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Profile => "userProfile",
            Self::Program => "userProgram",
            Self::History => "sessionHistory",
        }
    }
}

/// Key→JSON-string map contract.
///
/// Implementations need no locking: all mutation is single-threaded by
/// design. Nothing prevents a second process from interleaving writes;
/// that is an accepted limitation.
pub trait StoreProvider: Send {
    /// Read the raw JSON string stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be read. A missing
    /// record is `Ok(None)`, not an error.
    fn load(&self, key: StoreKey) -> AppResult<Option<String>>;

    /// Write the raw JSON string for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be written.
    fn save(&mut self, key: StoreKey, value: &str) -> AppResult<()>;

    /// Remove all namespaced records.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend cannot be cleared.
    fn clear(&mut self) -> AppResult<()>;
}

/// Everything recovered from the store at startup
#[derive(Debug, Default)]
pub struct StoreSnapshot {
    /// Persisted profile, if one was saved and parsed
    pub profile: Option<UserProfile>,
    /// Persisted program, if one was saved and parsed
    pub program: Option<WeeklyProgram>,
    /// Persisted history; empty when absent
    pub history: HistoryLog,
}

/// Read all three records, treating any parse failure as store corruption:
/// the whole namespace is cleared and an empty snapshot returned, so a
/// corrupt record can never leave profile and program inconsistent.
///
/// # Errors
///
/// Returns a `StorageError` only for backend I/O failures; corruption is
/// recovered, not surfaced.
pub fn load_snapshot(store: &mut dyn StoreProvider) -> AppResult<StoreSnapshot> {
    let raw_profile = store.load(StoreKey::Profile)?;
    let raw_program = store.load(StoreKey::Program)?;
    let raw_history = store.load(StoreKey::History)?;

    let parsed: Result<StoreSnapshot, serde_json::Error> = (|| {
        Ok(StoreSnapshot {
            profile: raw_profile.as_deref().map(serde_json::from_str).transpose()?,
            program: raw_program.as_deref().map(serde_json::from_str).transpose()?,
            history: raw_history
                .as_deref()
                .map(serde_json::from_str)
                .transpose()?
                .unwrap_or_default(),
        })
    })();

    match parsed {
        Ok(snapshot) => Ok(snapshot),
        Err(parse_error) => {
            warn!(error = %parse_error, "Stored record failed to parse; clearing store");
            store.clear()?;
            Ok(StoreSnapshot::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names_are_stable() {
        assert_eq!(StoreKey::Profile.as_str(), "userProfile");
        assert_eq!(StoreKey::Program.as_str(), "userProgram");
        assert_eq!(StoreKey::History.as_str(), "sessionHistory");
    }

    #[test]
    fn test_empty_store_yields_default_snapshot() {
        let mut store = MemoryStore::new();
        let snapshot = load_snapshot(&mut store).unwrap();
        assert!(snapshot.profile.is_none());
        assert!(snapshot.program.is_none());
        assert!(snapshot.history.is_empty());
    }

    #[test]
    fn test_one_corrupt_record_clears_every_key() {
        let mut store = MemoryStore::new();
        store
            .save(StoreKey::Profile, "{\"not\": \"a profile\"")
            .unwrap();
        store.save(StoreKey::History, "[]").unwrap();

        let snapshot = load_snapshot(&mut store).unwrap();
        assert!(snapshot.profile.is_none());
        assert!(snapshot.history.is_empty());
        // history was valid but the corrupt profile wiped the namespace
        assert!(store.load(StoreKey::History).unwrap().is_none());
    }
}

// ABOUTME: In-memory store backend used by tests and embedders
// ABOUTME: Plain HashMap with no persistence across process restarts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! In-memory [`StoreProvider`] backend. Substitutes for the file store in
//! tests and in embedding applications that persist elsewhere.

use std::collections::HashMap;

use super::{StoreKey, StoreProvider};
use crate::errors::AppResult;

/// In-memory key→JSON map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<StoreKey, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StoreProvider for MemoryStore {
    fn load(&self, key: StoreKey) -> AppResult<Option<String>> {
        Ok(self.entries.get(&key).cloned())
    }

    fn save(&mut self, key: StoreKey, value: &str) -> AppResult<()> {
        self.entries.insert(key, value.to_owned());
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.entries.clear();
        Ok(())
    }
}

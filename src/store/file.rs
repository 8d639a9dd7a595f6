// ABOUTME: File-backed store with one JSON file per record key
// ABOUTME: Default production backend under the platform data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! File-backed [`StoreProvider`] backend: one JSON file per record inside
//! a namespace directory, synchronous writes after every mutation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{StoreKey, StoreProvider};
use crate::config::CoachConfig;
use crate::errors::{AppError, AppResult};

/// File-per-key store rooted at a namespace directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> AppResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::storage(format!("cannot create store directory {}: {e}", dir.display()))
                .with_source(e)
        })?;
        Ok(Self { dir })
    }

    /// Create a store at the configured data directory
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the directory cannot be created.
    pub fn from_config(config: &CoachConfig) -> AppResult<Self> {
        Self::new(config.data_dir.clone())
    }

    /// Directory this store writes into
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

impl StoreProvider for FileStore {
    fn load(&self, key: StoreKey) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!(
                "cannot read record {}: {e}",
                key.as_str()
            ))
            .with_source(e)),
        }
    }

    fn save(&mut self, key: StoreKey, value: &str) -> AppResult<()> {
        fs::write(self.path(key), value).map_err(|e| {
            AppError::storage(format!("cannot write record {}: {e}", key.as_str())).with_source(e)
        })
    }

    fn clear(&mut self) -> AppResult<()> {
        for key in StoreKey::ALL {
            match fs::remove_file(self.path(key)) {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(AppError::storage(format!(
                        "cannot remove record {}: {e}",
                        key.as_str()
                    ))
                    .with_source(e))
                }
            }
        }
        Ok(())
    }
}

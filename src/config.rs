// ABOUTME: Environment-driven runtime configuration for the engine
// ABOUTME: Resolves model override and data directory with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Runtime Configuration
//!
//! Environment-only configuration, resolved once at startup. The Gemini API
//! key itself is read by the provider (`GEMINI_API_KEY`); deployment of
//! credentials is the embedding application's responsibility.

use std::env;
use std::path::PathBuf;

use crate::constants::{env_vars, STORE_NAMESPACE};

/// Runtime configuration for the engine
#[derive(Debug, Clone)]
pub struct CoachConfig {
    /// Generation model override (`SEREIN_MODEL`); `None` uses the
    /// provider's default
    pub model: Option<String>,
    /// Directory for the file-backed store (`SEREIN_DATA_DIR`)
    pub data_dir: PathBuf,
}

impl CoachConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let model = env::var(env_vars::MODEL).ok().filter(|m| !m.is_empty());
        let data_dir = env::var(env_vars::DATA_DIR)
            .ok()
            .filter(|d| !d.is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        Self { model, data_dir }
    }
}

impl Default for CoachConfig {
    fn default() -> Self {
        Self {
            model: None,
            data_dir: default_data_dir(),
        }
    }
}

/// Platform data directory for the store namespace, falling back to a
/// hidden directory under the working directory when the platform dir is
/// unavailable (e.g. stripped-down containers)
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().map_or_else(
        || PathBuf::from(format!(".{STORE_NAMESPACE}")),
        |dir| dir.join(STORE_NAMESPACE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var(env_vars::MODEL);
        std::env::remove_var(env_vars::DATA_DIR);
        let config = CoachConfig::from_env();
        assert!(config.model.is_none());
        assert!(config.data_dir.ends_with(STORE_NAMESPACE) || config
            .data_dir
            .ends_with(format!(".{STORE_NAMESPACE}")));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        std::env::set_var(env_vars::MODEL, "gemini-1.5-pro");
        std::env::set_var(env_vars::DATA_DIR, "/tmp/serein-test");
        let config = CoachConfig::from_env();
        assert_eq!(config.model.as_deref(), Some("gemini-1.5-pro"));
        assert_eq!(config.data_dir, PathBuf::from("/tmp/serein-test"));
        std::env::remove_var(env_vars::MODEL);
        std::env::remove_var(env_vars::DATA_DIR);
    }
}

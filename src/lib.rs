// ABOUTME: Main library entry point for the Serein wellness planning engine
// ABOUTME: Profile intake, Gemini program generation, local persistence, tracking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

#![deny(unsafe_code)]

//! # Serein
//!
//! The engine behind a wellness-planning application for elderly users: it
//! collects a health/mobility/preferences profile, asks Google Gemini for
//! a personalized 7-day activity program constrained by a strict JSON
//! schema, and tracks completion, all persisted client-side through an
//! injected store.
//!
//! ## Features
//!
//! - **Profile builder**: 5-step wizard state machine with step gating
//! - **Program generation**: one structured-output Gemini call, validated
//!   into a typed [`models::WeeklyProgram`], fresh activity ids assigned
//!   client-side
//! - **Activity editing**: in-place edits and AI replacement suggestions
//!   that preserve activity identity
//! - **Completion tracking**: append-only history with completed-today
//!   queries on the local calendar date
//! - **Pluggable persistence**: file-backed store in production, in-memory
//!   store for tests and custom embedders
//!
//! ## Architecture
//!
//! The view layer is an external collaborator: it renders
//! [`app::AppState`] and calls the command methods on [`app::CoachApp`];
//! nothing in this crate draws anything.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serein::app::CoachApp;
//! use serein::config::CoachConfig;
//! use serein::llm::GeminiProvider;
//! use serein::plan::ProgramGenerator;
//! use serein::store::FileStore;
//!
//! # async fn example() -> serein::errors::AppResult<()> {
//! let config = CoachConfig::from_env();
//! let store = FileStore::from_config(&config)?;
//! let provider = GeminiProvider::from_env()?;
//! let mut app = CoachApp::new(store, ProgramGenerator::new(provider));
//!
//! app.startup()?;
//! # Ok(())
//! # }
//! ```

/// Application state machine and command methods
pub mod app;

/// Environment-driven runtime configuration
pub mod config;

/// Application constants: week labels, choice lists, env var names
pub mod constants;

/// Unified error handling with user-facing message mapping
pub mod errors;

/// LLM provider abstraction and the Gemini implementation
pub mod llm;

/// Structured logging setup
pub mod logging;

/// Core data models
pub mod models;

/// Onboarding profile builder state machine
pub mod onboarding;

/// Program generation pipeline: prompts, schemas, generator
pub mod plan;

/// Persistent store abstraction and backends
pub mod store;

/// Completion history tracking
pub mod tracker;

// ABOUTME: Program generation pipeline: prompts, response schemas, generator
// ABOUTME: Turns a UserProfile into a validated WeeklyProgram via the LLM boundary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Generation Pipeline
//!
//! Everything between a completed [`crate::models::UserProfile`] and a
//! validated [`crate::models::WeeklyProgram`]:
//!
//! - [`prompts`]: the French natural-language instructions embedding the
//!   profile
//! - [`schema`]: the JSON response schemas sent to the service, and the
//!   typed post-receipt validation of what comes back
//! - [`generator`]: the [`generator::ProgramGenerator`] orchestrating one
//!   call per user action, with no retry

pub mod generator;
pub mod prompts;
pub mod schema;

pub use generator::ProgramGenerator;
pub use schema::SchemaViolation;

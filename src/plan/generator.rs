// ABOUTME: Program generator orchestrating the two AI calls of the engine
// ABOUTME: Single attempt per user action; assigns fresh activity ids on success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Program Generator
//!
//! Thin orchestration over the [`TextGenerator`] boundary: build prompt and
//! schema, issue exactly one call, validate the response into the typed
//! model. There is no retry and no repair; a failed call surfaces as a
//! `GenerationFailed`/`ReplacementFailed` whose user message the view
//! renders, while the raw cause goes to the logs.

use tracing::{error, info, instrument};
use uuid::Uuid;

use super::{prompts, schema};
use crate::errors::{AppError, AppResult};
use crate::llm::{GenerationRequest, TextGenerator};
use crate::models::{Activity, ActivityDraft, SessionType, UserProfile, WeeklyProgram};

/// Orchestrates weekly program generation and activity replacement
#[derive(Debug)]
pub struct ProgramGenerator<G> {
    generator: G,
    model: Option<String>,
}

impl<G: TextGenerator> ProgramGenerator<G> {
    /// Wrap a text generation provider
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            model: None,
        }
    }

    /// Use a specific model for both call kinds
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// The wrapped provider
    pub const fn provider(&self) -> &G {
        &self.generator
    }

    fn request(&self, prompt: String, response_schema: serde_json::Value) -> GenerationRequest {
        let request = GenerationRequest::new(prompt, response_schema);
        match &self.model {
            Some(model) => request.with_model(model.clone()),
            None => request,
        }
    }

    /// Generate a weekly program for a validated profile.
    ///
    /// Every activity in the result carries a fresh unique id assigned
    /// here; the service itself never supplies ids.
    ///
    /// # Errors
    ///
    /// Returns the profile's validation error unchanged, or a
    /// `GenerationFailed` wrapping any service or schema failure.
    #[instrument(skip(self, profile), fields(provider = self.generator.name()))]
    pub async fn generate_program(&self, profile: &UserProfile) -> AppResult<WeeklyProgram> {
        profile.validate()?;

        let request = self.request(prompts::weekly_program(profile), schema::program_response());

        let raw = self
            .generator
            .generate_json(&request)
            .await
            .map_err(|e| {
                error!(error = %e, "Program generation call failed");
                AppError::generation("AI call failed").with_source(e)
            })?;

        let mut program = schema::parse_program(&raw).map_err(|violation| {
            error!(error = %violation, "Program response failed validation");
            AppError::generation(violation.to_string()).with_source(violation)
        })?;

        assign_fresh_ids(&mut program);

        info!(
            active_days = program.active_day_count(),
            "Weekly program generated"
        );

        Ok(program)
    }

    /// Generate one substitute activity draft for the edit flow.
    ///
    /// The caller re-attaches the original activity's id when committing;
    /// on failure the original activity is untouched by construction since
    /// nothing is mutated here.
    ///
    /// # Errors
    ///
    /// Returns a `ReplacementFailed` wrapping any service or schema
    /// failure.
    #[instrument(skip(self, profile, activity), fields(provider = self.generator.name()))]
    pub async fn replacement_activity(
        &self,
        profile: &UserProfile,
        activity: &Activity,
        session_type: SessionType,
    ) -> AppResult<ActivityDraft> {
        let request = self.request(
            prompts::replacement_activity(profile, activity, session_type),
            schema::replacement_response(),
        );

        let raw = self
            .generator
            .generate_json(&request)
            .await
            .map_err(|e| {
                error!(error = %e, "Replacement call failed");
                AppError::replacement("AI call failed").with_source(e)
            })?;

        schema::parse_replacement(&raw).map_err(|violation| {
            error!(error = %violation, "Replacement response failed validation");
            AppError::replacement(violation.to_string()).with_source(violation)
        })
    }
}

/// Assign a fresh UUID to every activity in the program
fn assign_fresh_ids(program: &mut WeeklyProgram) {
    for plan in &mut program.weekly_schedule {
        if let Some(session) = &mut plan.session {
            for activity in &mut session.activities {
                activity.id = Uuid::new_v4().to_string();
            }
        }
    }
}

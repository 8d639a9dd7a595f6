// ABOUTME: Application state machine orchestrating store, generator, and tracker
// ABOUTME: Command methods for profile submission, edits, completions, and reset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Application State Machine
//!
//! [`CoachApp`] owns the in-memory profile, program, and history, decides
//! which top-level state the view should render, and writes every accepted
//! mutation straight through to the injected store. Commands are explicit
//! methods returning results; no rendering concern leaks in.
//!
//! ## States and transitions
//!
//! - `Loading → Onboarding | Dashboard` at [`CoachApp::startup`], based on
//!   whether a valid profile+program pair was recovered
//! - `Onboarding → Loading → Dashboard | Error` at
//!   [`CoachApp::submit_profile`]
//! - `Error → Dashboard | Onboarding` at [`CoachApp::acknowledge_error`]
//! - `Dashboard → Dashboard` for activity edits and session completions
//! - any state `→ Onboarding` at [`CoachApp::reset`]
//!
//! All operations run to completion on one logical thread; the only
//! suspension points are the two AI calls, and every command that can
//! issue one takes `&mut self`, so at most one request is in flight per
//! `CoachApp` value. A caller that navigates away simply drops the future;
//! no cancellation signal is sent upstream.

use chrono::{Datelike, Local};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::llm::TextGenerator;
use crate::models::{
    Activity, ActivityDraft, DailyPlan, HistoryItem, SessionType, UserProfile, WeeklyProgram,
};
use crate::plan::ProgramGenerator;
use crate::store::{self, StoreKey, StoreProvider};
use crate::tracker::HistoryLog;

/// Top-level state the view layer renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    /// Startup or generation in progress
    Loading,
    /// No profile/program present; show the profile builder
    Onboarding,
    /// A user-facing error message to acknowledge
    Error {
        /// Message for the user, already localized
        message: String,
    },
    /// Profile and program available
    Dashboard,
}

/// Application state machine over an injected store and generator
#[derive(Debug)]
pub struct CoachApp<S, G> {
    store: S,
    generator: ProgramGenerator<G>,
    state: AppState,
    profile: Option<UserProfile>,
    program: Option<WeeklyProgram>,
    history: HistoryLog,
}

impl<S: StoreProvider, G: TextGenerator> CoachApp<S, G> {
    /// Create an app in the `Loading` state; call [`Self::startup`] next
    pub fn new(store: S, generator: ProgramGenerator<G>) -> Self {
        Self {
            store,
            generator,
            state: AppState::Loading,
            profile: None,
            program: None,
            history: HistoryLog::new(),
        }
    }

    /// Current top-level state
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The profile, when one is installed
    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// The program, when one is installed
    #[must_use]
    pub const fn program(&self) -> Option<&WeeklyProgram> {
        self.program.as_ref()
    }

    /// Completed-session history
    #[must_use]
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The generation pipeline in use
    #[must_use]
    pub const fn generator(&self) -> &ProgramGenerator<G> {
        &self.generator
    }

    /// Decompose into the injected store and generator, discarding
    /// in-memory state. Mainly useful to inspect persistence in tests or
    /// to hand the store to a fresh instance.
    #[must_use]
    pub fn into_parts(self) -> (S, ProgramGenerator<G>) {
        (self.store, self.generator)
    }

    /// Recover persisted state and leave `Loading`.
    ///
    /// A corrupt record clears the whole store (handled inside the
    /// snapshot loader) and lands in `Onboarding`, equivalent to a first
    /// run.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the backend itself cannot be read.
    pub fn startup(&mut self) -> AppResult<&AppState> {
        let snapshot = store::load_snapshot(&mut self.store)?;
        self.profile = snapshot.profile;
        self.program = snapshot.program;
        self.history = snapshot.history;

        self.state = if self.profile.is_some() && self.program.is_some() {
            AppState::Dashboard
        } else {
            AppState::Onboarding
        };
        info!(state = ?self.state, "Startup complete");
        Ok(&self.state)
    }

    /// Submit a completed profile and generate its program.
    ///
    /// On success the profile, the program, and an empty history are
    /// installed and persisted together. On failure the state becomes
    /// `Error` and nothing is persisted: a first-time user returns to
    /// onboarding on acknowledgement, while an existing profile/program
    /// pair (regeneration) is left untouched in memory and in the store.
    ///
    /// # Errors
    ///
    /// Returns the generation or persistence failure after recording it in
    /// the state.
    pub async fn submit_profile(&mut self, profile: UserProfile) -> AppResult<()> {
        self.state = AppState::Loading;

        match self.generator.generate_program(&profile).await {
            Ok(program) => {
                self.profile = Some(profile);
                self.program = Some(program);
                self.history = HistoryLog::new();
                if let Err(persist_error) = self.persist_all() {
                    self.state = AppState::Error {
                        message: persist_error.user_message().to_owned(),
                    };
                    return Err(persist_error);
                }
                self.state = AppState::Dashboard;
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "Profile submission failed");
                self.state = AppState::Error {
                    message: error.user_message().to_owned(),
                };
                Err(error)
            }
        }
    }

    /// Leave the `Error` state: back to the dashboard when a
    /// profile/program pair exists, otherwise back to onboarding.
    pub fn acknowledge_error(&mut self) -> &AppState {
        if matches!(self.state, AppState::Error { .. }) {
            self.state = if self.profile.is_some() && self.program.is_some() {
                AppState::Dashboard
            } else {
                AppState::Onboarding
            };
        }
        &self.state
    }

    /// Record a session completion and persist the history.
    ///
    /// Appends unconditionally; the view keeps the action disabled once
    /// [`Self::is_completed_today`] reports true.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when no program is active, or a persistence
    /// failure.
    pub fn complete_session(&mut self, session_title: &str) -> AppResult<HistoryItem> {
        if self.program.is_none() {
            return Err(AppError::invalid_input(
                "cannot complete a session without an active program",
            ));
        }
        let item = self.history.record_now(session_title);
        self.persist_history()?;
        Ok(item)
    }

    /// Whether `session_title` was completed on the current local date
    #[must_use]
    pub fn is_completed_today(&self, session_title: &str) -> bool {
        self.history.is_completed_today(session_title)
    }

    /// Replace every field of one activity except its id, and persist the
    /// program. All other activities and days are untouched.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day or activity id,
    /// `InvalidInput` when no program is active, or a persistence failure.
    pub fn update_activity(
        &mut self,
        day: &str,
        activity_id: &str,
        draft: ActivityDraft,
    ) -> AppResult<()> {
        let program = self
            .program
            .as_mut()
            .ok_or_else(|| AppError::invalid_input("no active program"))?;

        let session = program
            .plan_for_day_mut(day)
            .ok_or_else(|| AppError::not_found(format!("day '{day}'")))?
            .session
            .as_mut()
            .ok_or_else(|| AppError::not_found(format!("session on '{day}'")))?;

        let activity = session
            .activities
            .iter_mut()
            .find(|activity| activity.id == activity_id)
            .ok_or_else(|| AppError::not_found(format!("activity '{activity_id}'")))?;

        *activity = Activity::from_draft(activity_id, draft);

        self.persist_program()
    }

    /// Ask the AI for a substitute for one activity, returning a draft for
    /// the caller's edit flow. The program is not touched; committing the
    /// draft through [`Self::update_activity`] re-attaches the original
    /// id.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown day or activity id,
    /// `InvalidInput` when no profile/program is active, or the
    /// replacement failure itself.
    // Exclusive borrow keeps replacement requests single-flight.
    #[allow(clippy::needless_pass_by_ref_mut)]
    pub async fn suggest_replacement(
        &mut self,
        day: &str,
        activity_id: &str,
    ) -> AppResult<ActivityDraft> {
        let profile = self
            .profile
            .clone()
            .ok_or_else(|| AppError::invalid_input("no active profile"))?;
        let (activity, session_type) = self.find_activity(day, activity_id)?;

        self.generator
            .replacement_activity(&profile, &activity, session_type)
            .await
    }

    /// The plan for the current local weekday (Monday-first indexing;
    /// Sunday maps to the last entry)
    #[must_use]
    pub fn today_plan(&self) -> Option<&DailyPlan> {
        self.plan_for_weekday(Local::now().weekday())
    }

    /// The plan for an arbitrary weekday
    #[must_use]
    pub fn plan_for_weekday(&self, weekday: chrono::Weekday) -> Option<&DailyPlan> {
        self.program
            .as_ref()?
            .weekly_schedule
            .get(weekday.num_days_from_monday() as usize)
    }

    /// Destructive reset: clear the store and all in-memory state, landing
    /// in `Onboarding`. The caller is responsible for user confirmation.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the store cannot be cleared; in-memory
    /// state is wiped regardless so the session cannot keep stale data.
    pub fn reset(&mut self) -> AppResult<()> {
        let cleared = self.store.clear();
        self.profile = None;
        self.program = None;
        self.history = HistoryLog::new();
        self.state = AppState::Onboarding;
        info!("Application reset");
        cleared
    }

    // ── Internal helpers ────────────────────────────────────────────────

    fn find_activity(
        &self,
        day: &str,
        activity_id: &str,
    ) -> AppResult<(Activity, SessionType)> {
        let program = self
            .program
            .as_ref()
            .ok_or_else(|| AppError::invalid_input("no active program"))?;
        let session = program
            .plan_for_day(day)
            .ok_or_else(|| AppError::not_found(format!("day '{day}'")))?
            .session
            .as_ref()
            .ok_or_else(|| AppError::not_found(format!("session on '{day}'")))?;
        let activity = session
            .activities
            .iter()
            .find(|activity| activity.id == activity_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("activity '{activity_id}'")))?;
        Ok((activity, session.session_type))
    }

    fn persist_profile(&mut self) -> AppResult<()> {
        if let Some(profile) = &self.profile {
            let json = serde_json::to_string(profile)?;
            self.store.save(StoreKey::Profile, &json)?;
        }
        Ok(())
    }

    fn persist_program(&mut self) -> AppResult<()> {
        if let Some(program) = &self.program {
            let json = serde_json::to_string(program)?;
            self.store.save(StoreKey::Program, &json)?;
        }
        Ok(())
    }

    fn persist_history(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.history)?;
        self.store.save(StoreKey::History, &json)
    }

    fn persist_all(&mut self) -> AppResult<()> {
        self.persist_profile()?;
        self.persist_program()?;
        self.persist_history()
    }
}

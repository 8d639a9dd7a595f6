// ABOUTME: Core data models for the Serein wellness planning engine
// ABOUTME: Defines UserProfile, Activity, Session, WeeklyProgram and HistoryItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Data Models
//!
//! Core data structures shared by the generation pipeline, the persistent
//! store, and the application state machine.
//!
//! ## Design Principles
//!
//! - **Wire compatible**: every structure serializes to the camelCase JSON
//!   the store and the AI response schema use
//! - **Typed at the boundary**: AI responses deserialize into these types
//!   and are validated before use, never consumed as raw JSON
//! - **Stable identity**: an [`Activity`] id is assigned once, client-side,
//!   and survives edits and AI replacements
//!
//! ## Core Models
//!
//! - [`UserProfile`]: health/mobility/preference intake
//! - [`WeeklyProgram`]: the generated 7-day schedule
//! - [`Session`] / [`Activity`]: a typed bundle of instructions on an
//!   active day
//! - [`HistoryItem`]: one completed-session record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::errors::{AppError, AppResult};

/// Health, mobility, and preference profile collected once during onboarding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// First name, shown in the UI and embedded in prompts
    pub name: String,
    /// Age in years, must be positive
    pub age: u32,
    /// Mobility level, one of [`crate::constants::choices::MOBILITY_LEVELS`]
    pub mobility: String,
    /// Health conditions; extensible with free text beyond the fixed list
    pub disabilities: Vec<String>,
    /// Relevant past surgeries, free text, may be empty
    pub surgeries: String,
    /// Wellness goals
    pub goals: Vec<String>,
    /// Available home equipment
    pub equipment: Vec<String>,
    /// Preferred leisure activities
    pub hobbies: Vec<String>,
}

impl UserProfile {
    /// Check the acceptance invariant: non-empty trimmed name, positive age.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for an empty name and `InvalidInput`
    /// for a zero age.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::missing_field("name"));
        }
        if self.age == 0 {
            return Err(AppError::invalid_input("age must be positive"));
        }
        Ok(())
    }
}

/// Kind of a scheduled session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    /// Physical exercise session
    #[serde(rename = "physique")]
    Physical,
    /// Leisure/cognitive session drawn from the user's hobbies
    #[serde(rename = "ludique")]
    Leisure,
}

impl SessionType {
    /// Wire string used by the AI schema and persisted records
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Physical => "physique",
            Self::Leisure => "ludique",
        }
    }
}

impl Display for SessionType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// A single exercise or pastime instruction within a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Opaque unique token, generated client-side at program creation and
    /// immutable afterwards
    pub id: String,
    /// Activity name
    pub name: String,
    /// Clear, detailed instructions, including safety advice for exercises
    pub description: String,
    /// Duration, e.g. "15 minutes"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Repetitions, e.g. "10-12 répétitions"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Sets, e.g. "3 séries"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    /// Suggested video search phrase for a demonstration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_search_query: Option<String>,
}

impl Activity {
    /// Attach an id to a draft, producing a full activity.
    ///
    /// Used both when fresh ids are assigned after generation and when an
    /// edit or AI replacement is committed over an existing id.
    #[must_use]
    pub fn from_draft(id: impl Into<String>, draft: ActivityDraft) -> Self {
        Self {
            id: id.into(),
            name: draft.name,
            description: draft.description,
            duration: draft.duration,
            reps: draft.reps,
            sets: draft.sets,
            video_search_query: draft.video_search_query,
        }
    }

    /// The id-less payload of this activity, as sent to the AI replacer
    #[must_use]
    pub fn draft(&self) -> ActivityDraft {
        ActivityDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            duration: self.duration.clone(),
            reps: self.reps.clone(),
            sets: self.sets.clone(),
            video_search_query: self.video_search_query.clone(),
        }
    }
}

/// An [`Activity`] minus its id: the payload of an edit or an AI
/// replacement suggestion. Committing a draft re-attaches the original id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDraft {
    /// Activity name
    pub name: String,
    /// Instructions
    pub description: String,
    /// Duration, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// Repetitions, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<String>,
    /// Sets, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sets: Option<String>,
    /// Video search phrase, optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_search_query: Option<String>,
}

/// A named, typed bundle of activities scheduled on an active day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Session kind
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Short motivating title; also the denormalized key history items
    /// match against
    pub title: String,
    /// Brief description of the session's objective
    pub description: String,
    /// Ordered activities
    pub activities: Vec<Activity>,
}

/// One day of the week paired with an optional session (absent = rest day)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    /// Day label, one of [`crate::constants::WEEK_DAYS`]
    pub day: String,
    /// Scheduled session, `None` on rest days
    pub session: Option<Session>,
}

/// The generated 7-day activity schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProgram {
    /// Ordered schedule, exactly 7 entries, Monday first
    pub weekly_schedule: Vec<DailyPlan>,
    /// Motivational message for the week
    pub motivational_message: String,
}

impl WeeklyProgram {
    /// Look up the plan for a day label, case-insensitively
    #[must_use]
    pub fn plan_for_day(&self, day: &str) -> Option<&DailyPlan> {
        self.weekly_schedule
            .iter()
            .find(|plan| plan.day.eq_ignore_ascii_case(day))
    }

    /// Mutable day lookup, used by activity edits
    pub fn plan_for_day_mut(&mut self, day: &str) -> Option<&mut DailyPlan> {
        self.weekly_schedule
            .iter_mut()
            .find(|plan| plan.day.eq_ignore_ascii_case(day))
    }

    /// Number of session-bearing days in the schedule
    #[must_use]
    pub fn active_day_count(&self) -> usize {
        self.weekly_schedule
            .iter()
            .filter(|plan| plan.session.is_some())
            .count()
    }
}

/// One completed-session record.
///
/// `session_title` is a denormalized copy, not a foreign key: completion
/// queries match by title plus calendar date, never by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    /// Timestamp-derived id (epoch milliseconds), monotonically increasing
    pub id: i64,
    /// Completion timestamp
    pub date: DateTime<Utc>,
    /// Title of the completed session
    pub session_title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Marie".into(),
            age: 72,
            mobility: "Marche avec aide".into(),
            disabilities: vec!["Arthrose".into()],
            surgeries: String::new(),
            goals: vec!["Améliorer l'équilibre".into()],
            equipment: vec![],
            hobbies: vec!["Lecture".into()],
        }
    }

    #[test]
    fn test_profile_validation() {
        assert!(sample_profile().validate().is_ok());

        let mut unnamed = sample_profile();
        unnamed.name = "   ".into();
        assert!(unnamed.validate().is_err());

        let mut unborn = sample_profile();
        unborn.age = 0;
        assert!(unborn.validate().is_err());
    }

    #[test]
    fn test_session_type_wire_format() {
        let json = serde_json::to_string(&SessionType::Physical).unwrap();
        assert_eq!(json, "\"physique\"");
        let parsed: SessionType = serde_json::from_str("\"ludique\"").unwrap();
        assert_eq!(parsed, SessionType::Leisure);
    }

    #[test]
    fn test_activity_camel_case_and_optional_fields() {
        let activity = Activity {
            id: "a-1".into(),
            name: "Marche douce".into(),
            description: "Marcher 15 minutes à votre rythme.".into(),
            duration: Some("15 minutes".into()),
            reps: None,
            sets: None,
            video_search_query: Some("marche douce seniors".into()),
        };
        let json = serde_json::to_string(&activity).unwrap();
        assert!(json.contains("\"videoSearchQuery\""));
        assert!(!json.contains("\"reps\""));

        let back: Activity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, activity);
    }

    #[test]
    fn test_draft_round_trip_preserves_everything_but_id() {
        let activity = Activity {
            id: "keep-me".into(),
            name: "Sudoku".into(),
            description: "Une grille facile.".into(),
            duration: Some("20 minutes".into()),
            reps: None,
            sets: None,
            video_search_query: None,
        };
        let rebuilt = Activity::from_draft("keep-me", activity.draft());
        assert_eq!(rebuilt, activity);
    }

    #[test]
    fn test_program_wire_format_matches_store_records() {
        let raw = r#"{
            "weeklySchedule": [
                {"day": "Lundi", "session": {
                    "type": "physique",
                    "title": "Étirements doux",
                    "description": "Réveil du corps en douceur.",
                    "activities": [
                        {"id": "x", "name": "Étirement des bras",
                         "description": "Levez les bras lentement.", "reps": "10 répétitions"}
                    ]
                }},
                {"day": "Mardi", "session": null}
            ],
            "motivationalMessage": "Bonne semaine !"
        }"#;
        let program: WeeklyProgram = serde_json::from_str(raw).unwrap();
        assert_eq!(program.active_day_count(), 1);
        assert_eq!(
            program.plan_for_day("lundi").and_then(|p| p.session.as_ref()).map(|s| s.session_type),
            Some(SessionType::Physical)
        );
        assert!(program.plan_for_day("Mardi").is_some_and(|p| p.session.is_none()));
    }
}

// ABOUTME: JSON response schemas for the AI service and typed post-receipt validation
// ABOUTME: Parse failures are enumerated SchemaViolation values, never silently repaired
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Response Schemas and Validation
//!
//! The request side declares what the service must produce
//! ([`program_response`], [`replacement_response`]); the receive side
//! re-checks it ([`parse_program`], [`parse_replacement`]) because a schema
//! sent to a generative service is a constraint, not a guarantee. Anything
//! that fails validation is an enumerated [`SchemaViolation`]; responses
//! are never repaired, truncated, or padded into shape.

use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::constants::WEEK_DAYS;
use crate::models::{Activity, ActivityDraft, DailyPlan, Session, SessionType, WeeklyProgram};

/// Reasons a service response can be rejected
#[derive(Debug, Error)]
pub enum SchemaViolation {
    /// Response text was not valid JSON for the expected shape
    #[error("malformed response: {0}")]
    MalformedJson(#[from] serde_json::Error),
    /// `weeklySchedule` did not contain exactly 7 entries
    #[error("weeklySchedule has {0} entries, expected 7")]
    WrongDayCount(usize),
    /// A day label was missing or out of the fixed Monday-first order
    #[error("day {position} is '{found}', expected '{expected}'")]
    DayOutOfOrder {
        /// Zero-based schedule position
        position: usize,
        /// Label the service produced
        found: String,
        /// Label required at that position
        expected: &'static str,
    },
    /// A required text field was empty
    #[error("empty {0} in response")]
    EmptyText(&'static str),
}

/// Schema for the weekly program response (provider wire format)
#[must_use]
pub fn program_response() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "motivationalMessage": {
                "type": "STRING",
                "description": "Un message de motivation court et positif pour la semaine."
            },
            "weeklySchedule": {
                "type": "ARRAY",
                "description": "Le programme d'activités pour les 7 jours de la semaine, commençant par Lundi.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": {
                            "type": "STRING",
                            "description": "Le jour de la semaine (ex: 'Lundi', 'Mardi')."
                        },
                        "session": {
                            "type": "OBJECT",
                            "nullable": true,
                            "description": "La session d'activité prévue pour ce jour. Null si c'est un jour de repos.",
                            "properties": {
                                "type": {
                                    "type": "STRING",
                                    "enum": ["physique", "ludique"],
                                    "description": "Le type de session: 'physique' ou 'ludique'."
                                },
                                "title": {
                                    "type": "STRING",
                                    "description": "Un titre court et motivant pour la session."
                                },
                                "description": {
                                    "type": "STRING",
                                    "description": "Une brève description de l'objectif de la session."
                                },
                                "activities": {
                                    "type": "ARRAY",
                                    "description": "La liste des activités ou exercices à faire.",
                                    "items": activity_schema()
                                }
                            },
                            "required": ["type", "title", "description", "activities"]
                        }
                    },
                    "required": ["day", "session"]
                }
            }
        },
        "required": ["motivationalMessage", "weeklySchedule"]
    })
}

/// Schema for a single replacement activity response
#[must_use]
pub fn replacement_response() -> Value {
    activity_schema()
}

/// Per-activity schema shared by both responses
fn activity_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "name": {
                "type": "STRING",
                "description": "Le nom de l'activité ou de l'exercice."
            },
            "description": {
                "type": "STRING",
                "description": "Les instructions claires et détaillées pour réaliser l'activité. Pour les exercices physiques, inclure des conseils de sécurité."
            },
            "duration": {
                "type": "STRING",
                "description": "La durée de l'activité (ex: '15 minutes'). Optionnel."
            },
            "reps": {
                "type": "STRING",
                "description": "Le nombre de répétitions. (ex: '10-12 répétitions'). Optionnel."
            },
            "sets": {
                "type": "STRING",
                "description": "Le nombre de séries. (ex: '3 séries'). Optionnel."
            },
            "videoSearchQuery": {
                "type": "STRING",
                "description": "Une phrase de recherche vidéo pour une démonstration. Optionnel."
            }
        },
        "required": ["name", "description"]
    })
}

/// Parse and validate a weekly program response.
///
/// Activities arrive without ids (the service never supplies them); the
/// caller assigns fresh ids after a successful parse.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] for malformed JSON, a schedule without
/// exactly 7 entries, or day labels out of the fixed Monday-first order.
pub fn parse_program(raw: &str) -> Result<WeeklyProgram, SchemaViolation> {
    // Ids are attached after parsing, so the wire shape (activities
    // without ids) is deserialized as drafts first.
    let wire: WireProgram = serde_json::from_str(raw)?;

    if wire.weekly_schedule.len() != WEEK_DAYS.len() {
        return Err(SchemaViolation::WrongDayCount(wire.weekly_schedule.len()));
    }
    for (position, (plan, expected)) in wire.weekly_schedule.iter().zip(WEEK_DAYS).enumerate() {
        if !plan.day.eq_ignore_ascii_case(expected) {
            return Err(SchemaViolation::DayOutOfOrder {
                position,
                found: plan.day.clone(),
                expected,
            });
        }
    }
    if wire.motivational_message.trim().is_empty() {
        return Err(SchemaViolation::EmptyText("motivationalMessage"));
    }
    for plan in &wire.weekly_schedule {
        if let Some(session) = &plan.session {
            if session.title.trim().is_empty() {
                return Err(SchemaViolation::EmptyText("session title"));
            }
            for activity in &session.activities {
                validate_draft(activity)?;
            }
        }
    }

    Ok(wire.into_program())
}

/// Parse and validate a replacement activity response.
///
/// # Errors
///
/// Returns a [`SchemaViolation`] for malformed JSON or empty required
/// fields.
pub fn parse_replacement(raw: &str) -> Result<ActivityDraft, SchemaViolation> {
    let draft: ActivityDraft = serde_json::from_str(raw)?;
    validate_draft(&draft)?;
    Ok(draft)
}

fn validate_draft(draft: &ActivityDraft) -> Result<(), SchemaViolation> {
    if draft.name.trim().is_empty() {
        return Err(SchemaViolation::EmptyText("activity name"));
    }
    if draft.description.trim().is_empty() {
        return Err(SchemaViolation::EmptyText("activity description"));
    }
    Ok(())
}

// ============================================================================
// Wire shapes (activities without ids)
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireProgram {
    weekly_schedule: Vec<WirePlan>,
    motivational_message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WirePlan {
    day: String,
    session: Option<WireSession>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireSession {
    #[serde(rename = "type")]
    session_type: SessionType,
    title: String,
    description: String,
    activities: Vec<ActivityDraft>,
}

impl WireProgram {
    /// Convert to the domain model with empty ids; the generator assigns
    /// fresh ids immediately afterwards.
    fn into_program(self) -> WeeklyProgram {
        WeeklyProgram {
            weekly_schedule: self
                .weekly_schedule
                .into_iter()
                .map(|plan| DailyPlan {
                    day: plan.day,
                    session: plan.session.map(|session| Session {
                        session_type: session.session_type,
                        title: session.title,
                        description: session.description,
                        activities: session
                            .activities
                            .into_iter()
                            .map(|draft| Activity::from_draft(String::new(), draft))
                            .collect(),
                    }),
                })
                .collect(),
            motivational_message: self.motivational_message,
        }
    }
}

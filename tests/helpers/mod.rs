// ABOUTME: Shared test helpers: mock text generator and domain fixtures
// ABOUTME: Canned-response TextGenerator plus sample profiles and program JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use serein::errors::{AppError, AppResult};
use serein::llm::{GenerationRequest, TextGenerator};
use serein::models::UserProfile;

/// Canned-response stand-in for the AI boundary.
///
/// Responses are consumed in order; every call is recorded so tests can
/// assert call counts and inspect prompts/schemas.
pub struct MockGenerator {
    responses: Mutex<VecDeque<AppResult<String>>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl MockGenerator {
    pub fn with_responses(responses: Vec<AppResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A generator that answers every call with the same JSON document
    pub fn replying(raw: impl Into<String>) -> Self {
        Self::with_responses(vec![Ok(raw.into())])
    }

    /// A generator whose single response is a service failure
    pub fn failing() -> Self {
        Self::with_responses(vec![Err(AppError::external_service(
            "mock",
            "simulated outage",
        ))])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Generator"
    }

    fn default_model(&self) -> &str {
        "mock-1"
    }

    async fn generate_json(&self, request: &GenerationRequest) -> AppResult<String> {
        self.calls.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AppError::internal("mock has no canned response left")))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

impl std::fmt::Debug for MockGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockGenerator").finish_non_exhaustive()
    }
}

/// The profile from the acceptance scenario
pub fn marie() -> UserProfile {
    UserProfile {
        name: "Marie".into(),
        age: 72,
        mobility: "Marche avec aide".into(),
        disabilities: vec!["Arthrose".into()],
        surgeries: String::new(),
        goals: vec!["Améliorer l'équilibre".into()],
        equipment: vec![],
        hobbies: vec!["Lecture".into(), "Jeux de cartes".into()],
    }
}

fn activity(name: &str, description: &str) -> serde_json::Value {
    json!({"name": name, "description": description, "duration": "15 minutes"})
}

fn rest_day(day: &str) -> serde_json::Value {
    json!({"day": day, "session": null})
}

fn active_day(day: &str, kind: &str, title: &str) -> serde_json::Value {
    json!({"day": day, "session": {
        "type": kind,
        "title": title,
        "description": "Objectif de la séance.",
        "activities": [
            activity("Première activité", "Instructions détaillées, en douceur."),
            activity("Seconde activité", "Autres instructions détaillées.")
        ]
    }})
}

/// A valid 7-day response: 3 active days alternating with rest, both
/// session types represented
pub fn valid_program_json() -> String {
    json!({
        "motivationalMessage": "Chaque petit pas compte, bravo de prendre soin de vous !",
        "weeklySchedule": [
            active_day("Lundi", "physique", "Étirements doux"),
            rest_day("Mardi"),
            active_day("Mercredi", "ludique", "Jeux de mémoire"),
            rest_day("Jeudi"),
            active_day("Vendredi", "physique", "Équilibre en douceur"),
            rest_day("Samedi"),
            rest_day("Dimanche")
        ]
    })
    .to_string()
}

/// An invalid response with only 5 scheduled days
pub fn five_day_program_json() -> String {
    json!({
        "motivationalMessage": "Semaine tronquée.",
        "weeklySchedule": [
            active_day("Lundi", "physique", "Étirements doux"),
            rest_day("Mardi"),
            active_day("Mercredi", "ludique", "Jeux de mémoire"),
            rest_day("Jeudi"),
            active_day("Vendredi", "physique", "Équilibre en douceur")
        ]
    })
    .to_string()
}

/// A valid replacement activity draft response
pub fn replacement_json() -> String {
    json!({
        "name": "Étirement assis",
        "description": "Assis sur une chaise stable, étirez lentement les bras vers le plafond.",
        "duration": "10 minutes",
        "videoSearchQuery": "étirement assis seniors"
    })
    .to_string()
}

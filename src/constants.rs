// ABOUTME: Application constants shared across modules
// ABOUTME: Week labels, onboarding choice lists, store namespace, and env var names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Application Constants
//!
//! Central place for values referenced from more than one module: the fixed
//! Monday-first week, the onboarding choice lists shown by the view layer,
//! store namespacing, and environment variable names.

/// Namespace for persisted records and the default data directory name
pub const STORE_NAMESPACE: &str = "serein";

/// The seven day labels of a weekly program, Monday first.
///
/// Program schedules are always exactly this sequence; generation responses
/// are validated against it.
pub const WEEK_DAYS: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];

/// Number of steps in the onboarding wizard
pub const ONBOARDING_STEPS: u8 = 5;

/// Default age pre-filled in the onboarding wizard
pub const DEFAULT_ONBOARDING_AGE: u32 = 65;

/// Environment variable names
pub mod env_vars {
    /// Google AI Studio API key (read by the Gemini provider)
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Override for the generation model
    pub const MODEL: &str = "SEREIN_MODEL";
    /// Override for the file store directory
    pub const DATA_DIR: &str = "SEREIN_DATA_DIR";
}

/// Fixed choice lists presented by the onboarding wizard.
///
/// Free-text entries can extend `disabilities` beyond `CONDITIONS`; the
/// other lists are closed sets in the UI but the data model does not
/// enforce membership.
pub mod choices {
    /// Mobility levels, from most to least mobile
    pub const MOBILITY_LEVELS: &[&str] = &[
        "Très mobile",
        "Marche avec aide",
        "Principalement sédentaire",
    ];

    /// Wellness goals
    pub const GOALS: &[&str] = &[
        "Gagner en souplesse",
        "Renforcer le cœur",
        "Améliorer l'équilibre",
        "Rester actif",
        "Stimulation mentale",
    ];

    /// Home equipment options
    pub const EQUIPMENT: &[&str] = &[
        "Vélo d'appartement",
        "Marcheur",
        "Bandes de résistance",
        "Haltères légers (1-2kg)",
        "Tapis de yoga",
    ];

    /// Leisure preferences
    pub const HOBBIES: &[&str] = &[
        "Jeux de société",
        "Jeux de cartes",
        "Sudoku/Mots croisés",
        "Lecture",
        "Jardinage",
    ];

    /// Common health conditions
    pub const CONDITIONS: &[&str] = &[
        "Arthrose",
        "Problèmes de dos",
        "Diabète",
        "Hypertension",
        "Difficultés auditives",
        "Difficultés visuelles",
    ];
}

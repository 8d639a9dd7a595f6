// ABOUTME: French prompt builders for program generation and activity replacement
// ABOUTME: Embeds profile fields and the generation policy as natural language
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Prompts
//!
//! The generation policy (7 days Monday-first, 3 active days alternating
//! with rest, a mix of session types, mobility-appropriate exercises,
//! hobby-based leisure) lives here as instructions to the service, not as
//! application logic. The response structure is enforced separately by the
//! schema in [`crate::plan::schema`].

use crate::models::{Activity, SessionType, UserProfile};

fn join_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_owned()
    } else {
        values.join(", ")
    }
}

fn text_or(value: &str, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value.to_owned()
    }
}

/// Build the weekly program generation prompt for a profile
#[must_use]
pub fn weekly_program(profile: &UserProfile) -> String {
    format!(
        "Crée un programme de bien-être hebdomadaire personnalisé pour un senior.\n\
         Voici les informations de l'utilisateur :\n\
         - Nom : {name}\n\
         - Âge : {age} ans\n\
         - Niveau de mobilité : {mobility}\n\
         - Handicaps/Conditions spécifiques : {disabilities}\n\
         - Opérations passées pertinentes : {surgeries}\n\
         - Objectifs principaux : {goals}\n\
         - Équipement disponible : {equipment}\n\
         - Loisirs préférés : {hobbies}\n\
         \n\
         Instructions pour la génération du programme :\n\
         1. Le programme doit couvrir 7 jours, de Lundi à Dimanche.\n\
         2. Crée 3 jours de session au total. Les autres jours sont des jours de repos (session: null).\n\
         3. Alternez entre les jours d'activité et les jours de repos. Par exemple : Lundi (activité), Mardi (repos), Mercredi (activité), etc.\n\
         4. Incluez un mélange de séances 'physique' et 'ludique' (au moins une de chaque).\n\
         5. Les exercices physiques doivent être sûrs, adaptés à l'âge, à la mobilité, et aux conditions de l'utilisateur. Privilégiez des exercices à faible impact. Si l'utilisateur a du matériel, proposez des exercices qui l'utilisent.\n\
         6. Les instructions pour chaque exercice doivent être très claires, simples et détaillées, avec des conseils de sécurité.\n\
         7. Les activités ludiques doivent être basées sur les loisirs de l'utilisateur.\n\
         8. Le ton doit être encourageant, positif et bienveillant.\n\
         9. Génère un message de motivation unique pour la semaine.\n\
         10. La réponse DOIT être uniquement au format JSON et respecter le schéma fourni. Ne pas inclure de texte avant ou après le JSON.",
        name = profile.name,
        age = profile.age,
        mobility = profile.mobility,
        disabilities = join_or(&profile.disabilities, "Aucun"),
        surgeries = text_or(&profile.surgeries, "Aucune"),
        goals = join_or(&profile.goals, "Rester actif"),
        equipment = join_or(&profile.equipment, "Aucun équipement spécifique"),
        hobbies = join_or(&profile.hobbies, "Aucun"),
    )
}

/// Build the single-activity replacement prompt.
///
/// Only the profile subset relevant to substitution (age, mobility,
/// conditions, goals) and the activity's name and description are sent;
/// other profile and activity fields are deliberately dropped from the
/// context.
#[must_use]
pub fn replacement_activity(
    profile: &UserProfile,
    activity: &Activity,
    session_type: SessionType,
) -> String {
    let kind = match session_type {
        SessionType::Physical => "un exercice physique",
        SessionType::Leisure => "une activité de loisir",
    };
    format!(
        "Propose une activité de remplacement pour un senior, dans une séance de type '{session_type}'.\n\
         Voici les informations de l'utilisateur :\n\
         - Âge : {age} ans\n\
         - Niveau de mobilité : {mobility}\n\
         - Handicaps/Conditions spécifiques : {disabilities}\n\
         - Objectifs principaux : {goals}\n\
         \n\
         Activité à remplacer :\n\
         - Nom : {name}\n\
         - Description : {description}\n\
         \n\
         Instructions :\n\
         1. Propose exactement UNE alternative, différente de l'activité à remplacer, qui reste {kind}.\n\
         2. L'alternative doit être sûre et adaptée à l'âge, à la mobilité et aux conditions de l'utilisateur. Privilégie les variantes à faible impact, assises si nécessaire.\n\
         3. Les instructions doivent être claires, simples et détaillées, avec des conseils de sécurité.\n\
         4. La réponse DOIT être uniquement au format JSON et respecter le schéma fourni. Ne pas inclure de texte avant ou après le JSON.",
        age = profile.age,
        mobility = profile.mobility,
        disabilities = join_or(&profile.disabilities, "Aucun"),
        goals = join_or(&profile.goals, "Rester actif"),
        name = activity.name,
        description = activity.description,
    )
}

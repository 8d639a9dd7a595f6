// ABOUTME: Unit tests for the program generator pipeline
// ABOUTME: Validates 7-day invariant, fresh id assignment, and failure mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use std::collections::HashSet;

use helpers::{marie, five_day_program_json, replacement_json, valid_program_json, MockGenerator};
use serein::constants::WEEK_DAYS;
use serein::errors::ErrorCode;
use serein::models::{Activity, SessionType};
use serein::plan::ProgramGenerator;

#[tokio::test]
async fn test_successful_generation_yields_seven_ordered_days() {
    let generator = ProgramGenerator::new(MockGenerator::replying(valid_program_json()));
    let program = generator.generate_program(&marie()).await.unwrap();

    assert_eq!(program.weekly_schedule.len(), 7);
    for (plan, expected) in program.weekly_schedule.iter().zip(WEEK_DAYS.iter()) {
        assert_eq!(&plan.day, expected);
    }
    assert_eq!(program.active_day_count(), 3);
}

#[tokio::test]
async fn test_every_activity_gets_a_fresh_unique_id() {
    let generator = ProgramGenerator::new(MockGenerator::replying(valid_program_json()));
    let program = generator.generate_program(&marie()).await.unwrap();

    let ids: Vec<&str> = program
        .weekly_schedule
        .iter()
        .filter_map(|plan| plan.session.as_ref())
        .flat_map(|session| session.activities.iter())
        .map(|activity| activity.id.as_str())
        .collect();

    assert!(!ids.is_empty());
    assert!(ids.iter().all(|id| !id.is_empty()));
    let unique: HashSet<&&str> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn test_five_day_response_is_a_generation_error() {
    let generator = ProgramGenerator::new(MockGenerator::replying(five_day_program_json()));
    let error = generator.generate_program(&marie()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
    assert!(error.message.contains('5'));
}

#[tokio::test]
async fn test_malformed_response_is_a_generation_error() {
    let generator = ProgramGenerator::new(MockGenerator::replying("Voici votre programme: ..."));
    let error = generator.generate_program(&marie()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
}

#[tokio::test]
async fn test_service_failure_is_a_generation_error() {
    let generator = ProgramGenerator::new(MockGenerator::failing());
    let error = generator.generate_program(&marie()).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::GenerationFailed);
}

#[tokio::test]
async fn test_invalid_profile_never_reaches_the_service() {
    let mock = MockGenerator::replying(valid_program_json());
    let generator = ProgramGenerator::new(mock);

    let mut nameless = marie();
    nameless.name = "  ".into();
    let error = generator.generate_program(&nameless).await.unwrap_err();

    assert_eq!(error.code, ErrorCode::MissingRequiredField);
    assert_eq!(generator.provider().call_count(), 0);
}

#[tokio::test]
async fn test_prompt_embeds_profile_and_schema_constrains_response() {
    let generator = ProgramGenerator::new(MockGenerator::replying(valid_program_json()));
    generator.generate_program(&marie()).await.unwrap();

    // one user action, exactly one outbound call
    let calls = generator_calls(&generator);
    assert_eq!(calls.len(), 1);
    assert!(calls[0].prompt.contains("Marie"));
    assert!(calls[0].prompt.contains("Arthrose"));
    assert_eq!(
        calls[0].response_schema["properties"]["weeklySchedule"]["type"],
        "ARRAY"
    );
}

#[tokio::test]
async fn test_replacement_draft_parsed_and_validated() {
    let generator = ProgramGenerator::new(MockGenerator::replying(replacement_json()));
    let original = Activity {
        id: "original-id".into(),
        name: "Marche rapide".into(),
        description: "Marcher 20 minutes.".into(),
        duration: None,
        reps: None,
        sets: None,
        video_search_query: None,
    };

    let draft = generator
        .replacement_activity(&marie(), &original, SessionType::Physical)
        .await
        .unwrap();

    assert_eq!(draft.name, "Étirement assis");
    // the draft carries no id; identity is the caller's to re-attach
    let committed = Activity::from_draft(original.id.clone(), draft);
    assert_eq!(committed.id, "original-id");
}

#[tokio::test]
async fn test_replacement_failure_is_a_replacement_error() {
    let generator = ProgramGenerator::new(MockGenerator::replying("{\"name\": \"\"}"));
    let original = Activity {
        id: "original-id".into(),
        name: "Marche".into(),
        description: "Marcher.".into(),
        duration: None,
        reps: None,
        sets: None,
        video_search_query: None,
    };

    let error = generator
        .replacement_activity(&marie(), &original, SessionType::Leisure)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ReplacementFailed);
}

fn generator_calls(
    generator: &ProgramGenerator<MockGenerator>,
) -> Vec<serein::llm::GenerationRequest> {
    generator.provider().calls()
}

// ABOUTME: Five-step profile builder state machine for onboarding
// ABOUTME: Linear back/forward navigation with step-1 validation gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Serein Wellness

//! # Profile Builder
//!
//! Wizard state machine backing the onboarding flow. Steps are linear,
//! 1 through [`ONBOARDING_STEPS`]:
//!
//! 1. Personal information (name, age); gates forward navigation
//! 2. Health and mobility (conditions, surgeries, mobility level)
//! 3. Goals
//! 4. Equipment
//! 5. Hobbies, then finish
//!
//! Required-field violations never surface as errors mid-wizard:
//! [`ProfileBuilder::can_advance`] is the disabled-action query, and a
//! blocked [`ProfileBuilder::advance`] is a no-op returning `false`. The
//! terminal [`ProfileBuilder::finish`] folds the free-text custom
//! condition into the profile and emits it by value; the builder is
//! consumed and discarded.

use crate::constants::{choices, DEFAULT_ONBOARDING_AGE, ONBOARDING_STEPS};
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;

/// Multi-select profile fields toggled by checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceField {
    /// Health conditions (step 2)
    Disabilities,
    /// Wellness goals (step 3)
    Goals,
    /// Home equipment (step 4)
    Equipment,
    /// Leisure preferences (step 5)
    Hobbies,
}

/// Wizard state machine producing a validated [`UserProfile`]
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    step: u8,
    profile: UserProfile,
    custom_disability: String,
}

impl ProfileBuilder {
    /// Start a fresh wizard at step 1 with the default profile
    #[must_use]
    pub fn new() -> Self {
        Self {
            step: 1,
            profile: UserProfile {
                name: String::new(),
                age: DEFAULT_ONBOARDING_AGE,
                mobility: choices::MOBILITY_LEVELS[0].to_owned(),
                disabilities: Vec::new(),
                surgeries: String::new(),
                goals: Vec::new(),
                equipment: Vec::new(),
                hobbies: Vec::new(),
            },
            custom_disability: String::new(),
        }
    }

    /// Current step, 1-based
    #[must_use]
    pub const fn step(&self) -> u8 {
        self.step
    }

    /// Whether the wizard is on its final step
    #[must_use]
    pub const fn is_last_step(&self) -> bool {
        self.step == ONBOARDING_STEPS
    }

    /// The profile as entered so far
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Whether forward navigation is currently permitted.
    ///
    /// Step 1 requires a non-empty trimmed name and a positive age; every
    /// other step is unconstrained.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        if self.step == 1 {
            return !self.profile.name.trim().is_empty() && self.profile.age > 0;
        }
        self.step < ONBOARDING_STEPS
    }

    /// Move forward one step. Returns `false` (and stays put) when blocked
    /// by validation or already on the last step.
    pub fn advance(&mut self) -> bool {
        if self.step >= ONBOARDING_STEPS || !self.can_advance() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Move back one step. Returns `false` when already on step 1.
    pub fn back(&mut self) -> bool {
        if self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Set the name field
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.profile.name = name.into();
    }

    /// Set the age field
    pub fn set_age(&mut self, age: u32) {
        self.profile.age = age;
    }

    /// Set the mobility level
    pub fn set_mobility(&mut self, mobility: impl Into<String>) {
        self.profile.mobility = mobility.into();
    }

    /// Set the free-text surgeries field
    pub fn set_surgeries(&mut self, surgeries: impl Into<String>) {
        self.profile.surgeries = surgeries.into();
    }

    /// Set the free-text custom condition folded in at finish time
    pub fn set_custom_disability(&mut self, value: impl Into<String>) {
        self.custom_disability = value.into();
    }

    /// Apply a checkbox change to a multi-select field: checking adds the
    /// value if absent, unchecking removes it.
    pub fn set_choice(&mut self, field: ChoiceField, value: &str, checked: bool) {
        let values = match field {
            ChoiceField::Disabilities => &mut self.profile.disabilities,
            ChoiceField::Goals => &mut self.profile.goals,
            ChoiceField::Equipment => &mut self.profile.equipment,
            ChoiceField::Hobbies => &mut self.profile.hobbies,
        };
        if checked {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_owned());
            }
        } else {
            values.retain(|v| v != value);
        }
    }

    /// Terminal action: fold in the custom condition and emit the
    /// completed profile. The builder is consumed; there is no backward
    /// mutation after emission.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when called before the final step, and the
    /// profile's own validation error if name/age were edited back into an
    /// invalid state after step 1.
    pub fn finish(mut self) -> AppResult<UserProfile> {
        if !self.is_last_step() {
            return Err(AppError::invalid_input(format!(
                "cannot finish onboarding at step {} of {ONBOARDING_STEPS}",
                self.step
            )));
        }
        let custom = self.custom_disability.trim();
        if !custom.is_empty() {
            self.profile.disabilities.push(custom.to_owned());
        }
        self.profile.validate()?;
        Ok(self.profile)
    }
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder_at_last_step() -> ProfileBuilder {
        let mut builder = ProfileBuilder::new();
        builder.set_name("Jean");
        builder.set_age(70);
        while builder.advance() {}
        builder
    }

    #[test]
    fn test_step_one_gates_forward_navigation() {
        let mut builder = ProfileBuilder::new();
        assert!(!builder.can_advance());
        assert!(!builder.advance());
        assert_eq!(builder.step(), 1);

        builder.set_name("Jean");
        assert!(builder.advance());
        assert_eq!(builder.step(), 2);
    }

    #[test]
    fn test_zero_age_blocks_step_one() {
        let mut builder = ProfileBuilder::new();
        builder.set_name("Jean");
        builder.set_age(0);
        assert!(!builder.advance());
    }

    #[test]
    fn test_linear_navigation_bounds() {
        let mut builder = builder_at_last_step();
        assert!(builder.is_last_step());
        assert!(!builder.advance());

        assert!(builder.back());
        assert_eq!(builder.step(), ONBOARDING_STEPS - 1);
        while builder.back() {}
        assert_eq!(builder.step(), 1);
    }

    #[test]
    fn test_choice_toggling() {
        let mut builder = ProfileBuilder::new();
        builder.set_choice(ChoiceField::Goals, "Rester actif", true);
        builder.set_choice(ChoiceField::Goals, "Rester actif", true);
        assert_eq!(builder.profile().goals, vec!["Rester actif"]);

        builder.set_choice(ChoiceField::Goals, "Rester actif", false);
        assert!(builder.profile().goals.is_empty());
    }

    #[test]
    fn test_finish_appends_custom_condition() {
        let mut builder = builder_at_last_step();
        builder.set_choice(ChoiceField::Disabilities, "Arthrose", true);
        builder.set_custom_disability("  Vertiges  ");

        let profile = builder.finish().unwrap();
        assert_eq!(profile.disabilities, vec!["Arthrose", "Vertiges"]);
    }

    #[test]
    fn test_finish_ignores_blank_custom_condition() {
        let mut builder = builder_at_last_step();
        builder.set_custom_disability("   ");
        let profile = builder.finish().unwrap();
        assert!(profile.disabilities.is_empty());
    }

    #[test]
    fn test_finish_rejected_before_last_step() {
        let mut builder = ProfileBuilder::new();
        builder.set_name("Jean");
        assert!(builder.finish().is_err());
    }

    #[test]
    fn test_defaults_match_wizard_prefill() {
        let builder = ProfileBuilder::new();
        assert_eq!(builder.profile().age, DEFAULT_ONBOARDING_AGE);
        assert_eq!(builder.profile().mobility, choices::MOBILITY_LEVELS[0]);
    }
}

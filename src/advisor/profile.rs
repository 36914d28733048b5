//! Intake form submission and the derived user profile.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn default_age() -> u32 {
    30
}
fn default_gender() -> String {
    "Male".to_string()
}
fn default_height() -> String {
    "5'10\"".to_string()
}
fn default_weight() -> String {
    "160 lbs".to_string()
}
fn default_activity_level() -> String {
    "Moderately Active".to_string()
}
fn default_cooking_ability() -> String {
    "Average".to_string()
}
fn default_budget() -> String {
    "Moderate".to_string()
}

/// Raw form submission, as posted by the intake page.
///
/// Free-text fields may be blank; defaults are substituted when the
/// submission is converted into a [`UserProfile`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeForm {
    #[serde(default = "default_age")]
    pub age: u32,
    #[serde(default = "default_gender")]
    pub gender: String,
    #[serde(default = "default_height")]
    pub height: String,
    #[serde(default = "default_weight")]
    pub weight: String,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    /// Selected nutrition goals. Must be non-empty to submit.
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub medical_conditions: String,
    #[serde(default)]
    pub medications: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub food_preferences: String,
    #[serde(default = "default_cooking_ability")]
    pub cooking_ability: String,
    #[serde(default = "default_budget")]
    pub budget: String,
    #[serde(default)]
    pub cultural_factors: String,
}

impl IntakeForm {
    /// Enforce the one submission precondition: at least one goal selected.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.goals.iter().all(|g| g.trim().is_empty()) {
            return Err(ValidationError::NoGoalsSelected);
        }
        Ok(())
    }

    /// Convert into a fully-populated profile, substituting the documented
    /// defaults for blank optional answers.
    pub fn into_profile(self) -> UserProfile {
        fn or_default(value: String, fallback: &str) -> String {
            if value.trim().is_empty() {
                fallback.to_string()
            } else {
                value
            }
        }

        let goals: Vec<&str> = self
            .goals
            .iter()
            .map(|g| g.trim())
            .filter(|g| !g.is_empty())
            .collect();
        let goals = if goals.is_empty() {
            "General health improvement".to_string()
        } else {
            goals.join(", ")
        };

        UserProfile {
            age: self.age,
            gender: self.gender,
            height: self.height,
            weight: self.weight,
            activity_level: self.activity_level,
            goals,
            medical_conditions: or_default(self.medical_conditions, "None reported"),
            medications: or_default(self.medications, "None reported"),
            allergies: or_default(self.allergies, "None reported"),
            food_preferences: or_default(self.food_preferences, "No specific preferences"),
            cooking_ability: self.cooking_ability,
            budget: self.budget,
            cultural_factors: or_default(self.cultural_factors, "No specific factors"),
        }
    }
}

/// Flat, fully-populated set of user answers.
///
/// Created once per submission, read-only afterwards, discarded when the
/// request completes. All thirteen fields are always populated.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub activity_level: String,
    /// Comma-joined goal list.
    pub goals: String,
    pub medical_conditions: String,
    pub medications: String,
    pub allergies: String,
    pub food_preferences: String,
    pub cooking_ability: String,
    pub budget: String,
    pub cultural_factors: String,
}

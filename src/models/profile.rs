use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{GoalTag, normalize_label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Other,
}

impl Gender {
    /// Anything other than "male" (case-insensitive) selects the non-male BMR constant.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "male" | "m" => Gender::Male,
            _ => Gender::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    /// Parse an activity level, falling back to `Sedentary` for unrecognised text.
    ///
    /// The fallback is silent from the caller's point of view; it is only logged.
    pub fn from_label(label: &str) -> Self {
        match normalize_label(label).as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "light" => ActivityLevel::Light,
            "moderate" => ActivityLevel::Moderate,
            "active" => ActivityLevel::Active,
            "very_active" => ActivityLevel::VeryActive,
            other => {
                tracing::warn!(activity = other, "unrecognised activity level, using sedentary");
                ActivityLevel::Sedentary
            }
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very active",
        }
    }
}

/// Biometric profile for a single planning request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub activity_level: ActivityLevel,
    pub goal: GoalTag,
}

impl UserProfile {
    /// Reject non-positive or non-finite biometric fields.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(PlannerError::InvalidProfile(
                "age must be greater than zero".to_string(),
            ));
        }
        if !(self.height_cm.is_finite() && self.height_cm > 0.0) {
            return Err(PlannerError::InvalidProfile(format!(
                "height must be positive, got {}",
                self.height_cm
            )));
        }
        if !(self.weight_kg.is_finite() && self.weight_kg > 0.0) {
            return Err(PlannerError::InvalidProfile(format!(
                "weight must be positive, got {}",
                self.weight_kg
            )));
        }
        Ok(())
    }
}

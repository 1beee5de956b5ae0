use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::normalize_label;

/// Number of nutrient features fed to a goal predictor.
pub const FEATURE_COUNT: usize = 4;

/// Nutrient feature vector: `[calories, protein_g, fat_g, carbs_g]`.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Fitness goal, used both as a food label and as the user's objective.
///
/// Variant order doubles as the label order used to break majority ties
/// in the decision tree (alphabetical on the labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum GoalTag {
    Maintain,
    WeightGain,
    WeightLoss,
}

impl GoalTag {
    pub const ALL: [GoalTag; 3] = [GoalTag::Maintain, GoalTag::WeightGain, GoalTag::WeightLoss];

    /// Human-readable label, as spelled in catalog files.
    pub fn label(self) -> &'static str {
        match self {
            GoalTag::Maintain => "maintain",
            GoalTag::WeightGain => "weight gain",
            GoalTag::WeightLoss => "weight loss",
        }
    }
}

impl fmt::Display for GoalTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GoalTag {
    type Err = PlannerError;

    /// Case-insensitive; `weight loss`, `weight_loss` and `Weight-Loss` are equivalent.
    fn from_str(s: &str) -> Result<Self> {
        match normalize_label(s).as_str() {
            "maintain" | "maintenance" => Ok(GoalTag::Maintain),
            "weight_gain" | "gain" => Ok(GoalTag::WeightGain),
            "weight_loss" | "loss" => Ok(GoalTag::WeightLoss),
            other => Err(PlannerError::InvalidInput(format!(
                "unknown goal '{}'",
                other
            ))),
        }
    }
}

impl TryFrom<String> for GoalTag {
    type Error = PlannerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A catalog food with per-serving nutrients and a goal tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    pub calories: f64,

    #[serde(rename = "protein", alias = "protein_g")]
    pub protein_g: f64,

    #[serde(rename = "carbs", alias = "carbs_g")]
    pub carbs_g: f64,

    #[serde(rename = "fat", alias = "fat_g")]
    pub fat_g: f64,

    #[serde(rename = "goal", alias = "goal_tag")]
    pub goal_tag: GoalTag,
}

impl FoodItem {
    pub fn new(
        name: impl Into<String>,
        calories: f64,
        protein_g: f64,
        carbs_g: f64,
        fat_g: f64,
        goal_tag: GoalTag,
    ) -> Self {
        Self {
            name: name.into(),
            calories,
            protein_g,
            carbs_g,
            fat_g,
            goal_tag,
        }
    }

    /// Feature vector in the order the goal predictors are trained on.
    #[inline]
    pub fn features(&self) -> FeatureVector {
        [self.calories, self.protein_g, self.fat_g, self.carbs_g]
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    /// Check the record constraints: a name, positive calories, non-negative macros.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(PlannerError::InvalidCatalog(
                "food with an empty name".to_string(),
            ));
        }
        if !(self.calories.is_finite() && self.calories > 0.0) {
            return Err(PlannerError::InvalidCatalog(format!(
                "{}: calories must be positive, got {}",
                self.name, self.calories
            )));
        }
        for (label, value) in [
            ("protein", self.protein_g),
            ("carbs", self.carbs_g),
            ("fat", self.fat_g),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PlannerError::InvalidCatalog(format!(
                    "{}: {} must be non-negative, got {}",
                    self.name, label, value
                )));
            }
        }
        Ok(())
    }

    /// One-line description for listings and logs.
    pub fn summary(&self) -> String {
        format!(
            "{}: {} kcal, P:{} C:{} F:{} [{}]",
            self.name, self.calories, self.protein_g, self.carbs_g, self.fat_g, self.goal_tag
        )
    }
}

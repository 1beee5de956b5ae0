use serde::Serialize;

use crate::error::Result;
use crate::models::{ActivityLevel, Gender, GoalTag, NutrientTargets, UserProfile};
use crate::planner::constants::*;

/// Every intermediate value of the target computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetBreakdown {
    pub bmr: f64,
    pub activity_multiplier: f64,
    pub tdee: f64,
    pub targets: NutrientTargets,
}

/// Basal metabolic rate (Mifflin-St Jeor), kcal/day.
pub fn basal_metabolic_rate(profile: &UserProfile) -> f64 {
    let sex_offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Other => BMR_OTHER_OFFSET,
    };

    BMR_WEIGHT_COEF * profile.weight_kg + BMR_HEIGHT_COEF * profile.height_cm
        - BMR_AGE_COEF * profile.age as f64
        + sex_offset
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    activity_factor(level)
}

/// Multiplier for free-form activity text; unrecognised text counts as sedentary.
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    activity_multiplier(ActivityLevel::from_label(label))
}

/// Daily energy target: TDEE shifted by a fixed 500 kcal for loss or gain.
pub fn energy_target(bmr: f64, multiplier: f64, goal: GoalTag) -> f64 {
    let tdee = bmr * multiplier;
    match goal {
        GoalTag::WeightLoss => tdee - GOAL_CALORIE_OFFSET,
        GoalTag::WeightGain => tdee + GOAL_CALORIE_OFFSET,
        GoalTag::Maintain => tdee,
    }
}

/// Split an energy target 30/25/45 into protein, fat and carb grams.
///
/// Each macro is rounded on its own (ties to even), so the grams converted
/// back to kcal can differ from `calories` by a few kcal.
pub fn macro_targets(calories: f64) -> NutrientTargets {
    let grams = |ratio: f64, kcal_per_g: f64| (ratio * calories / kcal_per_g).round_ties_even() as i64;

    NutrientTargets {
        calories,
        protein_g: grams(PROTEIN_RATIO, KCAL_PER_G_PROTEIN),
        fat_g: grams(FAT_RATIO, KCAL_PER_G_FAT),
        carbs_g: grams(CARB_RATIO, KCAL_PER_G_CARB),
    }
}

/// Validate a profile and run the full target chain.
pub fn compute_targets(profile: &UserProfile) -> Result<TargetBreakdown> {
    profile.validate()?;

    let bmr = basal_metabolic_rate(profile);
    let multiplier = activity_multiplier(profile.activity_level);
    let calories = energy_target(bmr, multiplier, profile.goal);
    let targets = macro_targets(calories);

    tracing::debug!(
        bmr,
        multiplier,
        calories,
        protein_g = targets.protein_g,
        fat_g = targets.fat_g,
        carbs_g = targets.carbs_g,
        "computed targets"
    );

    Ok(TargetBreakdown {
        bmr,
        activity_multiplier: multiplier,
        tdee: bmr * multiplier,
        targets,
    })
}

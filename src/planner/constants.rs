use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;

/// Sex constant added for male profiles.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Sex constant added for all other profiles.
pub const BMR_OTHER_OFFSET: f64 = -161.0;

/// Fixed daily deficit or surplus applied for weight loss / gain (kcal).
pub const GOAL_CALORIE_OFFSET: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_RATIO: f64 = 0.30;
pub const FAT_RATIO: f64 = 0.25;
pub const CARB_RATIO: f64 = 0.45;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Allocation
// ─────────────────────────────────────────────────────────────────────────────

/// Default per-food serving cap.
pub const DEFAULT_MAX_SERVINGS_PER_FOOD: u32 = 4;

/// Running macros may reach this multiple of their target during the goal pass.
pub const MACRO_CAP_FACTOR: f64 = 1.5;

/// A plan counts as full once calories reach this share of the target.
pub const CALORIE_FILL_RATIO: f64 = 0.95;

/// Activity multiplier used for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

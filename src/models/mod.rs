pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FEATURE_COUNT, FeatureVector, FoodItem, GoalTag};
pub use plan::{NutrientTargets, NutrientTotals, PlanResult, SelectionEntry};
pub use profile::{ActivityLevel, Gender, UserProfile};

/// Normalize a free-form label: trimmed, lowercase, with spaces and dashes as underscores.
pub(crate) fn normalize_label(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

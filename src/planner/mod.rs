pub mod allocator;
pub mod classifier;
pub mod constants;
pub mod targets;

pub use allocator::allocate;
pub use classifier::{CatalogTags, DecisionTree, GoalPredictor, PredictorKind};
pub use constants::*;
pub use targets::{
    TargetBreakdown, activity_multiplier, activity_multiplier_for_label, basal_metabolic_rate,
    compute_targets, energy_target, macro_targets,
};

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{PlanResult, UserProfile};

/// Targets and the meal plan built for them.
#[derive(Debug, Clone, Serialize)]
pub struct DailyPlan {
    pub breakdown: TargetBreakdown,
    pub plan: PlanResult,
}

impl DailyPlan {
    /// Whether the plan got within the fill ratio of the calorie target.
    pub fn reaches_target(&self) -> bool {
        self.plan
            .reaches_target(&self.breakdown.targets, CALORIE_FILL_RATIO)
    }
}

/// Run the whole pipeline for one profile: targets, a freshly trained
/// predictor, then allocation.
pub fn plan_day(
    profile: &UserProfile,
    catalog: &FoodCatalog,
    predictor: PredictorKind,
    max_servings_per_food: u32,
) -> Result<DailyPlan> {
    let breakdown = compute_targets(profile)?;
    let model = predictor.train(catalog);
    let plan = allocate(
        catalog,
        model.as_ref(),
        &breakdown.targets,
        profile.goal,
        max_servings_per_food,
    );

    if !plan.reaches_target(&breakdown.targets, CALORIE_FILL_RATIO) {
        tracing::info!(
            calories = plan.totals().calories,
            target = breakdown.targets.calories,
            "plan falls short of the calorie target"
        );
    }

    Ok(DailyPlan { breakdown, plan })
}

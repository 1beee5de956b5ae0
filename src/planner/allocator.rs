use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, GoalTag, NutrientTargets, NutrientTotals, PlanResult, SelectionEntry};
use crate::planner::classifier::GoalPredictor;
use crate::planner::constants::*;

/// Allocation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Only foods predicted for the user's goal, within macro caps.
    GoalFiltered,
    /// Any food; only the serving cap and calorie ceiling apply.
    Fallback,
}

/// In-progress selection over the calorie-sorted catalog.
struct Allocation<'a> {
    foods: Vec<&'a FoodItem>,
    predicted: Vec<GoalTag>,
    servings: Vec<u32>,
    /// Indices into `foods` in the order they were first selected.
    picked: Vec<usize>,
    totals: NutrientTotals,
}

impl<'a> Allocation<'a> {
    fn new(catalog: &'a FoodCatalog, predictor: &dyn GoalPredictor) -> Self {
        let mut foods: Vec<&FoodItem> = catalog.items().iter().collect();
        // Stable: equal calories keep catalog order.
        foods.sort_by(|a, b| b.calories.total_cmp(&a.calories));

        let predicted = foods.iter().map(|f| predictor.predict(&f.features())).collect();
        let servings = vec![0; foods.len()];

        Self {
            foods,
            predicted,
            servings,
            picked: Vec::new(),
            totals: NutrientTotals::default(),
        }
    }

    fn accepts(
        &self,
        idx: usize,
        phase: Phase,
        targets: &NutrientTargets,
        user_goal: GoalTag,
        max_servings: u32,
    ) -> bool {
        if self.servings[idx] >= max_servings {
            return false;
        }

        let after = self.totals.with(self.foods[idx], 1);
        if after.calories > targets.calories {
            return false;
        }

        match phase {
            Phase::Fallback => true,
            Phase::GoalFiltered => {
                self.predicted[idx] == user_goal
                    && after.protein_g <= MACRO_CAP_FACTOR * targets.protein_g as f64
                    && after.fat_g <= MACRO_CAP_FACTOR * targets.fat_g as f64
                    && after.carbs_g <= MACRO_CAP_FACTOR * targets.carbs_g as f64
            }
        }
    }

    fn commit(&mut self, idx: usize, phase: Phase) {
        if self.servings[idx] == 0 {
            self.picked.push(idx);
        }
        self.servings[idx] += 1;
        self.totals = self.totals.with(self.foods[idx], 1);

        tracing::debug!(
            food = %self.foods[idx].name,
            servings = self.servings[idx],
            calories = self.totals.calories,
            ?phase,
            "added serving"
        );
    }

    /// Commit the first acceptable food, rescanning from the top after every
    /// commit, until nothing fits or calories reach the fill ratio.
    ///
    /// Returns the number of servings added.
    fn fill(
        &mut self,
        phase: Phase,
        targets: &NutrientTargets,
        user_goal: GoalTag,
        max_servings: u32,
    ) -> u32 {
        let floor = targets.calories * CALORIE_FILL_RATIO;
        let mut added = 0;

        while self.totals.calories < floor {
            let next = (0..self.foods.len())
                .find(|&i| self.accepts(i, phase, targets, user_goal, max_servings));

            match next {
                Some(idx) => {
                    self.commit(idx, phase);
                    added += 1;
                }
                None => break,
            }
        }

        added
    }

    fn into_plan(self, used_fallback: bool) -> PlanResult {
        let entries = self
            .picked
            .iter()
            .map(|&i| SelectionEntry {
                food: self.foods[i].clone(),
                servings: self.servings[i],
            })
            .collect();
        PlanResult::new(entries, used_fallback)
    }
}

/// Greedily pick servings that approach `targets` without exceeding the calorie target.
///
/// Foods are scanned by calories, highest first. The first pass only takes
/// foods the predictor assigns to `user_goal` and keeps each macro within
/// 1.5x its target. If that pass stalls below 95% of the calorie target, a
/// second pass ignores goal and macros. Servings are never removed, so an
/// early heavy pick can leave the plan short of the target; that result is
/// returned as-is rather than treated as an error.
pub fn allocate(
    catalog: &FoodCatalog,
    predictor: &dyn GoalPredictor,
    targets: &NutrientTargets,
    user_goal: GoalTag,
    max_servings_per_food: u32,
) -> PlanResult {
    if catalog.is_empty() {
        return PlanResult::empty();
    }

    let mut allocation = Allocation::new(catalog, predictor);

    let goal_servings = allocation.fill(Phase::GoalFiltered, targets, user_goal, max_servings_per_food);
    let fallback_servings = allocation.fill(Phase::Fallback, targets, user_goal, max_servings_per_food);

    tracing::info!(
        goal_servings,
        fallback_servings,
        calories = allocation.totals.calories,
        target = targets.calories,
        "allocation finished"
    );

    allocation.into_plan(fallback_servings > 0)
}

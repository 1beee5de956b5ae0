use crate::catalog::FoodCatalog;
use crate::models::FoodItem;
use crate::planner::{DailyPlan, GoalPredictor, TargetBreakdown};

/// Display the target computation.
pub fn display_targets(breakdown: &TargetBreakdown) {
    let t = &breakdown.targets;

    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("BMR:              {:>7.0} kcal", breakdown.bmr);
    println!("Activity factor:  {:>7.3}", breakdown.activity_multiplier);
    println!("TDEE:             {:>7.0} kcal", breakdown.tdee);
    println!("Calorie target:   {:>7.0} kcal", t.calories);
    println!(
        "Macros:           P {}g | F {}g | C {}g",
        t.protein_g, t.fat_g, t.carbs_g
    );
    println!();
}

/// Display targets followed by the selected servings.
pub fn display_daily_plan(daily: &DailyPlan) {
    display_targets(&daily.breakdown);

    let plan = &daily.plan;
    if plan.is_empty() {
        println!("No meal plan generated (empty catalog or calorie target below every food).");
        return;
    }

    println!("=== Meal Plan ===");
    println!();

    let max_name_len = plan
        .entries()
        .iter()
        .map(|e| e.food.name.len())
        .max()
        .unwrap_or(10);

    for (i, entry) in plan.entries().iter().enumerate() {
        println!(
            "{:>3}. {:<width$} x{} - {:>5.0} kcal",
            i + 1,
            entry.food.name,
            entry.servings,
            entry.calories(),
            width = max_name_len
        );
    }

    let totals = plan.totals();
    let targets = &daily.breakdown.targets;

    println!();
    println!("--- Summary ---");
    println!("Servings: {}", plan.total_servings());
    println!(
        "Calories: {:.0} / {:.0} kcal",
        totals.calories, targets.calories
    );
    println!(
        "Protein:  {:.0} / {} g",
        totals.protein_g, targets.protein_g
    );
    println!("Fat:      {:.0} / {} g", totals.fat_g, targets.fat_g);
    println!("Carbs:    {:.0} / {} g", totals.carbs_g, targets.carbs_g);

    if plan.used_fallback() {
        println!("Note: goal and macro limits were relaxed to fill calories.");
    }
    if !daily.reaches_target() {
        println!("Note: the calorie target could not be reached with this catalog.");
    }
    println!();
}

/// Display the catalog with each food's predicted goal.
pub fn display_catalog(catalog: &FoodCatalog, predictor: &dyn GoalPredictor) {
    if catalog.is_empty() {
        println!("Catalog: (none)");
        return;
    }

    println!();
    println!("=== Catalog ({} items) ===", catalog.len());
    println!();

    for food in catalog.items() {
        let predicted = predictor.predict(&food.features());
        let marker = if predicted == food.goal_tag { "" } else { " (differs from tag)" };
        println!("  {} -> predicted {}{}", food.summary(), predicted, marker);
    }

    println!();
}

/// Display fuzzy search results.
pub fn display_food_matches(query: &str, matches: &[(&FoodItem, f64)]) {
    if matches.is_empty() {
        println!("No matching food found for '{}'", query);
        return;
    }

    for (food, score) in matches.iter().take(5) {
        println!("  {} (match {:.2})", food.summary(), score);
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use diet_planner_rs::catalog::FoodCatalog;
use diet_planner_rs::models::{FoodItem, GoalTag, NutrientTargets};
use diet_planner_rs::planner::{CALORIE_FILL_RATIO, DecisionTree, GoalPredictor, allocate};

fn random_catalog(rng: &mut StdRng) -> FoodCatalog {
    let size = rng.gen_range(0..=14);
    let items = (0..size)
        .map(|i| {
            FoodItem::new(
                format!("Food {}", i),
                rng.gen_range(20.0..650.0),
                rng.gen_range(0.0..45.0),
                rng.gen_range(0.0..80.0),
                rng.gen_range(0.0..30.0),
                GoalTag::ALL[rng.gen_range(0..GoalTag::ALL.len())],
            )
        })
        .collect();
    FoodCatalog::new(items).unwrap()
}

fn random_targets(rng: &mut StdRng) -> NutrientTargets {
    NutrientTargets {
        calories: rng.gen_range(-200.0..4000.0),
        protein_g: rng.gen_range(0..300),
        fat_g: rng.gen_range(0..120),
        carbs_g: rng.gen_range(0..450),
    }
}

#[test]
fn test_random_catalogs_respect_allocation_invariants() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..300 {
        let catalog = random_catalog(&mut rng);
        let tree = DecisionTree::fit(&catalog);
        let targets = random_targets(&mut rng);
        let goal = GoalTag::ALL[rng.gen_range(0..GoalTag::ALL.len())];
        let cap = rng.gen_range(0..=5);

        let plan = allocate(&catalog, &tree, &targets, goal, cap);

        // Serving cap and unique entries.
        for entry in plan.entries() {
            assert!(entry.servings >= 1 && entry.servings <= cap);
            assert_eq!(
                plan.entries()
                    .iter()
                    .filter(|e| e.food.name == entry.food.name)
                    .count(),
                1
            );
        }

        // Totals match an independent sum over entries.
        let mut calories = 0.0;
        let mut protein = 0.0;
        for entry in plan.entries() {
            calories += entry.food.calories * entry.servings as f64;
            protein += entry.food.protein_g * entry.servings as f64;
        }
        assert!((plan.totals().calories - calories).abs() < 1e-6);
        assert!((plan.totals().protein_g - protein).abs() < 1e-6);

        // Never above the calorie target.
        assert!(plan.is_empty() || plan.totals().calories <= targets.calories + 1e-6);

        // Without fallback, every selected food was predicted for the goal.
        if !plan.used_fallback() {
            for entry in plan.entries() {
                assert_eq!(tree.predict(&entry.food.features()), goal);
            }
        }

        // Short plans are short because nothing else fits.
        if plan.totals().calories < targets.calories * CALORIE_FILL_RATIO {
            for food in catalog.items() {
                if plan.servings_of(&food.name) < cap {
                    assert!(plan.totals().calories + food.calories > targets.calories - 1e-6);
                }
            }
        }

        // Same inputs, same plan.
        assert_eq!(plan, allocate(&catalog, &tree, &targets, goal, cap));
    }
}

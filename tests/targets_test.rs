use assert_float_eq::*;

use diet_planner_rs::models::{ActivityLevel, Gender, GoalTag, UserProfile};
use diet_planner_rs::planner::{
    activity_multiplier, basal_metabolic_rate, compute_targets, energy_target, macro_targets,
};

fn make_profile(gender: Gender, activity_level: ActivityLevel, goal: GoalTag) -> UserProfile {
    UserProfile {
        age: 30,
        gender,
        height_cm: 175.0,
        weight_kg: 70.0,
        activity_level,
        goal,
    }
}

#[test]
fn test_reference_profile_targets() {
    let profile = make_profile(Gender::Male, ActivityLevel::Moderate, GoalTag::WeightLoss);
    let breakdown = compute_targets(&profile).unwrap();

    // 10*70 + 6.25*175 - 5*30 + 5
    assert_float_absolute_eq!(breakdown.bmr, 1648.75, 1e-9);
    assert_float_absolute_eq!(breakdown.tdee, 2555.5625, 1e-9);
    assert_float_absolute_eq!(breakdown.targets.calories, 2055.5625, 1e-9);
    assert_eq!(breakdown.targets.protein_g, 154);
    assert_eq!(breakdown.targets.fat_g, 57);
    assert_eq!(breakdown.targets.carbs_g, 231);
}

#[test]
fn test_goal_offset_is_exactly_500() {
    let heights = [150.0, 165.5, 180.0, 201.0];
    let weights = [45.0, 70.0, 92.3, 130.0];

    for gender in [Gender::Male, Gender::Other] {
        for level in ActivityLevel::ALL {
            for (&height_cm, &weight_kg) in heights.iter().zip(weights.iter()) {
                let profile = UserProfile {
                    age: 41,
                    gender,
                    height_cm,
                    weight_kg,
                    activity_level: level,
                    goal: GoalTag::Maintain,
                };
                let bmr = basal_metabolic_rate(&profile);
                let mult = activity_multiplier(level);
                let tdee = bmr * mult;

                assert_eq!(energy_target(bmr, mult, GoalTag::Maintain), tdee);
                assert_float_absolute_eq!(
                    energy_target(bmr, mult, GoalTag::WeightLoss),
                    tdee - 500.0,
                    1e-9
                );
                assert_float_absolute_eq!(
                    energy_target(bmr, mult, GoalTag::WeightGain),
                    tdee + 500.0,
                    1e-9
                );
            }
        }
    }
}

#[test]
fn test_macro_grams_resum_within_rounding_slack() {
    // Worst case: half a gram off on each macro -> 2 + 4.5 + 2 kcal.
    let max_slack = 0.5 * 4.0 + 0.5 * 9.0 + 0.5 * 4.0;

    let mut calories = 900.0;
    while calories < 4500.0 {
        let t = macro_targets(calories);
        let resum = (t.protein_g * 4 + t.fat_g * 9 + t.carbs_g * 4) as f64;
        assert!(
            (resum - calories).abs() <= max_slack,
            "{} kcal re-sums to {}",
            calories,
            resum
        );
        calories += 7.3;
    }
}

#[test]
fn test_sedentary_other_gain_profile() {
    let profile = make_profile(Gender::Other, ActivityLevel::Sedentary, GoalTag::WeightGain);
    let breakdown = compute_targets(&profile).unwrap();

    // (700 + 1093.75 - 150 - 161) * 1.2 + 500
    assert_float_absolute_eq!(breakdown.targets.calories, 2279.3, 1e-9);
    assert_eq!(breakdown.activity_multiplier, 1.2);
}

#[test]
fn test_invalid_profile_is_reported() {
    let mut profile = make_profile(Gender::Male, ActivityLevel::Light, GoalTag::Maintain);
    profile.age = 0;
    assert!(compute_targets(&profile).is_err());
}

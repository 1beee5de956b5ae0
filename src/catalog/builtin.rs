use crate::models::{FoodItem, GoalTag};

/// Default reference foods, one serving each.
pub fn builtin_items() -> Vec<FoodItem> {
    use GoalTag::*;

    vec![
        FoodItem::new("Boiled Egg", 78.0, 6.0, 0.6, 5.3, WeightGain),
        FoodItem::new("Grilled Chicken Breast", 165.0, 31.0, 0.0, 3.6, WeightLoss),
        FoodItem::new("Brown Rice (1 cup)", 216.0, 5.0, 45.0, 1.8, Maintain),
        FoodItem::new("Oats (1/2 cup)", 150.0, 5.0, 27.0, 3.0, WeightGain),
        FoodItem::new("Almonds (10 pieces)", 70.0, 2.6, 2.5, 6.1, WeightGain),
        FoodItem::new("Apple", 95.0, 0.5, 25.0, 0.3, Maintain),
        FoodItem::new("Greek Yogurt (1 cup)", 100.0, 10.0, 6.0, 0.0, WeightLoss),
        FoodItem::new("Sweet Potato (100g)", 86.0, 1.6, 20.0, 0.1, WeightLoss),
        FoodItem::new("Peanut Butter (2 tbsp)", 190.0, 8.0, 6.0, 16.0, WeightGain),
        FoodItem::new("Salmon (100g)", 208.0, 20.0, 0.0, 13.0, WeightLoss),
    ]
}

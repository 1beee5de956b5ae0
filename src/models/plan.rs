use serde::Serialize;

use crate::models::FoodItem;

/// Daily energy and macro targets derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NutrientTargets {
    pub calories: f64,
    pub protein_g: i64,
    pub fat_g: i64,
    pub carbs_g: i64,
}

/// Running or final nutrient sums for a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NutrientTotals {
    pub calories: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
}

impl NutrientTotals {
    /// Totals after adding `servings` of `food`.
    pub fn with(&self, food: &FoodItem, servings: u32) -> Self {
        let n = servings as f64;
        Self {
            calories: self.calories + food.calories * n,
            protein_g: self.protein_g + food.protein_g * n,
            fat_g: self.fat_g + food.fat_g * n,
            carbs_g: self.carbs_g + food.carbs_g * n,
        }
    }
}

/// A food and how many servings of it the plan contains.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionEntry {
    pub food: FoodItem,
    pub servings: u32,
}

impl SelectionEntry {
    pub fn calories(&self) -> f64 {
        self.food.calories * self.servings as f64
    }
}

/// Final output of an allocation run.
///
/// Totals are always derived from the entries, so they cannot drift.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanResult {
    entries: Vec<SelectionEntry>,
    totals: NutrientTotals,
    used_fallback: bool,
}

impl PlanResult {
    /// Build a plan from entries in first-selection order.
    pub fn new(entries: Vec<SelectionEntry>, used_fallback: bool) -> Self {
        let totals = entries
            .iter()
            .fold(NutrientTotals::default(), |acc, e| acc.with(&e.food, e.servings));
        Self {
            entries,
            totals,
            used_fallback,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), false)
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    /// Look up an entry by food name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&SelectionEntry> {
        let key = name.to_lowercase();
        self.entries.iter().find(|e| e.food.key() == key)
    }

    /// Servings selected for a food, 0 when absent.
    pub fn servings_of(&self, name: &str) -> u32 {
        self.get(name).map(|e| e.servings).unwrap_or(0)
    }

    pub fn totals(&self) -> &NutrientTotals {
        &self.totals
    }

    /// Whether the unfiltered fallback pass had to add servings.
    pub fn used_fallback(&self) -> bool {
        self.used_fallback
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of servings across all entries.
    pub fn total_servings(&self) -> u32 {
        self.entries.iter().map(|e| e.servings).sum()
    }

    /// Whether the plan reached the fill ratio of the calorie target.
    pub fn reaches_target(&self, targets: &NutrientTargets, fill_ratio: f64) -> bool {
        self.totals.calories >= targets.calories * fill_ratio
    }
}

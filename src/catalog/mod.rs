mod builtin;
mod persistence;

pub use builtin::builtin_items;
pub use persistence::{load_catalog, load_items, save_items};

use std::collections::HashMap;

use strsim::jaro_winkler;

use crate::error::Result;
use crate::models::FoodItem;

/// Minimum Jaro-Winkler similarity for a fuzzy name match.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;

/// Read-only table of foods, in catalog order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: Vec<FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog from a list of foods.
    ///
    /// Every item is validated. Names are deduplicated case-insensitively:
    /// the last record wins but keeps the position of the first.
    pub fn new(items: Vec<FoodItem>) -> Result<Self> {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut deduped: Vec<FoodItem> = Vec::with_capacity(items.len());

        for item in items {
            item.validate()?;
            match positions.get(&item.key()) {
                Some(&idx) => {
                    tracing::debug!(name = %item.name, "duplicate catalog entry replaced");
                    deduped[idx] = item;
                }
                None => {
                    positions.insert(item.key(), deduped.len());
                    deduped.push(item);
                }
            }
        }

        Ok(Self { items: deduped })
    }

    /// The catalog shipped with the planner.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Get a food by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&FoodItem> {
        let key = name.to_lowercase();
        self.items.iter().find(|f| f.key() == key)
    }

    /// Foods whose names resemble `query`, best match first.
    ///
    /// An exact case-insensitive match is returned alone.
    pub fn search(&self, query: &str) -> Vec<(&FoodItem, f64)> {
        let query = query.trim();
        if let Some(food) = self.get(query) {
            return vec![(food, 1.0)];
        }

        let needle = query.to_lowercase();
        let mut candidates: Vec<(&FoodItem, f64)> = self
            .items
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &needle)))
            .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
        candidates
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

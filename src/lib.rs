pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;

pub use catalog::FoodCatalog;
pub use error::{PlannerError, Result};
pub use models::{FoodItem, GoalTag, NutrientTargets, PlanResult, SelectionEntry, UserProfile};
pub use planner::{DailyPlan, GoalPredictor, allocate, compute_targets, plan_day};

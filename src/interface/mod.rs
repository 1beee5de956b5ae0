pub mod prompts;
pub mod render;

pub use prompts::{
    collect_profile, prompt_activity_level, prompt_age, prompt_gender, prompt_goal, prompt_height,
    prompt_weight,
};
pub use render::{display_catalog, display_daily_plan, display_food_matches, display_targets};

use std::str::FromStr;

use dialoguer::{Input, Select};

use crate::cli::ProfileArgs;
use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, GoalTag, UserProfile};

/// Prompt for a number, re-parsing the text the way the user typed it.
fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("'{}' is not a valid number", input)))
}

pub fn prompt_age() -> Result<u32> {
    prompt_number("Age (years)", "30")
}

pub fn prompt_height() -> Result<f64> {
    prompt_number("Height (cm)", "170")
}

pub fn prompt_weight() -> Result<f64> {
    prompt_number("Weight (kg)", "70")
}

pub fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&["male", "other"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Other
    })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let labels: Vec<&str> = ActivityLevel::ALL.iter().map(|a| a.label()).collect();
    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

pub fn prompt_goal() -> Result<GoalTag> {
    let labels: Vec<&str> = GoalTag::ALL.iter().map(|g| g.label()).collect();
    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(GoalTag::ALL[selection])
}

/// Build a profile from command-line values, prompting for anything missing.
pub fn collect_profile(args: &ProfileArgs) -> Result<UserProfile> {
    let age = match args.age {
        Some(age) => age,
        None => prompt_age()?,
    };
    let gender = match &args.gender {
        Some(label) => Gender::from_label(label),
        None => prompt_gender()?,
    };
    let height_cm = match args.height {
        Some(height) => height,
        None => prompt_height()?,
    };
    let weight_kg = match args.weight {
        Some(weight) => weight,
        None => prompt_weight()?,
    };
    let activity_level = match &args.activity {
        Some(label) => ActivityLevel::from_label(label),
        None => prompt_activity_level()?,
    };
    let goal = match &args.goal {
        Some(label) => label.parse()?,
        None => prompt_goal()?,
    };

    let profile = UserProfile {
        age,
        gender,
        height_cm,
        weight_kg,
        activity_level,
        goal,
    };
    profile.validate()?;
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_args() -> ProfileArgs {
        ProfileArgs {
            age: Some(30),
            gender: Some("Male".to_string()),
            height: Some(175.0),
            weight: Some(70.0),
            activity: Some("very active".to_string()),
            goal: Some("weight gain".to_string()),
        }
    }

    #[test]
    fn test_collect_profile_from_args_without_prompting() {
        let profile = collect_profile(&full_args()).unwrap();
        assert_eq!(profile.gender, Gender::Male);
        assert_eq!(profile.activity_level, ActivityLevel::VeryActive);
        assert_eq!(profile.goal, GoalTag::WeightGain);
    }

    #[test]
    fn test_collect_profile_rejects_bad_goal() {
        let mut args = full_args();
        args.goal = Some("shred".to_string());
        assert!(matches!(
            collect_profile(&args),
            Err(PlannerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_collect_profile_rejects_invalid_values() {
        let mut args = full_args();
        args.height = Some(0.0);
        assert!(matches!(
            collect_profile(&args),
            Err(PlannerError::InvalidProfile(_))
        ));
    }
}

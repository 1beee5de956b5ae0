use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// diet_planner: daily calorie and macro targets plus a serving plan to meet them.
#[derive(Parser, Debug)]
#[command(name = "diet_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Food catalog file (JSON or CSV). Defaults to the configured or built-in catalog.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Config file. Defaults to $XDG_CONFIG_HOME/diet_planner/config.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Profile fields; any left out are prompted for interactively.
#[derive(Args, Debug, Default, Clone)]
pub struct ProfileArgs {
    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// "male" or anything else.
    #[arg(long)]
    pub gender: Option<String>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// sedentary, light, moderate, active or very_active (unknown values count as sedentary).
    #[arg(long)]
    pub activity: Option<String>,

    /// weight_loss, weight_gain or maintain.
    #[arg(long)]
    pub goal: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute targets and build a meal plan.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Override the per-food serving cap.
        #[arg(long)]
        max_servings: Option<u32>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Compute calorie and macro targets only.
    Targets {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the catalog with each food's predicted goal.
    Catalog {
        /// Also write the catalog to this file (JSON or CSV by extension).
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Look up a food by (fuzzy) name.
    Food {
        /// Name or part of a name.
        query: String,
    },

    /// Show the effective configuration.
    Config {
        /// Write the effective configuration to the config path.
        #[arg(long)]
        init: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            profile: ProfileArgs::default(),
            max_servings: None,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plan_flags() {
        let cli = Cli::try_parse_from([
            "diet_planner",
            "--catalog",
            "foods.csv",
            "plan",
            "--age",
            "30",
            "--goal",
            "weight loss",
            "--max-servings",
            "2",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("foods.csv")));
        match cli.command {
            Some(Command::Plan {
                profile,
                max_servings,
                json,
            }) => {
                assert_eq!(profile.age, Some(30));
                assert_eq!(profile.goal.as_deref(), Some("weight loss"));
                assert!(profile.height.is_none());
                assert_eq!(max_servings, Some(2));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_no_subcommand_defaults_to_plan() {
        let cli = Cli::try_parse_from(["diet_planner"]).unwrap();
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Command::Plan { json: false, .. }
        ));
    }
}

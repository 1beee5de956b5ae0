use std::path::Path;

use clap::Parser;

use diet_planner_rs::catalog::save_items;
use diet_planner_rs::cli::{Cli, Command, ProfileArgs};
use diet_planner_rs::config::Config;
use diet_planner_rs::error::Result;
use diet_planner_rs::interface::{
    collect_profile, display_catalog, display_daily_plan, display_food_matches, display_targets,
};
use diet_planner_rs::logging;
use diet_planner_rs::planner::{compute_targets, plan_day};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or_default();
    let writing_config = matches!(command, Command::Config { init: true });

    let source = Config::source_path(cli.config.as_deref());
    let config = match &source {
        // `config --init` may target a file that does not exist yet.
        Some(path) if writing_config && !path.exists() => Config::default(),
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    logging::init_with_level(&config.logging.level);

    match source.as_deref() {
        Some(path) if path.exists() => tracing::info!(path = %path.display(), "loaded config"),
        _ => tracing::debug!("no config file found, using defaults"),
    }

    let catalog_path = cli.catalog.as_deref();

    match command {
        Command::Plan {
            profile,
            max_servings,
            json,
        } => cmd_plan(&config, catalog_path, &profile, max_servings, json),
        Command::Targets { profile, json } => cmd_targets(&profile, json),
        Command::Catalog { export } => cmd_catalog(&config, catalog_path, export.as_deref()),
        Command::Food { query } => cmd_food(&config, catalog_path, &query),
        Command::Config { init } => cmd_config(&config, cli.config.as_deref(), init),
    }
}

/// Compute targets and a meal plan for a profile.
fn cmd_plan(
    config: &Config,
    catalog_path: Option<&Path>,
    args: &ProfileArgs,
    max_servings: Option<u32>,
    json: bool,
) -> Result<()> {
    let catalog = config.catalog(catalog_path)?;
    let profile = collect_profile(args)?;
    let max_servings = max_servings.unwrap_or(config.planner.max_servings_per_food);

    let daily = plan_day(&profile, &catalog, config.planner.predictor, max_servings)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&daily)?);
    } else {
        display_daily_plan(&daily);
    }

    Ok(())
}

/// Compute targets only.
fn cmd_targets(args: &ProfileArgs, json: bool) -> Result<()> {
    let profile = collect_profile(args)?;
    let breakdown = compute_targets(&profile)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        display_targets(&breakdown);
    }

    Ok(())
}

fn cmd_catalog(config: &Config, catalog_path: Option<&Path>, export: Option<&Path>) -> Result<()> {
    let catalog = config.catalog(catalog_path)?;
    let predictor = config.planner.predictor.train(&catalog);
    display_catalog(&catalog, predictor.as_ref());

    if let Some(path) = export {
        save_items(path, catalog.items())?;
        println!("Wrote {} foods to {}", catalog.len(), path.display());
    }

    Ok(())
}

fn cmd_food(config: &Config, catalog_path: Option<&Path>, query: &str) -> Result<()> {
    let catalog = config.catalog(catalog_path)?;
    display_food_matches(query, &catalog.search(query));
    Ok(())
}

/// Print the effective configuration, optionally writing it out.
fn cmd_config(config: &Config, explicit_path: Option<&Path>, init: bool) -> Result<()> {
    println!("{}", config.to_toml()?);

    if init {
        let path = explicit_path
            .map(Path::to_path_buf)
            .unwrap_or_else(Config::default_config_path);
        if path.exists() {
            println!("Config already exists at {}", path.display());
        } else {
            config.save_to(&path)?;
            println!("Wrote config to {}", path.display());
        }
    }

    Ok(())
}

//! Configuration file support.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/diet_planner/config.toml`
//! unless a path is given explicitly. Every field has a default.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::{FoodCatalog, load_catalog};
use crate::error::{PlannerError, Result};
use crate::planner::{DEFAULT_MAX_SERVINGS_PER_FOOD, PredictorKind};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    #[serde(default = "default_max_servings")]
    pub max_servings_per_food: u32,

    #[serde(default)]
    pub predictor: PredictorKind,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_servings_per_food: default_max_servings(),
            predictor: PredictorKind::default(),
        }
    }
}

/// Where foods come from; the built-in table when no path is set.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_max_servings() -> u32 {
    DEFAULT_MAX_SERVINGS_PER_FOOD
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::source_path(None) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path
    ///
    /// Runs before the subscriber exists, so it does not log.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// File a load reads: the explicit path, else the standard path when it exists.
    pub fn source_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let path = Self::default_config_path();
                path.exists().then_some(path)
            }
        }
    }

    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("diet_planner")
            .join("config.toml")
    }

    /// Save the configuration, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PlannerError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Resolve the catalog: an explicit path wins over the configured one,
    /// and the built-in table is used when neither is set.
    pub fn catalog(&self, override_path: Option<&Path>) -> Result<FoodCatalog> {
        match override_path.or(self.catalog.path.as_deref()) {
            Some(path) => load_catalog(path),
            None => Ok(FoodCatalog::builtin()),
        }
    }
}

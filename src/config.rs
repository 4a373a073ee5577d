use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use pantryplan_kitchen::{EditMode, KitchenSettings};
use pantryplan_mealplan::PlanPolicy;
use pantryplan_shared::meal::PantryMode;
use pantryplan_shared::shopping::ItemOrder;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use strum::{AsRefStr, Display, EnumString};

const ACCOUNTS_FILENAME: &str = "accounts.json";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub pantry: PantryConfig,
    #[serde(default)]
    pub meals: MealsConfig,
    #[serde(default)]
    pub shopping: ShoppingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PlannerConfig {
    #[serde(default)]
    pub policy: PlanPolicy,
    /// Fixed seed for reproducible plans
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PantryConfig {
    #[serde(default)]
    pub mode: PantryMode,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct MealsConfig {
    #[serde(default)]
    pub edit: EditMode,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ShoppingConfig {
    #[serde(default)]
    pub order: ItemOrder,
}

#[derive(EnumString, Display, AsRefStr, Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (PANTRYPLAN__STORAGE__DATA_DIR, etc.)
    /// 2. Config file specified by path, PANTRYPLAN_CONFIG or config/default.toml
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("storage.data_dir", ".pantryplan")?
            .set_default("planner.policy", PlanPolicy::default().to_string())?
            .set_default("pantry.mode", PantryMode::default().to_string())?
            .set_default("meals.edit", EditMode::default().to_string())?
            .set_default("shopping.order", ItemOrder::default().to_string())?
            .set_default("logging.level", default_log_level())?
            .set_default("logging.format", LogFormat::default().to_string())?;

        let config_file_path = config_path
            .or_else(|| env::var("PANTRYPLAN_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file keeps the defaults
        if Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PANTRYPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.storage.data_dir.as_os_str().is_empty() {
            return Err("Storage data_dir must not be empty".to_string());
        }
        if self.logging.level.trim().is_empty() {
            return Err("Logging level must not be empty".to_string());
        }
        Ok(())
    }

    pub fn kitchen_settings(&self) -> KitchenSettings {
        KitchenSettings {
            pantry_mode: self.pantry.mode,
            edit_mode: self.meals.edit,
            item_order: self.shopping.order,
        }
    }

    pub fn accounts_path(&self) -> PathBuf {
        self.storage.data_dir.join(ACCOUNTS_FILENAME)
    }
}

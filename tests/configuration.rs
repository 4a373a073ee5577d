//! Tests for configuration system

use std::fs;
use std::path::Path;

use pantryplan::Config;
use pantryplan::config::LogFormat;
use pantryplan_kitchen::{EditMode, KitchenSettings};
use pantryplan_mealplan::PlanPolicy;
use pantryplan_shared::meal::PantryMode;
use pantryplan_shared::shopping::ItemOrder;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.storage.data_dir, Path::new(".pantryplan"));
    assert_eq!(config.planner.policy, PlanPolicy::Scored);
    assert_eq!(config.planner.seed, None);
    assert_eq!(config.kitchen_settings(), KitchenSettings::default());
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::load(Some("does/not/exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.storage.data_dir, Path::new(".pantryplan"));
    assert_eq!(config.planner.policy, PlanPolicy::Scored);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_file_overrides_defaults() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("pantryplan.toml");
    fs::write(
        &path,
        r#"
[storage]
data_dir = "/var/lib/pantryplan"

[planner]
policy = "pantry_filter"
seed = 42

[pantry]
mode = "replace"

[meals]
edit = "reinsert"

[shopping]
order = "sorted"

[logging]
level = "debug"
format = "json"
"#,
    )?;

    let config = Config::load(Some(path.display().to_string()))?;

    assert_eq!(config.storage.data_dir, Path::new("/var/lib/pantryplan"));
    assert_eq!(config.planner.policy, PlanPolicy::PantryFilter);
    assert_eq!(config.planner.seed, Some(42));
    assert_eq!(
        config.kitchen_settings(),
        KitchenSettings {
            pantry_mode: PantryMode::Replace,
            edit_mode: EditMode::Reinsert,
            item_order: ItemOrder::Sorted,
        }
    );
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
    assert_eq!(
        config.accounts_path(),
        Path::new("/var/lib/pantryplan/accounts.json")
    );

    Ok(())
}

#[test]
fn test_unknown_policy_is_rejected() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("pantryplan.toml");
    fs::write(&path, "[planner]\npolicy = \"random\"\n")?;

    assert!(Config::load(Some(path.display().to_string())).is_err());

    Ok(())
}

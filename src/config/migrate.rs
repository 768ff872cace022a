//! Configuration file migrations: older config files may lack fields that
//! were added later (lateness thresholds, the deduction ladder). `--check`
//! reports what is missing, `--migrate` fills the gaps in place.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Fields every up-to-date config file must carry.
const REQUIRED_KEYS: &[&str] = &[
    "database",
    "employee",
    "scheduled_start",
    "late_threshold",
    "deduction_rules",
    "separator_char",
    "show_weekday",
];

/// Return the list of keys missing from the config file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

    let map = match yaml.as_mapping() {
        Some(m) => m,
        None => return Err(AppError::Config("config file is not a YAML mapping".into())),
    };

    let mut missing = Vec::new();
    for key in REQUIRED_KEYS {
        let k = Value::String((*key).to_string());
        if map.get(&k).is_none() {
            missing.push((*key).to_string());
        }
    }

    Ok(missing)
}

/// Print a report of missing fields without changing anything.
pub fn check_config(path: &Path) -> AppResult<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        success("Configuration file is up to date.");
    } else {
        info(format!(
            "Configuration file is missing: {}. Run `config --migrate` to fill in defaults.",
            missing.join(", ")
        ));
    }

    Ok(())
}

/// Rewrite the config file with defaults filled in for any missing field.
/// Existing values are preserved untouched.
pub fn migrate_config(path: &Path) -> AppResult<()> {
    let missing = missing_keys(path)?;

    if missing.is_empty() {
        info("Nothing to migrate: configuration file is up to date.");
        return Ok(());
    }

    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let mut yaml: Value = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;

    let defaults =
        serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;

    if let (Some(map), Some(default_map)) = (yaml.as_mapping_mut(), defaults.as_mapping()) {
        for key in &missing {
            let k = Value::String(key.clone());
            if let Some(v) = default_map.get(&k) {
                map.insert(k, v.clone());
            }
        }
    }

    let out = serde_yaml::to_string(&yaml).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, out).map_err(|_| AppError::ConfigSave)?;

    success(format!(
        "Configuration migrated: added {}.",
        missing.join(", ")
    ));
    Ok(())
}

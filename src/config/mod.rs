use crate::core::policy::LatenessRule;
use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_employee")]
    pub employee: String,
    #[serde(default = "default_scheduled_start")]
    pub scheduled_start: String,
    #[serde(default = "default_late_threshold")]
    pub late_threshold: u32,
    #[serde(default = "default_deduction_rules")]
    pub deduction_rules: Vec<LatenessRule>,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
}

fn default_employee() -> String {
    "default".to_string()
}
fn default_scheduled_start() -> String {
    "09:00".to_string()
}
fn default_late_threshold() -> u32 {
    5
}
fn default_deduction_rules() -> Vec<LatenessRule> {
    vec![
        LatenessRule {
            minutes: 10,
            amount: 100,
        },
        LatenessRule {
            minutes: 30,
            amount: 200,
        },
    ]
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> String {
    "none".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            employee: default_employee(),
            scheduled_start: default_scheduled_start(),
            late_threshold: default_late_threshold(),
            deduction_rules: default_deduction_rules(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("punchlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchlog.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("punchlog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        }
    }

    /// Persist the configuration. The engine never calls this itself: rule
    /// mutations return a new value and the command layer decides to save.
    pub fn save(&self) -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// The shift start used for lateness classification.
    pub fn scheduled_start_time(&self) -> AppResult<NaiveTime> {
        parse_time(&self.scheduled_start)
            .ok_or_else(|| AppError::Config(format!(
                "invalid scheduled_start '{}' (expected HH:MM)",
                self.scheduled_start
            )))
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            if crate::utils::path::is_absolute(&name) {
                PathBuf::from(&name)
            } else {
                dir.join(&name)
            }
        } else {
            dir.join("punchlog.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).unwrap();
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}

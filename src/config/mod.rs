use crate::errors::{AppError, AppResult};
use crate::models::category::UNCONFIRMED_TITLE;
use crate::models::production_calendar::{CalendarPolarity, UPSTREAM_POLARITY};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_polarity")]
    pub calendar_polarity: CalendarPolarity,
    #[serde(default = "default_unconfirmed_title")]
    pub unconfirmed_title: String,
    #[serde(default)]
    pub unlimited_counts_calendar_days: bool,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_dataset() -> String {
    Config::config_dir()
        .join("dataset.json")
        .to_string_lossy()
        .to_string()
}
fn default_polarity() -> CalendarPolarity {
    UPSTREAM_POLARITY
}
fn default_unconfirmed_title() -> String {
    UNCONFIRMED_TITLE.to_string()
}
fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset: default_dataset(),
            calendar_polarity: default_polarity(),
            unconfirmed_title: default_unconfirmed_title(),
            unlimited_counts_calendar_days: false,
            date_format: default_date_format(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rleavecalc")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rleavecalc")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rleavecalc.conf")
    }

    /// Load configuration from the default file, or defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        if cfg.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character, got '{}'",
                cfg.separator_char
            )));
        }
        Ok(cfg)
    }

    /// Dataset path with `~/` expanded.
    pub fn dataset_path(&self) -> PathBuf {
        expand_tilde(&self.dataset)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Forecast account identifier (Forecast-Account-ID header).
    pub account_id: String,
    /// Authorization token (Authorization header).
    pub authorization: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_days")]
    pub default_days: i64,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    "https://api.forecastapp.com".to_string()
}
fn default_days() -> i64 {
    1
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account_id: String::new(),
            authorization: String::new(),
            api_base: default_api_base(),
            default_days: default_days(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("schedbot")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".schedbot")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("schedbot.conf")
    }

    /// Load configuration from file (defaults if not found), then apply
    /// any FORECAST_* environment overrides. Env wins over file so the
    /// token never has to live on disk.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?
        } else {
            Config::default()
        };

        if let Ok(account_id) = env::var("FORECAST_ACCOUNT_ID") {
            cfg.account_id = account_id;
        }
        if let Ok(authorization) = env::var("FORECAST_AUTHORIZATION") {
            cfg.authorization = authorization;
        }
        if let Ok(api_base) = env::var("FORECAST_API_BASE") {
            cfg.api_base = api_base;
        }

        Ok(cfg)
    }

    /// Both credentials must be present before any remote call is made.
    pub fn check(&self) -> AppResult<()> {
        if self.account_id.is_empty() {
            return Err(AppError::Config(
                "account_id is not set (config file or FORECAST_ACCOUNT_ID)".to_string(),
            ));
        }
        if self.authorization.is_empty() {
            return Err(AppError::Config(
                "authorization is not set (config file or FORECAST_AUTHORIZATION)".to_string(),
            ));
        }
        Ok(())
    }

    /// Write a starter configuration file for the user to fill in.
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Err(AppError::Config(format!(
                "configuration file already exists: {}",
                path.display()
            )));
        }

        let yaml = serde_yaml::to_string(&Config::default()).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(&path)?;
        file.write_all(yaml.as_bytes())?;
        println!("Config file: {:?}", path);

        Ok(())
    }
}

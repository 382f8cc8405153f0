use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const APP_NAME: &str = "store-lookup";
const DEFAULT_STORE_LIST_FILE: &str = "default_store_list.xlsx";
const DEFAULT_EXPORT_FILE: &str = "filtered_stores.xlsx";

/// Setting keys accepted by `config set` / `config reset`
pub const SETTING_KEYS: &[&str] = &["default_store_list", "export_file_name"];

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Workbook loaded when no store list is supplied; replaced on upload
    #[serde(default = "default_store_list")]
    pub default_store_list: PathBuf,
    /// File name offered for filtered-list downloads
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_store_list() -> PathBuf {
    Config::config_dir()
        .map(|dir| dir.join(DEFAULT_STORE_LIST_FILE))
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_LIST_FILE))
}

fn default_export_file_name() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_store_list: default_store_list(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = if cfg!(target_os = "linux") {
            // Use XDG config directory on Linux
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join(APP_NAME)
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(format!(".{}", APP_NAME))
        };
        Ok(dir)
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            info!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let config_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml(&config_content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        debug!("Saving config to: {:?}", config_path);

        let config_content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&config_path, config_content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn get_setting(&self, key: &str) -> Result<String> {
        match key {
            "default_store_list" => Ok(self.settings.default_store_list.display().to_string()),
            "export_file_name" => Ok(self.settings.export_file_name.clone()),
            _ => anyhow::bail!(
                "Unknown setting '{}'. Valid settings: {}",
                key,
                SETTING_KEYS.join(", ")
            ),
        }
    }

    pub fn set_setting(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            anyhow::bail!("Setting '{}' cannot be empty", key);
        }

        match key {
            "default_store_list" => self.settings.default_store_list = PathBuf::from(value),
            "export_file_name" => self.settings.export_file_name = value.to_string(),
            _ => anyhow::bail!(
                "Unknown setting '{}'. Valid settings: {}",
                key,
                SETTING_KEYS.join(", ")
            ),
        }

        info!("Setting {} = {}", key, value);
        Ok(())
    }

    pub fn reset_setting(&mut self, key: &str) -> Result<()> {
        let defaults = Settings::default();
        match key {
            "default_store_list" => self.settings.default_store_list = defaults.default_store_list,
            "export_file_name" => self.settings.export_file_name = defaults.export_file_name,
            _ => anyhow::bail!(
                "Unknown setting '{}'. Valid settings: {}",
                key,
                SETTING_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}

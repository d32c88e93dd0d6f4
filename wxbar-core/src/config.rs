use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Font settings a bar needs to render owfont glyphs.
///
/// Cosmetic only: the status-line logic never reads them. Stored as the
/// `font` table of the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    pub size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "owfont".to_string(),
            size: 16,
        }
    }
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Numeric city id from openweathermap.org.
    pub city_id: Option<String>,

    /// true for Celsius, false for Fahrenheit.
    pub metric: bool,

    /// Seconds between poll cycles in `wxbar watch`.
    pub update_interval: u64,

    pub font: FontConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            city_id: None,
            metric: false,
            update_interval: 1800,
            font: FontConfig::default(),
        }
    }
}

impl Config {
    /// Load config from disk, or return the defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "wxbar", "wxbar")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Let `OPENWEATHER_API_KEY` supply or override the stored API key.
    pub fn apply_env(&mut self) {
        if let Ok(key) = env::var("OPENWEATHER_API_KEY") {
            if !key.trim().is_empty() {
                self.api_key = Some(key);
            }
        }
    }

    /// Both credentials, trimmed, when both are present and non-blank.
    pub fn credentials(&self) -> Option<(String, String)> {
        let api_key = self.api_key.as_deref().map(str::trim).filter(|k| !k.is_empty())?;
        let city_id = self.city_id.as_deref().map(str::trim).filter(|c| !c.is_empty())?;

        Some((api_key.to_string(), city_id.to_string()))
    }
}

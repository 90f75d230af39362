use crate::pipeline::ModelKind;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Demo configuration persisted as TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    #[serde(default)]
    pub model: ModelKind,

    /// Simulation tick interval in milliseconds
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default)]
    pub upload: UploadConfig,
}

/// Upload simulation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Upload several files per run instead of one
    #[serde(default = "default_true")]
    pub batch_mode: bool,

    /// Upload tick interval in milliseconds
    #[serde(default = "default_upload_tick_ms")]
    pub tick_ms: u64,
}

fn default_tick_interval_ms() -> u64 {
    100
}

fn default_upload_tick_ms() -> u64 {
    200
}

fn default_true() -> bool {
    true
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            batch_mode: true,
            tick_ms: default_upload_tick_ms(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            tick_interval_ms: default_tick_interval_ms(),
            upload: UploadConfig::default(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from the default path, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path, creating it if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = DemoConfig::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(path).context("Failed to read config file")?;

        let config: DemoConfig =
            toml::from_str(&contents).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let toml_string = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, toml_string).context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;

        Ok(home.join(".signscope").join("config.toml"))
    }
}

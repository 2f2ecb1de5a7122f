//! Field settings

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::interval::Defaults;
use crate::models::Unit;

/// Field settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Amount used when a record has no value
    pub default_amount: i64,

    /// Unit for the default amount, bare amounts and zero display
    pub default_unit: Unit,

    /// Show a seconds component when displaying
    pub show_seconds: bool,

    /// Message catalog path, English when unset
    pub catalog_path: Option<String>,

    /// Log level
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_amount: 0,
            default_unit: Unit::Days,
            show_seconds: false,
            catalog_path: None,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from file or create default
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("reading {}", config_path.display()))?;
            let settings: Self = serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", config_path.display()))?;
            Ok(settings)
        } else {
            Ok(Self::default())
        }
    }

    /// Save settings to file
    pub fn save(&self, path: Option<&str>) -> Result<()> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_config_path);

        // Create parent directory if needed
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn defaults(&self) -> Defaults {
        Defaults {
            amount: self.default_amount,
            unit: self.default_unit,
        }
    }

    /// Get default config directory
    pub fn config_dir() -> PathBuf {
        ProjectDirs::from("com", "interval", "interval")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(".config")
                    .join("interval")
            })
    }

    /// Get default config file path
    pub fn default_config_path() -> PathBuf {
        Self::config_dir().join("config.json")
    }
}

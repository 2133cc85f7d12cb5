//! Configuration handling for phone-store
//!
//! Configuration is stored in `phone-store.toml` inside the data directory
//! (shop) and `~/.config/phone-store/config.toml` (global).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the shop configuration file inside the data directory
pub const CONFIG_FILE: &str = "phone-store.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// CSV file names, relative to the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilesConfig {
    pub phones: String,
    pub invoices: String,
    pub customers: String,
    pub employees: String,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            phones: "phones.csv".to_string(),
            invoices: "invoices.csv".to_string(),
            customers: "customers.csv".to_string(),
            employees: "employees.csv".to_string(),
        }
    }
}

/// Parameters for the demo walkthrough
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Year used for the monthly revenue report
    pub demo_year: i32,

    /// Net total an invoice needs to count toward a salesperson (VND)
    pub demo_min_revenue: f64,

    /// Units a phone needs to count as well stocked
    pub demo_min_stock: i32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            demo_year: 2024,
            demo_min_revenue: 20_000_000.0,
            demo_min_stock: 10,
        }
    }
}

/// Shop-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShopConfig {
    /// Seed sample records when `init` creates the shop
    pub seed_when_empty: bool,

    pub files: FilesConfig,

    pub report: ReportConfig,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            seed_when_empty: true,
            files: FilesConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl ShopConfig {
    /// Loads the configuration from a data directory
    ///
    /// A missing file yields the defaults.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read shop config: {}", config_path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse shop config")?;
        config.validate()?;
        Ok(config)
    }

    /// Writes the configuration into a data directory
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let config_path = data_dir.join(CONFIG_FILE);

        let content = toml::to_string_pretty(self).context("Failed to serialize shop config")?;

        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write shop config: {}", config_path.display()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let names = [
            ("phones", &self.files.phones),
            ("invoices", &self.files.invoices),
            ("customers", &self.files.customers),
            ("employees", &self.files.employees),
        ];

        for (entity, name) in names {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("files.{} must not be empty", entity)));
            }
        }

        for (i, (_, a)) in names.iter().enumerate() {
            if names[i + 1..].iter().any(|(_, b)| a == b) {
                return Err(ConfigError::Invalid(format!("file '{}' is used by more than one entity", a)));
            }
        }

        Ok(())
    }
}

/// Output format for commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global user configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GlobalConfig {
    /// Default output format (text or json)
    pub default_format: OutputFormat,

    /// Data directory used when neither `--data-dir` nor the env var is set
    pub data_dir: Option<PathBuf>,
}

impl GlobalConfig {
    /// Returns the global config directory
    pub fn dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "phone-store", "phone-store")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads global configuration, falling back to defaults
    pub fn load() -> Result<Self> {
        let config_dir = match Self::dir() {
            Some(dir) => dir,
            None => return Ok(Self::default()),
        };

        Self::load_from(&config_dir.join("config.toml"))
    }

    /// Loads global configuration from an explicit file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read global config: {}", config_path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse global config")
    }
}
